//! Core state type for the solver output
//!
//! `Trajectory` holds the position and velocity series produced by a
//! finished run, indexed by step i with t_i = i·dt. Both sequences are
//! written once by the step loop and read-only afterwards

#[derive(Debug, Clone)]
pub struct Trajectory {
    pub dt: f64,     // step size used by the run
    pub u: Vec<f64>, // position series U[0..N-1]
    pub v: Vec<f64>, // velocity series V[0..N-1]
}

impl Trajectory {
    /// Number of stored samples N
    pub fn len(&self) -> usize {
        self.u.len()
    }

    pub fn is_empty(&self) -> bool {
        self.u.is_empty()
    }

    /// Time of sample i
    pub fn time(&self, i: usize) -> f64 {
        i as f64 * self.dt
    }

    /// Ordered `(t_i, U[i])` pairs for the output stage
    pub fn series(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.u
            .iter()
            .enumerate()
            .map(|(i, &u)| (i as f64 * self.dt, u))
    }
}

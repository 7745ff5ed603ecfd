//! Right-hand-side contributors for the integro-differential oscillator
//!
//! Defines the [`Forcing`] trait and [`ForcingSet`], which sums the three
//! terms of the acceleration-like quantity
//! `V' = σ₀ − λ²·U[i−1] + λ²·∫ memory`:
//! - [`ConstantDrive`]     – the constant forcing σ₀
//! - [`LinearRestoring`]   – the instantaneous stiffness term −λ²·U[i−1]
//! - [`MemoryConvolution`] – the O(i) history integral over all prior steps

use crate::simulation::error::SimError;
use crate::simulation::params::Derived;
use crate::simulation::special::upper_inc_gamma;

/// Collection of right-hand-side terms
/// Each term implements [`Forcing`] and their contributions are summed
/// into the scalar `V'` for the current step
pub struct ForcingSet {
    terms: Vec<Box<dyn Forcing + Send + Sync>>,
}

impl ForcingSet {
    /// Create an empty forcing set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add a forcing term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Forcing + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Sum all term contributions at step `i` given the position history `u`
    ///
    /// `u` is the full storage slice of length N; only the finalized prefix
    /// `u[0..i]` carries stepped values, later slots still hold their
    /// initial zeros. Terms are summed in registration order, so the fold
    /// matches `σ₀ − λ²·U[i−1] + integral` exactly
    pub fn accumulate_rhs(&self, i: usize, u: &[f64]) -> Result<f64, SimError> {
        let mut rhs = 0.0;
        for term in &self.terms {
            rhs += term.contribute(i, u)?;
        }
        Ok(rhs)
    }
}

/// Trait for scalar right-hand-side sources
/// Implementations return their contribution to `V'` at step `i`
pub trait Forcing {
    fn contribute(&self, i: usize, u: &[f64]) -> Result<f64, SimError>;
}

/// Constant external forcing σ₀
pub struct ConstantDrive {
    pub sigma0: f64,
}

impl Forcing for ConstantDrive {
    fn contribute(&self, _i: usize, _u: &[f64]) -> Result<f64, SimError> {
        Ok(self.sigma0)
    }
}

/// Instantaneous restoring term −λ²·U[i−1]
pub struct LinearRestoring {
    pub lambda2: f64, // λ², squared once at build time
}

impl Forcing for LinearRestoring {
    fn contribute(&self, i: usize, u: &[f64]) -> Result<f64, SimError> {
        Ok(-self.lambda2 * u[i - 1])
    }
}

/// Sub-interval of past time covered by history index `j` at step `i`,
/// before scaling by β
///
/// The raw lower bound `(i−j−1)·Δt` is floored at 0: the newest
/// sub-interval (`j = i−1`) touches the kernel's singular boundary and a
/// negative argument is outside the kernel domain
pub fn history_window(i: usize, j: usize, dt: f64) -> (f64, f64) {
    let x_lower = ((i - j - 1) as f64 * dt).max(0.0);
    let x_upper = (i - j) as f64 * dt;
    (x_lower, x_upper)
}

/// Fading-memory convolution term: λ² times the history integral
/// accumulated over every prior step j = 0..i−1
///
/// Per window, four kernel evaluations (shapes α and α+1 at both
/// endpoints) combine into a position-memory term `A_j` and a
/// velocity-memory term `B_j`. Every prior step contributes; there is no
/// tolerance-based truncation of the sum
pub struct MemoryConvolution {
    pub epsilon: f64,
    pub alpha: f64,
    pub beta: f64,
    pub lambda2: f64,
    pub dt: f64,
    pub derived: Derived,
}

impl Forcing for MemoryConvolution {
    fn contribute(&self, i: usize, u: &[f64]) -> Result<f64, SimError> {
        let d = &self.derived;
        let mut integral = 0.0;

        for j in 0..i {
            let (x_lower, x_upper) = history_window(i, j, self.dt);
            let a_lower = self.beta * x_lower;
            let a_upper = self.beta * x_upper;

            // Kernel differences at shape α over the window endpoints
            let g_lower = upper_inc_gamma(self.alpha, a_lower, d.gamma_alpha);
            let g_upper = upper_inc_gamma(self.alpha, a_upper, d.gamma_alpha);

            // Direct memory of the past position U[j]
            let a_j = self.epsilon * u[j] * (g_lower - g_upper) / d.beta_alpha;

            // Elapsed-time weight for the velocity-history term
            let c = (i - j) as f64 * self.dt;
            let term1 = c * (g_lower - g_upper) / d.beta_alpha;

            // Antiderivative correction at shape α+1
            let gp_lower = upper_inc_gamma(self.alpha + 1.0, a_lower, d.gamma_alpha_p1);
            let gp_upper = upper_inc_gamma(self.alpha + 1.0, a_upper, d.gamma_alpha_p1);
            let term2 = (gp_lower - gp_upper) / d.beta_alpha_p1;

            // Forward-difference velocity history. At j = i−1 this reads
            // u[i], which the step loop has not written yet; that slot
            // still holds its initial zero (see DESIGN.md)
            let b_j = self.epsilon * (u[j + 1] - u[j]) / self.dt * (term1 - term2);

            let contribution = a_j + b_j;
            if !contribution.is_finite() {
                return Err(SimError::NonFiniteHistory { step: i, window: j });
            }
            integral += contribution;
        }

        Ok(self.lambda2 * integral)
    }
}

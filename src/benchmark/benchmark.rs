use std::time::Instant;

use crate::configuration::config::{ParametersConfig, ScenarioConfig};
use crate::simulation::integrator::run_solver;
use crate::simulation::scenario::Scenario;
use crate::simulation::special::{gamma, upper_inc_gamma};

/// Time batched kernel evaluations across the argument range a run visits
pub fn bench_kernel() {
    let s = 0.074;
    let gamma_s = gamma(s);

    // Arguments spanning [0, beta * t_max] for the reference constants
    let xs: Vec<f64> = (0..100_000).map(|k| k as f64 * 5.0e-7).collect();

    // Warm up
    let mut acc = 0.0;
    for &x in &xs {
        acc += upper_inc_gamma(s, x, gamma_s);
    }

    let t0 = Instant::now();
    for &x in &xs {
        acc += upper_inc_gamma(s, x, gamma_s);
    }
    let dt = t0.elapsed().as_secs_f64();

    println!("kernel: {} evals in {:8.6} s (checksum {:.3})", xs.len(), dt, acc);
}

/// Time full runs at growing N; wall time grows with the square of N
/// because step i replays the whole history 0..i
pub fn bench_history() {
    // Different horizon lengths to test
    let ns = [250usize, 500, 1000, 2000];

    for n in ns {
        let dt = 0.001;
        let cfg = ScenarioConfig {
            parameters: ParametersConfig {
                epsilon: 0.1,
                alpha: 0.074,
                beta: 0.05,
                lambda: 100.0,
                sigma0: 1.0,
                phi0: 0.0,
                phi1: 1.0,
                t_max: (n - 1) as f64 * dt,
                dt,
            },
            output: None,
        };
        let scenario = Scenario::build_scenario(cfg).expect("benchmark scenario must validate");

        // Warm up
        run_solver(&scenario).expect("benchmark warm-up run failed");

        let t0 = Instant::now();
        let traj = run_solver(&scenario).expect("benchmark run failed");
        let secs = t0.elapsed().as_secs_f64();

        let last = traj.len() - 1;
        println!(
            "N = {:5}, run = {:8.6} s, U[{}] = {:+.6e}",
            traj.len(),
            secs,
            last,
            traj.u[last]
        );
    }
}

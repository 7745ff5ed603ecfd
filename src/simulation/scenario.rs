//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! consumed by the step loop:
//! - validated numerical parameters (`Parameters`)
//! - precomputed kernel constants (`Derived`)
//! - the registered right-hand-side terms (`ForcingSet`)
//! - output settings (`Output`)
//!
//! All domain validation happens here, before any stepping; a rejected
//! configuration names the offending parameter and produces no output

use std::path::PathBuf;

use crate::configuration::config::ScenarioConfig;
use crate::simulation::error::SimError;
use crate::simulation::forces::{ConstantDrive, ForcingSet, LinearRestoring, MemoryConvolution};
use crate::simulation::params::{Derived, Parameters};

/// Where the finished trajectory goes, resolved from the optional
/// `output` block of the scenario file
#[derive(Debug, Clone, Default)]
pub struct Output {
    pub plot: Option<PathBuf>, // PNG chart of U(t)
    pub csv: Option<PathBuf>,  // (t, u, v) rows
}

/// Fully-initialized runtime bundle for one run
///
/// Constructed from a [`ScenarioConfig`] and handed to
/// [`run_solver`](crate::simulation::integrator::run_solver); the output
/// stage reads the `output` settings after the run finishes
pub struct Scenario {
    pub parameters: Parameters,
    pub derived: Derived,
    pub forces: ForcingSet,
    pub output: Output,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            epsilon: p_cfg.epsilon,
            alpha: p_cfg.alpha,
            beta: p_cfg.beta,
            lambda: p_cfg.lambda,
            sigma0: p_cfg.sigma0,
            phi0: p_cfg.phi0,
            phi1: p_cfg.phi1,
            t_max: p_cfg.t_max,
            dt: p_cfg.dt,
        };
        validate(&parameters)?;

        // Kernel constants, computed once and shared by every history window
        let derived = Derived::from_parameters(&parameters);

        // Right-hand-side terms, registered in the order they are summed:
        // σ₀, then −λ²·U[i−1], then the λ²-scaled history integral
        let lambda2 = parameters.lambda * parameters.lambda;
        let forces = ForcingSet::new()
            .with(ConstantDrive {
                sigma0: parameters.sigma0,
            })
            .with(LinearRestoring { lambda2 })
            .with(MemoryConvolution {
                epsilon: parameters.epsilon,
                alpha: parameters.alpha,
                beta: parameters.beta,
                lambda2,
                dt: parameters.dt,
                derived: derived.clone(),
            });

        let output = match cfg.output {
            Some(o) => Output {
                plot: o.plot.map(PathBuf::from),
                csv: o.csv.map(PathBuf::from),
            },
            None => Output::default(),
        };

        Ok(Self {
            parameters,
            derived,
            forces,
            output,
        })
    }
}

/// Reject any parameter outside its domain, naming the offender
fn validate(p: &Parameters) -> Result<(), SimError> {
    let fields = [
        ("epsilon", p.epsilon),
        ("alpha", p.alpha),
        ("beta", p.beta),
        ("lambda", p.lambda),
        ("sigma0", p.sigma0),
        ("phi0", p.phi0),
        ("phi1", p.phi1),
        ("t_max", p.t_max),
        ("dt", p.dt),
    ];
    for (name, value) in fields {
        if !value.is_finite() {
            return Err(SimError::InvalidParameter {
                name,
                value,
                reason: "must be finite",
            });
        }
    }

    if p.alpha <= 0.0 || p.alpha >= 1.0 {
        return Err(SimError::InvalidParameter {
            name: "alpha",
            value: p.alpha,
            reason: "fractional order must lie in (0, 1)",
        });
    }
    if p.beta <= 0.0 {
        return Err(SimError::InvalidParameter {
            name: "beta",
            value: p.beta,
            reason: "decay rate must be positive",
        });
    }
    if p.lambda <= 0.0 {
        return Err(SimError::InvalidParameter {
            name: "lambda",
            value: p.lambda,
            reason: "stiffness scale must be positive",
        });
    }
    // Zero is admitted: it is the degenerate memoryless oscillator used
    // by the zero-memory checks
    if p.epsilon < 0.0 {
        return Err(SimError::InvalidParameter {
            name: "epsilon",
            value: p.epsilon,
            reason: "coupling strength must be non-negative",
        });
    }
    if p.dt <= 0.0 {
        return Err(SimError::InvalidParameter {
            name: "dt",
            value: p.dt,
            reason: "step size must be positive",
        });
    }
    if p.t_max <= 0.0 {
        return Err(SimError::InvalidParameter {
            name: "t_max",
            value: p.t_max,
            reason: "horizon must be positive",
        });
    }
    if p.t_max < p.dt {
        return Err(SimError::InvalidParameter {
            name: "t_max",
            value: p.t_max,
            reason: "horizon must cover at least one step",
        });
    }

    Ok(())
}

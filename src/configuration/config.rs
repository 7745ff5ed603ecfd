//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! run. A scenario consists of:
//!
//! - [`ParametersConfig`] – the nine numerical/physical constants
//! - [`OutputConfig`]     – optional destinations for the finished series
//! - [`ScenarioConfig`]   – top-level wrapper used to load from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   epsilon: 0.1            # memory coupling strength
//!   alpha: 0.074            # fractional order, in (0, 1)
//!   beta: 0.05              # memory decay rate
//!   lambda: 100.0           # stiffness / frequency scale
//!   sigma0: 1.0             # constant forcing
//!   phi0: 0.0               # initial position
//!   phi1: 1.0               # initial velocity
//!   t_max: 1.0              # simulation horizon
//!   dt: 0.001               # step size
//!
//! output:
//!   plot: "u_t.png"         # optional PNG chart of U(t)
//!   csv: "u_t.csv"          # optional (t, u, v) rows
//! ```
//!
//! The engine maps this configuration into its internal runtime scenario
//! representation; validation happens there, not during deserialization

use serde::Deserialize;

/// Numerical and physical constants of a run
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub epsilon: f64, // memory coupling strength, >= 0
    pub alpha: f64,   // fractional order, in (0, 1)
    pub beta: f64,    // memory decay rate, > 0
    pub lambda: f64,  // stiffness / frequency scale, > 0
    pub sigma0: f64,  // constant forcing
    pub phi0: f64,    // initial position U[0]
    pub phi1: f64,    // initial velocity V[0]
    pub t_max: f64,   // simulation horizon, >= dt
    pub dt: f64,      // step size, > 0
}

/// Optional destinations for the finished trajectory
#[derive(Deserialize, Debug, Default)]
pub struct OutputConfig {
    pub plot: Option<String>, // PNG chart path
    pub csv: Option<String>,  // CSV path
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig,  // constants of the run
    pub output: Option<OutputConfig>,  // where the series goes, if anywhere
}

pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::error::SimError;
pub use simulation::forces::{
    history_window, ConstantDrive, Forcing, ForcingSet, LinearRestoring, MemoryConvolution,
};
pub use simulation::integrator::{euler_cromer_step, run_solver};
pub use simulation::params::{Derived, Parameters};
pub use simulation::scenario::{Output, Scenario};
pub use simulation::special::{gamma, ln_gamma, upper_inc_gamma};
pub use simulation::states::Trajectory;

pub use configuration::config::{OutputConfig, ParametersConfig, ScenarioConfig};

pub use visualization::{csv::write_csv, plot::render_trajectory};

pub use benchmark::benchmark::{bench_history, bench_kernel};

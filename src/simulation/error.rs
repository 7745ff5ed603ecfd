//! Error types for scenario building and the step loop

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// A parameter violates its domain constraint. Detected once, before
    /// any stepping; no partial output is produced
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// The history accumulation produced a non-finite contribution.
    /// Fatal at the step where it occurs; the run is not retried
    #[error("non-finite history contribution at step {step}, sub-interval {window}")]
    NonFiniteHistory { step: usize, window: usize },
}

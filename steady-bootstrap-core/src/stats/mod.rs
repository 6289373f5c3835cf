//! Statistical machinery for the steady-state estimate.

pub mod bootstrap;
pub mod confidence;
pub mod summation;

pub use bootstrap::{
    bootstrap_steady_perf, resamples_per_execution, BootstrapConfig, BootstrapError,
    SteadyStateEstimate, DEFAULT_BOOTSTRAP_ITERATIONS,
};
pub use confidence::{ConfidenceLevel, ConfidenceLevelError};
pub use summation::{compensated_mean, KahanSum};

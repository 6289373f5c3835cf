//! Core types and utilities for steady-bootstrap.
//!
//! This crate holds the percentile-bootstrap estimator for steady-state
//! benchmark performance, the grouped measurement model it consumes, and the
//! line-oriented wire protocol shared with the CLI.

pub mod measurements;
pub mod protocol;
pub mod stats;

// Re-export main types for convenience
pub use measurements::{Execution, Segment};
pub use protocol::{EstimateRequest, EstimateResponse, ProtocolError};
pub use stats::{
    bootstrap_steady_perf, BootstrapConfig, BootstrapError, ConfidenceLevel,
    ConfidenceLevelError, SteadyStateEstimate, DEFAULT_BOOTSTRAP_ITERATIONS,
};

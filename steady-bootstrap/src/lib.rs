//! steady-bootstrap: steady-state performance estimates from noisy timings
//!
//! This library wraps the core percentile-bootstrap estimator in a
//! line-oriented pipe interface: one JSON document of grouped steady-state
//! timings in, one "center,ci" line out.

pub mod cli;
pub mod config;
pub mod report;

// Re-export core types for convenience
pub use steady_bootstrap_core::{
    bootstrap_steady_perf, BootstrapConfig, BootstrapError, ConfidenceLevel, Execution,
    EstimateRequest, EstimateResponse, Segment, SteadyStateEstimate,
};

// Re-export main types from this crate
pub use cli::Cli;
pub use config::Config;
pub use report::{EstimateReport, ReportError, Reporter, TerminalReporter};

use steady_bootstrap_core::{ConfidenceLevel, SteadyStateEstimate};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Everything the reporter needs to describe one estimation run.
#[derive(Debug, Clone)]
pub struct EstimateReport {
    pub estimate: SteadyStateEstimate,
    pub confidence_level: ConfidenceLevel,
    /// Number of process executions the estimate was pooled over.
    pub executions: usize,
}

pub trait Reporter: Send + Sync {
    fn report(&self, report: &EstimateReport) -> Result<(), ReportError>;
}

mod terminal;
pub use terminal::TerminalReporter;

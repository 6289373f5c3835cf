//! The line-oriented process interface.
//!
//! The estimator is driven over a pipe: one line of JSON on stdin holding the
//! nested executions -> segments -> samples document, one comma-separated
//! pair of decimal numbers back on stdout. These types pin down both sides of
//! that contract so the CLI and any external caller stay compatible.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::measurements::Execution;
use crate::stats::SteadyStateEstimate;

/// Errors from decoding a measurement document.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The input line was not a valid nested-array JSON document.
    #[error("malformed measurement document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One estimation request: all executions' steady-state segments.
///
/// Serializes as a bare JSON list of lists of lists of numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EstimateRequest {
    pub executions: Vec<Execution>,
}

impl EstimateRequest {
    /// Wrap already-built executions.
    pub fn new(executions: Vec<Execution>) -> Self {
        Self { executions }
    }

    /// Parse one line of input.
    pub fn from_line(line: &str) -> Result<Self, ProtocolError> {
        Ok(serde_json::from_str(line.trim())?)
    }
}

/// The estimate as written back to the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimateResponse {
    pub estimate: SteadyStateEstimate,
}

impl EstimateResponse {
    pub fn new(estimate: SteadyStateEstimate) -> Self {
        Self { estimate }
    }

    /// Render as `center,half_width`, two decimal numbers and a comma, no
    /// trailing newline. The writer is expected to flush.
    pub fn to_line(&self) -> String {
        format!("{},{}", self.estimate.center, self.estimate.half_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested_document() {
        let request = EstimateRequest::from_line("[[[1.0, 2.0], [3.0]], [[4.0]]]").unwrap();
        assert_eq!(request.executions.len(), 2);
        assert_eq!(request.executions[0].len(), 2);
        assert_eq!(request.executions[0].segments()[0].samples(), &[1.0, 2.0]);
        assert_eq!(request.executions[1].segments()[0].samples(), &[4.0]);
    }

    #[test]
    fn test_parse_tolerates_surrounding_whitespace() {
        let request = EstimateRequest::from_line("  [[[1.5]]]\n").unwrap();
        assert_eq!(request.executions.len(), 1);
    }

    /// Structurally empty documents parse; the estimator rejects them later.
    #[test]
    fn test_parse_empty_collection() {
        let request = EstimateRequest::from_line("[]").unwrap();
        assert!(request.executions.is_empty());
    }

    #[test]
    fn test_parse_rejects_wrong_nesting() {
        assert!(EstimateRequest::from_line("[1.0, 2.0]").is_err());
        assert!(EstimateRequest::from_line("[[1.0]]").is_err());
        assert!(EstimateRequest::from_line("{\"a\": 1}").is_err());
        assert!(EstimateRequest::from_line("not json").is_err());
    }

    #[test]
    fn test_response_line_format() {
        let response = EstimateResponse::new(SteadyStateEstimate {
            center: 1.5,
            half_width: 0.25,
        });
        assert_eq!(response.to_line(), "1.5,0.25");
    }

    /// The textual floats must parse back to the same values.
    #[test]
    fn test_response_line_roundtrips() {
        let response = EstimateResponse::new(SteadyStateEstimate {
            center: 0.123456789012345,
            half_width: 1.0e-9,
        });
        let line = response.to_line();
        let mut parts = line.split(',');
        let center: f64 = parts.next().unwrap().parse().unwrap();
        let half_width: f64 = parts.next().unwrap().parse().unwrap();
        assert!(parts.next().is_none());
        assert_eq!(center, response.estimate.center);
        assert_eq!(half_width, response.estimate.half_width);
    }
}

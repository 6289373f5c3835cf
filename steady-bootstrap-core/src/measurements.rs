//! Input data model for the steady-state estimator.
//!
//! Timing data arrives grouped: each benchmark process execution contributes
//! an ordered list of steady-state segments, and each segment holds the
//! iteration timings (in seconds) that an upstream changepoint analysis
//! classified as steady state. Segments within one execution may differ in
//! length.

use serde::{Deserialize, Serialize};

/// A contiguous run of steady-state iteration timings from one execution.
///
/// Serializes as a bare JSON array of numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Segment(Vec<f64>);

impl Segment {
    /// Create a segment from iteration timings in seconds.
    pub fn new(samples: Vec<f64>) -> Self {
        Self(samples)
    }

    /// The iteration timings, in measurement order.
    pub fn samples(&self) -> &[f64] {
        &self.0
    }

    /// Number of iteration timings in this segment.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the segment holds no timings. Empty segments are rejected by
    /// the estimator.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<f64>> for Segment {
    fn from(samples: Vec<f64>) -> Self {
        Self::new(samples)
    }
}

/// One benchmark process execution: its steady-state segments in order.
///
/// Serializes as a bare JSON array of segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Execution(Vec<Segment>);

impl Execution {
    /// Create an execution from its steady-state segments.
    pub fn new(segments: Vec<Segment>) -> Self {
        Self(segments)
    }

    /// The steady-state segments, in execution order.
    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    /// Number of segments in this execution.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the execution holds no segments. Empty executions are rejected
    /// by the estimator.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of iteration timings across all segments.
    pub fn total_samples(&self) -> usize {
        self.0.iter().map(Segment::len).sum()
    }
}

impl From<Vec<Vec<f64>>> for Execution {
    fn from(segments: Vec<Vec<f64>>) -> Self {
        Self::new(segments.into_iter().map(Segment::new).collect())
    }
}

//! Percentile bootstrap over steady-state measurement segments.
//!
//! The estimator turns noisy, grouped iteration timings into a single
//! steady-state performance number with a confidence interval. For every
//! execution it synthesizes resamples by drawing with replacement within each
//! of that execution's segments, pools the resample means across executions,
//! sorts them, and reads the reported value and interval off the sorted
//! population.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use thiserror::Error;

use crate::measurements::Execution;
use crate::stats::confidence::ConfidenceLevel;
use crate::stats::summation::KahanSum;

/// Default minimum size of the bootstrap population.
pub const DEFAULT_BOOTSTRAP_ITERATIONS: usize = 100_000;

/// Tunables for one bootstrap run.
#[derive(Debug, Clone)]
pub struct BootstrapConfig {
    /// Minimum number of resample means in the bootstrap population
    /// (default: 100,000).
    pub target_resamples: usize,
    /// Two-sided confidence level for the reported interval (default: 0.99).
    pub confidence_level: ConfidenceLevel,
    /// Fixed RNG seed for reproducible output; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Whether to generate resamples across executions in parallel.
    pub parallel: bool,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            target_resamples: DEFAULT_BOOTSTRAP_ITERATIONS,
            confidence_level: ConfidenceLevel::default(),
            seed: None,
            parallel: true,
        }
    }
}

/// Errors from validating estimator input. All are detected before any
/// resampling work starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BootstrapError {
    /// The execution collection was empty.
    #[error("no executions supplied")]
    NoExecutions,

    /// An execution contained no steady-state segments.
    #[error("execution {index} has no steady-state segments")]
    EmptyExecution { index: usize },

    /// A segment contained no samples.
    #[error("segment {segment} of execution {execution} has no samples")]
    EmptySegment { execution: usize, segment: usize },
}

/// The reported steady-state estimate: a central value and a symmetric
/// confidence-interval radius around it, both in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteadyStateEstimate {
    /// Median of the resample means.
    pub center: f64,
    /// Mean of the two one-sided distances from the median to the percentile
    /// cut values. The underlying tails may be unequal; this folds them into
    /// one radius for reporting.
    pub half_width: f64,
}

/// Estimate steady-state performance from grouped steady-state timings.
///
/// # Arguments
///
/// * `executions` - One entry per benchmark process execution, each holding
///   that execution's non-empty steady-state segments.
/// * `config` - Population size target, confidence level, seed, parallelism.
///
/// # Errors
///
/// Returns a [`BootstrapError`] if the collection, any execution, or any
/// segment is empty. Nothing is resampled in that case.
pub fn bootstrap_steady_perf(
    executions: &[Execution],
    config: &BootstrapConfig,
) -> Result<SteadyStateEstimate, BootstrapError> {
    validate(executions)?;

    let n_resamples = resamples_per_execution(config.target_resamples, executions.len());
    let base_seed = match config.seed {
        Some(seed) => seed,
        None => rand::rng().random(),
    };

    let mut means = if config.parallel {
        resample_means_parallel(executions, n_resamples, base_seed)
    } else {
        resample_means_serial(executions, n_resamples, base_seed)
    };
    assert!(
        means.len() >= config.target_resamples,
        "bootstrap population ({}) smaller than target ({})",
        means.len(),
        config.target_resamples
    );

    means.sort_by(|a, b| a.total_cmp(b));
    debug_assert!(means.windows(2).all(|pair| pair[0] <= pair[1]));

    let center = median(&means);
    let (lower_index, upper_index) = config.confidence_level.cut_indices(means.len());
    let lower = means[lower_index];
    let upper = means[upper_index - 1]; // The upper cut is exclusive.

    let half_width = ((upper - center) + (center - lower)) / 2.0;
    Ok(SteadyStateEstimate { center, half_width })
}

/// Number of resamples to draw from each execution.
///
/// Integer division rounds down, so `target / executions * executions` can
/// fall short of the target; the extra resample per execution guarantees the
/// pooled population reaches it. With 30 executions and a target of 100,000,
/// 3333 per execution would pool to 99,990, hence 3334.
pub fn resamples_per_execution(target: usize, executions: usize) -> usize {
    target / executions + 1
}

fn validate(executions: &[Execution]) -> Result<(), BootstrapError> {
    if executions.is_empty() {
        return Err(BootstrapError::NoExecutions);
    }
    for (index, execution) in executions.iter().enumerate() {
        if execution.is_empty() {
            return Err(BootstrapError::EmptyExecution { index });
        }
        for (segment, samples) in execution.segments().iter().enumerate() {
            if samples.is_empty() {
                return Err(BootstrapError::EmptySegment {
                    execution: index,
                    segment,
                });
            }
        }
    }
    Ok(())
}

/// Derive a well-distributed RNG seed from a base seed and a counter.
///
/// SplitMix64 finalizer; a stateless hash rather than seed-plus-counter, so
/// nearby counters do not produce correlated generator states. Each resample
/// gets its own generator seeded this way, which makes the output independent
/// of whether resamples are generated serially or in parallel.
#[inline]
fn counter_rng_seed(base_seed: u64, counter: u64) -> u64 {
    let mut z = base_seed.wrapping_add(counter.wrapping_mul(0x9e3779b97f4a7c15));
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

/// Mean of one synthetic resample of `execution`.
///
/// Draws, for every segment independently, as many samples (with replacement)
/// as the segment holds, and averages the concatenation with compensated
/// summation.
fn resample_mean(execution: &Execution, rng: &mut StdRng) -> f64 {
    let mut sum = KahanSum::new();
    let mut count = 0usize;
    for segment in execution.segments() {
        let samples = segment.samples();
        for _ in 0..samples.len() {
            sum.add(samples[rng.random_range(0..samples.len())]);
        }
        count += samples.len();
    }
    sum.value() / count as f64
}

fn resample_means_serial(
    executions: &[Execution],
    n_resamples: usize,
    base_seed: u64,
) -> Vec<f64> {
    let mut means = Vec::with_capacity(executions.len() * n_resamples);
    for (index, execution) in executions.iter().enumerate() {
        for draw in 0..n_resamples {
            let counter = (index * n_resamples + draw) as u64;
            let mut rng = StdRng::seed_from_u64(counter_rng_seed(base_seed, counter));
            means.push(resample_mean(execution, &mut rng));
        }
    }
    means
}

fn resample_means_parallel(
    executions: &[Execution],
    n_resamples: usize,
    base_seed: u64,
) -> Vec<f64> {
    executions
        .par_iter()
        .enumerate()
        .flat_map_iter(|(index, execution)| {
            (0..n_resamples).map(move |draw| {
                let counter = (index * n_resamples + draw) as u64;
                let mut rng = StdRng::seed_from_u64(counter_rng_seed(base_seed, counter));
                resample_mean(execution, &mut rng)
            })
        })
        .collect()
}

/// Median of an already-sorted population. Even lengths average the two
/// central values.
fn median(sorted: &[f64]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

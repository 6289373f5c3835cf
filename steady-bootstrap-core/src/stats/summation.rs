//! Compensated floating-point summation.
//!
//! Resample means are computed over tens of thousands of terms that are often
//! close in magnitude, which is exactly the regime where naive left-to-right
//! addition accumulates rounding bias. Kahan's compensated summation keeps a
//! running correction term so the error stays bounded independently of the
//! number of terms.

/// A Kahan-compensated running sum.
#[derive(Debug, Clone, Copy, Default)]
pub struct KahanSum {
    /// Running sum.
    sum: f64,
    /// Compensation term carrying the low-order bits lost by the last add.
    compensation: f64,
}

impl KahanSum {
    /// Create an empty sum.
    pub const fn new() -> Self {
        Self {
            sum: 0.0,
            compensation: 0.0,
        }
    }

    /// Add one term.
    #[inline]
    pub fn add(&mut self, x: f64) {
        let y = x - self.compensation;
        let t = self.sum + y;
        self.compensation = (t - self.sum) - y;
        self.sum = t;
    }

    /// The compensated sum of all terms added so far.
    #[inline]
    pub fn value(&self) -> f64 {
        self.sum
    }
}

/// Arithmetic mean of a slice using compensated summation.
pub fn compensated_mean(samples: &[f64]) -> f64 {
    assert!(!samples.is_empty(), "mean of an empty slice");
    let mut sum = KahanSum::new();
    for &x in samples {
        sum.add(x);
    }
    sum.value() / samples.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_sum() {
        let mut sum = KahanSum::new();
        for x in [1.0, 2.0, 3.0, 4.0] {
            sum.add(x);
        }
        assert_eq!(sum.value(), 10.0);
    }

    /// Adding many small terms to a large one loses precision naively but not
    /// with compensation.
    #[test]
    fn test_compensation_beats_naive_sum() {
        let mut kahan = KahanSum::new();
        let mut naive = 0.0f64;
        kahan.add(1e16);
        naive += 1e16;
        for _ in 0..10_000 {
            kahan.add(1.0);
            naive += 1.0;
        }

        let exact = 1e16 + 10_000.0;
        let kahan_err = (kahan.value() - exact).abs();
        let naive_err = (naive - exact).abs();
        assert!(kahan_err <= naive_err);
        assert!(kahan_err < 1.0, "kahan error too large: {}", kahan_err);
    }

    #[test]
    fn test_compensated_mean() {
        assert_eq!(compensated_mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3.0);
        assert_eq!(compensated_mean(&[7.5]), 7.5);
    }

    #[test]
    #[should_panic(expected = "mean of an empty slice")]
    fn test_mean_of_empty_slice_panics() {
        compensated_mean(&[]);
    }
}

//! Exact decimal confidence levels and percentile cut points.
//!
//! The percentile boundary computation must not go through binary floating
//! point: for a population of length `L`, `alpha * L` can land so close to an
//! integer that an f64 `floor`/`ceil` lands on the wrong side, shifting the
//! tail exclusion by one element. A confidence level is therefore parsed from
//! its textual decimal form and held as an integer numerator over a
//! power-of-ten denominator, and the cut indices are computed with integer
//! arithmetic only.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from parsing a textual decimal confidence level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfidenceLevelError {
    /// The value parsed but is not strictly between 0 and 1.
    #[error("confidence level must be strictly between 0 and 1: {0:?}")]
    OutOfRange(String),

    /// The text is not a plain decimal fraction like "0.99".
    #[error("malformed decimal confidence level: {0:?}")]
    Malformed(String),

    /// More fractional digits than the exact integer representation can hold.
    #[error("confidence level has more than 18 fractional digits: {0:?}")]
    TooPrecise(String),
}

/// A two-sided confidence level held as an exact decimal fraction.
///
/// `"0.99"` is stored as 99/100, `"0.995"` as 995/1000, and so on. The
/// fractional digit count is preserved, so `"0.990"` displays as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ConfidenceLevel {
    /// Fractional digits as an integer, e.g. 99 for "0.99".
    numer: u64,
    /// Ten to the number of fractional digits, e.g. 100 for "0.99".
    denom: u64,
}

impl ConfidenceLevel {
    /// The confidence level as a plain float, for display and reporting only.
    pub fn as_f64(&self) -> f64 {
        self.numer as f64 / self.denom as f64
    }

    /// Lower and upper percentile cut indices for a sorted population of
    /// `len` elements.
    ///
    /// With `alpha = (1 - level) / 2`, the lower index is `floor(alpha *
    /// len)` and the upper index is `ceil((1 - alpha) * len)`. The upper cut
    /// is exclusive: callers read `population[upper - 1]`. Flooring the low
    /// cut and ceiling the high one means each tail excludes at least `alpha`
    /// of the population, so the interval errs on the wide side.
    pub fn cut_indices(&self, len: usize) -> (usize, usize) {
        let len = len as u128;
        let denom = self.denom as u128;
        // alpha = (denom - numer) / (2 * denom)
        let alpha_numer = denom - self.numer as u128;
        let lower = alpha_numer * len / (2 * denom);
        let upper = ((denom + self.numer as u128) * len).div_ceil(2 * denom);
        (lower as usize, upper as usize)
    }

    /// The level as a percentage string with no binary rounding, e.g. "99"
    /// for "0.99" and "99.9" for "0.999".
    pub fn percent(&self) -> String {
        let scaled = self.numer as u128 * 100;
        let denom = self.denom as u128;
        let whole = scaled / denom;
        let remainder = scaled % denom;
        if remainder == 0 {
            return format!("{}", whole);
        }
        // denom is a power of ten >= 1000 here, so remainder is a multiple
        // of 100 and the fraction has ilog10(denom) - 2 digits.
        let width = (self.denom.ilog10() - 2) as usize;
        let mut frac = format!("{:0width$}", remainder / 100, width = width);
        while frac.ends_with('0') {
            frac.pop();
        }
        format!("{}.{}", whole, frac)
    }
}

impl Default for ConfidenceLevel {
    /// 99% two-sided confidence.
    fn default() -> Self {
        Self {
            numer: 99,
            denom: 100,
        }
    }
}

impl FromStr for ConfidenceLevel {
    type Err = ConfidenceLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = match trimmed
            .strip_prefix("0.")
            .or_else(|| trimmed.strip_prefix('.'))
        {
            Some(digits) => digits,
            // Anything without a "0." prefix is either a decimal outside
            // (0, 1) or not a decimal at all.
            None => {
                return if trimmed.parse::<f64>().is_ok() {
                    Err(ConfidenceLevelError::OutOfRange(s.to_string()))
                } else {
                    Err(ConfidenceLevelError::Malformed(s.to_string()))
                };
            }
        };

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ConfidenceLevelError::Malformed(s.to_string()));
        }
        if digits.len() > 18 {
            return Err(ConfidenceLevelError::TooPrecise(s.to_string()));
        }

        let numer: u64 = digits
            .parse()
            .map_err(|_| ConfidenceLevelError::Malformed(s.to_string()))?;
        if numer == 0 {
            return Err(ConfidenceLevelError::OutOfRange(s.to_string()));
        }

        Ok(Self {
            numer,
            denom: 10u64.pow(digits.len() as u32),
        })
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.denom.ilog10() as usize;
        write!(f, "0.{:0width$}", self.numer, width = width)
    }
}

impl TryFrom<String> for ConfidenceLevel {
    type Error = ConfidenceLevelError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ConfidenceLevel> for String {
    fn from(level: ConfidenceLevel) -> String {
        level.to_string()
    }
}

//! Asymmetric Interval Number value type

use crate::AinError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Decimal places used by `Display` when no precision is requested
pub const DEFAULT_DISPLAY_PRECISION: usize = 4;

/// Asymmetric Interval Number: an interval `[lower, upper]` carrying an
/// expected value inside it
///
/// Immutable once built. Every constructor enforces
/// `lower <= expected <= upper` with all three values finite, and every
/// arithmetic operation returns a fresh value that satisfies the same
/// invariant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AinRepr", into = "AinRepr")]
pub struct Ain {
    pub(crate) lower: f64,
    pub(crate) upper: f64,
    pub(crate) expected: f64,
}

/// Unvalidated wire form of an [`Ain`]
#[derive(Serialize, Deserialize)]
struct AinRepr {
    lower: f64,
    upper: f64,
    expected: f64,
}

impl TryFrom<AinRepr> for Ain {
    type Error = AinError;

    fn try_from(repr: AinRepr) -> Result<Self, Self::Error> {
        Ain::new(repr.lower, repr.upper, repr.expected)
    }
}

impl From<Ain> for AinRepr {
    fn from(ain: Ain) -> Self {
        Self {
            lower: ain.lower,
            upper: ain.upper,
            expected: ain.expected,
        }
    }
}

/// Midpoint of ordered finite bounds, kept inside them
///
/// Halving each bound first avoids overflow near `f64::MAX`, but rounds
/// subnormals, so the result is clamped back into `[lower, upper]`.
fn midpoint_of(lower: f64, upper: f64) -> f64 {
    if lower == upper {
        return lower;
    }
    (lower / 2.0 + upper / 2.0).clamp(lower, upper)
}

fn ensure_finite(field: &'static str, value: f64) -> Result<f64, AinError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AinError::NonFiniteValue { field, value })
    }
}

impl Ain {
    /// The degenerate zero interval `[0, 0]_{0}`
    pub const ZERO: Ain = Ain {
        lower: 0.0,
        upper: 0.0,
        expected: 0.0,
    };

    /// Create a new AIN from its bounds and expected value
    ///
    /// # Errors
    /// - [`AinError::NonFiniteValue`] if any input is NaN or infinite
    /// - [`AinError::InvalidInterval`] if `lower > upper`
    /// - [`AinError::ExpectedOutOfRange`] if `expected` is outside `[lower, upper]`
    ///
    /// # Examples
    ///
    /// ```
    /// use asymint_core::{Ain, AinError};
    ///
    /// let a = Ain::new(0.0, 10.0, 8.0).unwrap();
    /// assert_eq!(a.to_string(), "[0.0000, 10.0000]_{8.0000}");
    ///
    /// assert!(matches!(
    ///     Ain::new(5.0, 2.0, 3.0),
    ///     Err(AinError::InvalidInterval { .. })
    /// ));
    /// ```
    pub fn new(lower: f64, upper: f64, expected: f64) -> Result<Self, AinError> {
        let lower = ensure_finite("lower", lower)?;
        let upper = ensure_finite("upper", upper)?;
        let expected = ensure_finite("expected", expected)?;

        if lower > upper {
            return Err(AinError::InvalidInterval { lower, upper });
        }
        if expected < lower || expected > upper {
            return Err(AinError::ExpectedOutOfRange {
                lower,
                upper,
                expected,
            });
        }

        Ok(Self {
            lower,
            upper,
            expected,
        })
    }

    /// Create an AIN whose expected value is the midpoint of the bounds
    ///
    /// # Examples
    ///
    /// ```
    /// use asymint_core::Ain;
    ///
    /// let b = Ain::with_midpoint(0.0, 10.0).unwrap();
    /// assert_eq!(b.expected(), 5.0);
    /// ```
    pub fn with_midpoint(lower: f64, upper: f64) -> Result<Self, AinError> {
        let lower = ensure_finite("lower", lower)?;
        let upper = ensure_finite("upper", upper)?;
        if lower > upper {
            return Err(AinError::InvalidInterval { lower, upper });
        }
        Self::new(lower, upper, midpoint_of(lower, upper))
    }

    /// Create the point interval `[value, value]_{value}`
    pub fn degenerate(value: f64) -> Result<Self, AinError> {
        Self::new(value, value, value)
    }

    /// Build the result of an arithmetic operation
    ///
    /// Non-finite components (f64 overflow) are reported as errors. A finite
    /// triple that breaks `lower <= expected <= upper` means an operator
    /// computed its bounds or its clamp wrongly, so it is fatal.
    pub(crate) fn from_result(
        op: &'static str,
        lower: f64,
        upper: f64,
        expected: f64,
    ) -> Result<Self, AinError> {
        match Self::new(lower, upper, expected) {
            Ok(ain) => Ok(ain),
            Err(err @ AinError::NonFiniteValue { .. }) => Err(err),
            Err(err) => {
                tracing::error!(
                    op,
                    lower,
                    upper,
                    expected,
                    "Arithmetic produced a value violating lower <= expected <= upper"
                );
                panic!("{op} produced an invalid AIN: {err}");
            }
        }
    }

    /// Lower bound (L)
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Upper bound (U)
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Expected value (E)
    pub fn expected(&self) -> f64 {
        self.expected
    }

    /// Width of the interval, `U - L`
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Left spread (alpha), `E - L`
    pub fn left_spread(&self) -> f64 {
        self.expected - self.lower
    }

    /// Right spread (beta), `U - E`
    pub fn right_spread(&self) -> f64 {
        self.upper - self.expected
    }

    /// Normalised asymmetry `(beta - alpha) / width`, in `[-1, 1]`
    ///
    /// Zero for symmetric and for degenerate intervals. Positive when the
    /// expected value sits closer to the lower bound.
    pub fn asymmetry_index(&self) -> f64 {
        let width = self.width();
        if width > 0.0 {
            ((self.right_spread() - self.left_spread()) / width).clamp(-1.0, 1.0)
        } else {
            0.0
        }
    }

    /// Midpoint of the bounds, `(L + U) / 2`
    pub fn midpoint(&self) -> f64 {
        midpoint_of(self.lower, self.upper)
    }

    /// Check if the interval contains a value
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Check if the interval crosses or touches zero
    pub fn contains_zero(&self) -> bool {
        self.lower <= 0.0 && 0.0 <= self.upper
    }

    /// Check if the interval has zero width
    pub fn is_degenerate(&self) -> bool {
        self.lower == self.upper
    }

    /// Component-wise comparison within an absolute tolerance
    pub fn approx_eq(&self, other: &Ain, tolerance: f64) -> bool {
        (self.lower - other.lower).abs() <= tolerance
            && (self.upper - other.upper).abs() <= tolerance
            && (self.expected - other.expected).abs() <= tolerance
    }
}

impl Default for Ain {
    fn default() -> Self {
        Self::ZERO
    }
}

impl TryFrom<(f64, f64, f64)> for Ain {
    type Error = AinError;

    fn try_from((lower, upper, expected): (f64, f64, f64)) -> Result<Self, Self::Error> {
        Self::new(lower, upper, expected)
    }
}

impl From<Ain> for (f64, f64, f64) {
    fn from(ain: Ain) -> Self {
        (ain.lower, ain.upper, ain.expected)
    }
}

impl fmt::Display for Ain {
    /// Formats as `[L, U]_{E}`; honours `{:.N}`, defaulting to four decimals
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_DISPLAY_PRECISION);
        write!(
            f,
            "[{:.p$}, {:.p$}]_{{{:.p$}}}",
            self.lower,
            self.upper,
            self.expected,
            p = precision
        )
    }
}

//! Closed arithmetic over AINs
//!
//! Every operation is a pure function of its operands: `Ain` is `Copy`, each
//! method takes its operands by value and returns a new value. Bounds follow
//! ordinary interval arithmetic; expected values are propagated as point
//! estimates under an independence assumption.
//!
//! Operations that are total on the mathematical level (`add`, `multiply`,
//! ...) can still overflow `f64` for extreme finite inputs. Each of them has
//! a `checked_*` twin that reports overflow as [`AinError::NonFiniteValue`];
//! the plain forms and the `std::ops` impls panic instead.

use crate::{Ain, AinError};
use std::ops::{Add, Mul, Neg, Sub};

fn ensure_scalar(value: f64) -> Result<f64, AinError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AinError::NonFiniteValue {
            field: "scalar",
            value,
        })
    }
}

fn total(op: &'static str, result: Result<Ain, AinError>) -> Ain {
    match result {
        Ok(ain) => ain,
        Err(err) => panic!("{op} failed: {err}"),
    }
}

/// Clamp a propagated expected value into freshly computed bounds
///
/// The point estimate is computed separately from the bounds, so rounding
/// can leave it a few ulps outside them. The clamp is silent to callers and
/// only visible as a debug event.
fn clamp_expected(op: &'static str, candidate: f64, lower: f64, upper: f64) -> f64 {
    if candidate < lower || candidate > upper {
        tracing::debug!(
            op,
            candidate,
            lower,
            upper,
            "Clamping propagated expected value into bounds"
        );
    }
    candidate.clamp(lower, upper)
}

impl Ain {
    /// Negate: `[-U, -L]_{-E}`
    pub fn negate(self) -> Ain {
        Ain {
            lower: -self.upper,
            upper: -self.lower,
            expected: -self.expected,
        }
    }

    /// Add two AINs bound-wise, reporting f64 overflow
    pub fn checked_add(self, other: Ain) -> Result<Ain, AinError> {
        Ain::from_result(
            "add",
            self.lower + other.lower,
            self.upper + other.upper,
            self.expected + other.expected,
        )
    }

    /// Add two AINs: `[L1 + L2, U1 + U2]_{E1 + E2}`
    ///
    /// # Panics
    /// Panics if a component overflows to infinity.
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: Ain) -> Ain {
        total("add", self.checked_add(other))
    }

    /// Subtract `other`, reporting f64 overflow
    pub fn checked_sub(self, other: Ain) -> Result<Ain, AinError> {
        self.checked_add(other.negate())
    }

    /// Subtract: `self + (-other)`, i.e. `[L1 - U2, U1 - L2]_{E1 - E2}`
    ///
    /// # Panics
    /// Panics if a component overflows to infinity.
    pub fn subtract(self, other: Ain) -> Ain {
        total("subtract", self.checked_sub(other))
    }

    /// Shift every component by a scalar: `[L + k, U + k]_{E + k}`
    ///
    /// # Errors
    /// [`AinError::NonFiniteValue`] if `k` is not finite or the result overflows.
    pub fn shift(self, k: f64) -> Result<Ain, AinError> {
        let k = ensure_scalar(k)?;
        Ain::from_result(
            "shift",
            self.lower + k,
            self.upper + k,
            self.expected + k,
        )
    }

    /// Multiply by a scalar
    ///
    /// Bounds swap for negative `k`; `k = 0` collapses to the zero interval.
    ///
    /// # Errors
    /// [`AinError::NonFiniteValue`] if `k` is not finite or the result overflows.
    ///
    /// # Examples
    ///
    /// ```
    /// use asymint_core::Ain;
    ///
    /// let a = Ain::new(1.0, 3.0, 2.0).unwrap();
    /// let scaled = a.scale(-2.0).unwrap();
    /// assert_eq!(scaled, Ain::new(-6.0, -2.0, -4.0).unwrap());
    /// ```
    pub fn scale(self, k: f64) -> Result<Ain, AinError> {
        let k = ensure_scalar(k)?;
        let (lower, upper) = if k >= 0.0 {
            (k * self.lower, k * self.upper)
        } else {
            (k * self.upper, k * self.lower)
        };
        Ain::from_result("scale", lower, upper, k * self.expected)
    }

    /// Multiply two AINs, reporting f64 overflow
    pub fn checked_mul(self, other: Ain) -> Result<Ain, AinError> {
        let corners = [
            self.lower * other.lower,
            self.lower * other.upper,
            self.upper * other.lower,
            self.upper * other.upper,
        ];
        let lower = corners.iter().copied().fold(f64::INFINITY, f64::min);
        let upper = corners.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let expected = clamp_expected(
            "multiply",
            self.expected * other.expected,
            lower,
            upper,
        );

        Ain::from_result("multiply", lower, upper, expected)
    }

    /// Multiply two AINs
    ///
    /// Bounds are the min and max of the four endpoint products, since a sign
    /// change in either operand can make any corner the extremum. The
    /// expected value is `E1 * E2`, clamped into the new bounds.
    ///
    /// # Panics
    /// Panics if a component overflows to infinity.
    pub fn multiply(self, other: Ain) -> Ain {
        total("multiply", self.checked_mul(other))
    }

    /// Reciprocal interval `[1/U, 1/L]_{1/E}`
    ///
    /// # Errors
    /// - [`AinError::DivisionByZeroInterval`] if `L <= 0 <= U`
    /// - [`AinError::NonFiniteValue`] if a bound is so close to zero that its
    ///   reciprocal overflows
    pub fn reciprocal(self) -> Result<Ain, AinError> {
        if self.contains_zero() {
            tracing::debug!(
                lower = self.lower,
                upper = self.upper,
                "Rejecting reciprocal of zero-crossing interval"
            );
            return Err(AinError::DivisionByZeroInterval {
                lower: self.lower,
                upper: self.upper,
            });
        }

        let lower = 1.0 / self.upper;
        let upper = 1.0 / self.lower;
        let expected = clamp_expected("reciprocal", 1.0 / self.expected, lower, upper);

        Ain::from_result("reciprocal", lower, upper, expected)
    }

    /// Divide by another AIN, computed as `self * other.reciprocal()`
    ///
    /// # Errors
    /// - [`AinError::DivisionByZeroInterval`] if `other` contains zero
    /// - [`AinError::NonFiniteValue`] if the result overflows
    ///
    /// # Examples
    ///
    /// ```
    /// use asymint_core::{Ain, AinError};
    ///
    /// let a = Ain::new(0.0, 10.0, 2.0).unwrap();
    /// let b = Ain::new(2.0, 8.0, 3.0).unwrap();
    /// let q = a.divide(b).unwrap();
    /// assert_eq!((q.lower(), q.upper()), (0.0, 5.0));
    ///
    /// let zero_crossing = Ain::new(-1.0, 1.0, 0.0).unwrap();
    /// assert!(matches!(
    ///     a.divide(zero_crossing),
    ///     Err(AinError::DivisionByZeroInterval { .. })
    /// ));
    /// ```
    pub fn divide(self, other: Ain) -> Result<Ain, AinError> {
        let reciprocal = other.reciprocal()?;
        self.checked_mul(reciprocal)
    }

    /// Divide by a scalar, i.e. scale by `1 / k`
    ///
    /// # Errors
    /// - [`AinError::DivisionByZeroInterval`] if `k == 0`
    /// - [`AinError::NonFiniteValue`] if `k` is not finite or the result overflows
    pub fn divide_scalar(self, k: f64) -> Result<Ain, AinError> {
        let k = ensure_scalar(k)?;
        if k == 0.0 {
            return Err(AinError::DivisionByZeroInterval { lower: k, upper: k });
        }
        self.scale(1.0 / k)
    }
}

impl Neg for Ain {
    type Output = Ain;

    fn neg(self) -> Ain {
        self.negate()
    }
}

impl Add for Ain {
    type Output = Ain;

    fn add(self, rhs: Ain) -> Ain {
        Ain::add(self, rhs)
    }
}

impl Sub for Ain {
    type Output = Ain;

    fn sub(self, rhs: Ain) -> Ain {
        self.subtract(rhs)
    }
}

impl Mul for Ain {
    type Output = Ain;

    fn mul(self, rhs: Ain) -> Ain {
        self.multiply(rhs)
    }
}

impl Add<f64> for Ain {
    type Output = Ain;

    fn add(self, rhs: f64) -> Ain {
        total("shift", self.shift(rhs))
    }
}

impl Add<Ain> for f64 {
    type Output = Ain;

    fn add(self, rhs: Ain) -> Ain {
        rhs + self
    }
}

impl Sub<f64> for Ain {
    type Output = Ain;

    fn sub(self, rhs: f64) -> Ain {
        self + (-rhs)
    }
}

impl Sub<Ain> for f64 {
    type Output = Ain;

    fn sub(self, rhs: Ain) -> Ain {
        -rhs + self
    }
}

impl Mul<f64> for Ain {
    type Output = Ain;

    fn mul(self, rhs: f64) -> Ain {
        total("scale", self.scale(rhs))
    }
}

impl Mul<Ain> for f64 {
    type Output = Ain;

    fn mul(self, rhs: Ain) -> Ain {
        rhs * self
    }
}

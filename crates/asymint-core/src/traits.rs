//! Trait definitions for downstream consumers
//!
//! Plotting and reporting layers only ever read an interval. They depend on
//! this trait rather than on [`Ain`] so they can be tested with their own
//! fixtures.

use crate::Ain;

/// Read-only view of an asymmetric interval
///
/// Implementors supply the three stored components; the derived statistics
/// have default implementations.
pub trait IntervalView {
    /// Lower bound
    fn lower(&self) -> f64;

    /// Upper bound
    fn upper(&self) -> f64;

    /// Expected value
    fn expected(&self) -> f64;

    /// Width, `upper - lower`
    fn width(&self) -> f64 {
        self.upper() - self.lower()
    }

    /// Left spread, `expected - lower`
    fn left_spread(&self) -> f64 {
        self.expected() - self.lower()
    }

    /// Right spread, `upper - expected`
    fn right_spread(&self) -> f64 {
        self.upper() - self.expected()
    }

    /// `(right_spread - left_spread) / width`, zero when the width is zero
    fn asymmetry_index(&self) -> f64 {
        let width = self.width();
        if width > 0.0 {
            ((self.right_spread() - self.left_spread()) / width).clamp(-1.0, 1.0)
        } else {
            0.0
        }
    }
}

impl IntervalView for Ain {
    fn lower(&self) -> f64 {
        Ain::lower(self)
    }

    fn upper(&self) -> f64 {
        Ain::upper(self)
    }

    fn expected(&self) -> f64 {
        Ain::expected(self)
    }

    fn asymmetry_index(&self) -> f64 {
        Ain::asymmetry_index(self)
    }
}

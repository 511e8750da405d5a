//! Deterministic ranking of AINs
//!
//! Intervals have no natural total order, so consumers that need one (sorted
//! reports, leaderboards) use a fixed tie-break: expected value ascending,
//! then width ascending, then lower bound ascending. Upper bound settles the
//! rare case where a rounded width hides a difference, so only identical
//! triples compare equal. This is a presentation order, not an interval
//! ordering.

use crate::Ain;
use std::cmp::Ordering;

// Components are always finite, so partial_cmp never yields None.
fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

impl Ain {
    /// Compare by expected value, then width, then lower bound, then upper bound
    ///
    /// # Examples
    ///
    /// ```
    /// use asymint_core::Ain;
    /// use std::cmp::Ordering;
    ///
    /// let narrow = Ain::new(2.0, 4.0, 3.0).unwrap();
    /// let wide = Ain::new(0.0, 10.0, 3.0).unwrap();
    /// assert_eq!(narrow.rank_cmp(&wide), Ordering::Less);
    /// ```
    pub fn rank_cmp(&self, other: &Ain) -> Ordering {
        cmp_f64(self.expected(), other.expected())
            .then_with(|| cmp_f64(self.width(), other.width()))
            .then_with(|| cmp_f64(self.lower(), other.lower()))
            .then_with(|| cmp_f64(self.upper(), other.upper()))
    }
}

/// Wrapper giving [`Ain`] the ranking order, for use as a key in ordered
/// collections or with `max`/`min`
#[derive(Debug, Clone, Copy)]
pub struct Ranked(pub Ain);

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ranked {}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.rank_cmp(&other.0)
    }
}

/// Sort a slice in ranking order (stable)
pub fn sort_ranked(values: &mut [Ain]) {
    values.sort_by(Ain::rank_cmp);
}

/// Return a ranked copy of the input, leaving the input untouched
pub fn ranked(values: &[Ain]) -> Vec<Ain> {
    let mut out = values.to_vec();
    sort_ranked(&mut out);
    out
}

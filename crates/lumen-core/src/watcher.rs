//! Visibility watcher capability.
//!
//! The host environment (a browser's `IntersectionObserver`, or a fake in
//! tests) reports how much of each watched element intersects the
//! viewport. This module defines the seam the reveal logic talks to:
//! [`VisibilityWatcher::watch`] / [`VisibilityWatcher::unwatch`], plus the
//! report and threshold types that cross it.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Visibility ratio at which an element counts as revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// A validated visibility ratio in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct VisibilityThreshold(f64);

impl VisibilityThreshold {
    /// The fixed reveal policy: at least 10% of the element on screen.
    pub const REVEAL: Self = Self(REVEAL_THRESHOLD);

    /// Create a threshold from a ratio.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidThreshold`] if `ratio` is NaN or outside
    /// `0.0..=1.0`.
    pub fn new(ratio: f64) -> Result<Self> {
        if (0.0..=1.0).contains(&ratio) {
            Ok(Self(ratio))
        } else {
            Err(Error::InvalidThreshold(ratio))
        }
    }

    /// The ratio as a plain number.
    #[must_use]
    pub const fn ratio(self) -> f64 {
        self.0
    }

    /// Whether a report shows the element intersecting at or above this
    /// threshold.
    #[must_use]
    pub fn admits<E>(self, entry: &VisibilityEntry<E>) -> bool {
        entry.is_intersecting && entry.ratio >= self.0
    }
}

impl Default for VisibilityThreshold {
    fn default() -> Self {
        Self::REVEAL
    }
}

impl TryFrom<f64> for VisibilityThreshold {
    type Error = Error;

    fn try_from(ratio: f64) -> Result<Self> {
        Self::new(ratio)
    }
}

impl From<VisibilityThreshold> for f64 {
    fn from(threshold: VisibilityThreshold) -> Self {
        threshold.0
    }
}

/// One intersection report delivered by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityEntry<E> {
    /// Element the report is about.
    pub target: E,
    /// Fraction of the element's area inside the viewport.
    pub ratio: f64,
    /// Whether the element intersects the viewport at all.
    pub is_intersecting: bool,
}

impl<E> VisibilityEntry<E> {
    /// Create a report.
    pub const fn new(target: E, ratio: f64, is_intersecting: bool) -> Self {
        Self {
            target,
            ratio,
            is_intersecting,
        }
    }

    /// A report for an element with `ratio` of its area on screen.
    ///
    /// The intersecting flag is derived from the ratio, the way hosts
    /// report elements that are at least partially visible.
    pub fn visible(target: E, ratio: f64) -> Self {
        Self::new(target, ratio, ratio > 0.0)
    }
}

/// Callback invoked with the reports for one watched element.
pub type VisibilityCallback<E> = Rc<dyn Fn(&[VisibilityEntry<E>])>;

/// Host capability that watches elements for on-screen visibility.
///
/// A single watcher may observe many elements at once. Implementations
/// must tolerate [`unwatch`](Self::unwatch) being called from inside a
/// callback they are currently delivering, and must treat unwatching an
/// element that is not watched as a no-op.
pub trait VisibilityWatcher {
    /// Handle type of the elements being watched.
    type Element: Clone + PartialEq + 'static;

    /// Start delivering visibility reports for `element` to `on_change`.
    fn watch(&self, element: &Self::Element, on_change: VisibilityCallback<Self::Element>);

    /// Stop delivering reports for `element`.
    ///
    /// Removal is per element, not per callback: every registration for
    /// `element` on this watcher is dropped.
    fn unwatch(&self, element: &Self::Element);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_bounds() {
        assert!(VisibilityThreshold::new(0.0).is_ok());
        assert!(VisibilityThreshold::new(1.0).is_ok());
        assert!(matches!(
            VisibilityThreshold::new(1.01),
            Err(Error::InvalidThreshold(_))
        ));
        assert!(VisibilityThreshold::new(-0.1).is_err());
        assert!(VisibilityThreshold::new(f64::NAN).is_err());
    }

    #[test]
    fn test_reveal_threshold_is_ten_percent() {
        assert_eq!(VisibilityThreshold::REVEAL.ratio(), 0.1);
        assert_eq!(VisibilityThreshold::default(), VisibilityThreshold::REVEAL);
    }

    #[test]
    fn test_admits_gates_on_ratio() {
        let threshold = VisibilityThreshold::REVEAL;
        assert!(!threshold.admits(&VisibilityEntry::visible("a", 0.05)));
        assert!(!threshold.admits(&VisibilityEntry::visible("a", 0.099)));
        assert!(threshold.admits(&VisibilityEntry::visible("a", 0.1)));
        assert!(threshold.admits(&VisibilityEntry::visible("a", 1.0)));
    }

    #[test]
    fn test_admits_requires_intersecting() {
        let entry = VisibilityEntry::new("a", 0.5, false);
        assert!(!VisibilityThreshold::REVEAL.admits(&entry));
    }

    #[test]
    fn test_threshold_serde() {
        let threshold: VisibilityThreshold = serde_json::from_str("0.25").unwrap();
        assert_eq!(threshold.ratio(), 0.25);
        assert!(serde_json::from_str::<VisibilityThreshold>("2.0").is_err());
        assert_eq!(serde_json::to_string(&threshold).unwrap(), "0.25");
    }
}

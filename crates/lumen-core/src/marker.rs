//! Markers attached to display elements.
//!
//! A marker is a CSS class the stylesheet selects on. The reveal flow uses
//! two of them: [`REVEAL_MARKER`] puts an element in its hidden pre-reveal
//! state, [`REVEAL_ACTIVE_MARKER`] transitions it into view.

/// Static marker added as soon as an element is registered for reveal.
pub const REVEAL_MARKER: &str = "reveal";

/// Marker added once the element has become visible.
pub const REVEAL_ACTIVE_MARKER: &str = "reveal-active";

/// A display element that can carry markers.
///
/// Implementations follow class-list semantics: adding a marker that is
/// already present leaves the element unchanged.
pub trait MarkerTarget {
    /// Add `marker` to the element.
    fn add_marker(&self, marker: &str);

    /// Whether the element currently carries `marker`.
    fn has_marker(&self, marker: &str) -> bool;
}

//! One-shot reveal-on-scroll trigger.
//!
//! A [`RevealTrigger`] marks an element with [`REVEAL_MARKER`] right away,
//! then waits for the watcher to report it at least 10% visible. On the
//! first such report the element gains [`REVEAL_ACTIVE_MARKER`] and is
//! unwatched. The trigger never fires twice, and [`RevealTrigger::destroy`]
//! cancels it early.
//!
//! ```rust,ignore
//! use lumen_core::RevealTrigger;
//!
//! let trigger = RevealTrigger::new(&watcher, element);
//! // ... later, when the element goes away:
//! trigger.destroy();
//! ```

use std::cell::Cell;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::{debug, trace};

use crate::marker::{MarkerTarget, REVEAL_ACTIVE_MARKER, REVEAL_MARKER};
use crate::watcher::{VisibilityCallback, VisibilityEntry, VisibilityThreshold, VisibilityWatcher};

/// Lifecycle of a reveal trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    /// Waiting for the element to become visible.
    Observing,
    /// The element became visible and carries the active marker.
    Revealed,
    /// Cancelled before the element became visible.
    Cancelled,
}

impl RevealState {
    /// Whether the trigger still acts on reports.
    #[must_use]
    pub const fn is_observing(self) -> bool {
        matches!(self, Self::Observing)
    }
}

/// Disposer handle for one element's reveal.
///
/// The watcher is held weakly: the trigger never keeps the host watcher
/// alive on its own.
pub struct RevealTrigger<W: VisibilityWatcher> {
    watcher: Weak<W>,
    element: W::Element,
    state: Rc<Cell<RevealState>>,
}

impl<W> RevealTrigger<W>
where
    W: VisibilityWatcher + 'static,
    W::Element: MarkerTarget,
{
    /// Mark `element` for reveal and start watching it.
    pub fn new(watcher: &Rc<W>, element: W::Element) -> Self {
        element.add_marker(REVEAL_MARKER);

        let state = Rc::new(Cell::new(RevealState::Observing));
        let on_change: VisibilityCallback<W::Element> = {
            let watcher = Rc::downgrade(watcher);
            let element = element.clone();
            let state = Rc::clone(&state);
            Rc::new(move |entries: &[VisibilityEntry<W::Element>]| {
                apply_reports(&watcher, &element, &state, entries);
            })
        };
        watcher.watch(&element, on_change);
        debug!("Watching element for reveal");

        Self {
            watcher: Rc::downgrade(watcher),
            element,
            state,
        }
    }

    /// Stop watching the element.
    ///
    /// Safe to call any number of times, before or after the reveal fired.
    pub fn destroy(&self) {
        if !self.state.get().is_observing() {
            return;
        }
        self.state.set(RevealState::Cancelled);
        if let Some(watcher) = self.watcher.upgrade() {
            watcher.unwatch(&self.element);
        }
        debug!("Reveal cancelled before element became visible");
    }
}

impl<W: VisibilityWatcher> RevealTrigger<W> {
    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> RevealState {
        self.state.get()
    }

    /// Whether the element has been revealed.
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.state.get() == RevealState::Revealed
    }

    /// The watched element.
    #[must_use]
    pub const fn element(&self) -> &W::Element {
        &self.element
    }
}

impl<W: VisibilityWatcher> fmt::Debug for RevealTrigger<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RevealTrigger")
            .field("state", &self.state.get())
            .finish_non_exhaustive()
    }
}

/// Act on a batch of reports for `element`.
///
/// The state flag is checked per entry so that a batch carrying several
/// qualifying reports, or reports queued before the unwatch took effect,
/// still fires once.
fn apply_reports<W>(
    watcher: &Weak<W>,
    element: &W::Element,
    state: &Cell<RevealState>,
    entries: &[VisibilityEntry<W::Element>],
) where
    W: VisibilityWatcher,
    W::Element: MarkerTarget,
{
    for entry in entries {
        if !state.get().is_observing() {
            return;
        }
        if entry.target != *element {
            continue;
        }
        if !VisibilityThreshold::REVEAL.admits(entry) {
            trace!(ratio = entry.ratio, "Element not visible enough yet");
            continue;
        }

        element.add_marker(REVEAL_ACTIVE_MARKER);
        state.set(RevealState::Revealed);
        if let Some(watcher) = watcher.upgrade() {
            watcher.unwatch(element);
        }
        debug!(ratio = entry.ratio, "Element revealed");
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    /// Element whose markers live in a shared list.
    #[derive(Clone, Default)]
    struct TestElement {
        id: u32,
        markers: Rc<RefCell<Vec<String>>>,
    }

    impl PartialEq for TestElement {
        fn eq(&self, other: &Self) -> bool {
            self.id == other.id
        }
    }

    impl MarkerTarget for TestElement {
        fn add_marker(&self, marker: &str) {
            let mut markers = self.markers.borrow_mut();
            if !markers.iter().any(|m| m == marker) {
                markers.push(marker.to_string());
            }
        }

        fn has_marker(&self, marker: &str) -> bool {
            self.markers.borrow().iter().any(|m| m == marker)
        }
    }

    /// Watcher that keeps at most one callback and counts unwatch calls.
    #[derive(Default)]
    struct SingleWatcher {
        callback: RefCell<Option<VisibilityCallback<TestElement>>>,
        unwatch_calls: Cell<usize>,
    }

    impl SingleWatcher {
        fn report(&self, entries: &[VisibilityEntry<TestElement>]) {
            let callback = self.callback.borrow().clone();
            if let Some(callback) = callback {
                callback(entries);
            }
        }
    }

    impl VisibilityWatcher for SingleWatcher {
        type Element = TestElement;

        fn watch(&self, _element: &TestElement, on_change: VisibilityCallback<TestElement>) {
            *self.callback.borrow_mut() = Some(on_change);
        }

        fn unwatch(&self, _element: &TestElement) {
            self.unwatch_calls.set(self.unwatch_calls.get() + 1);
            self.callback.borrow_mut().take();
        }
    }

    #[test]
    fn test_new_adds_static_marker_only() {
        let watcher = Rc::new(SingleWatcher::default());
        let element = TestElement::default();
        let trigger = RevealTrigger::new(&watcher, element.clone());

        assert!(element.has_marker(REVEAL_MARKER));
        assert!(!element.has_marker(REVEAL_ACTIVE_MARKER));
        assert_eq!(trigger.state(), RevealState::Observing);
        assert!(watcher.callback.borrow().is_some());
    }

    #[test]
    fn test_qualifying_report_reveals_and_unwatches() {
        let watcher = Rc::new(SingleWatcher::default());
        let element = TestElement::default();
        let trigger = RevealTrigger::new(&watcher, element.clone());

        watcher.report(&[VisibilityEntry::visible(element.clone(), 0.5)]);

        assert!(element.has_marker(REVEAL_ACTIVE_MARKER));
        assert!(trigger.is_revealed());
        assert_eq!(watcher.unwatch_calls.get(), 1);
    }

    #[test]
    fn test_duplicate_reports_in_one_batch_fire_once() {
        let watcher = Rc::new(SingleWatcher::default());
        let element = TestElement::default();
        let trigger = RevealTrigger::new(&watcher, element.clone());

        watcher.report(&[
            VisibilityEntry::visible(element.clone(), 0.3),
            VisibilityEntry::visible(element.clone(), 0.9),
        ]);

        assert!(trigger.is_revealed());
        assert_eq!(watcher.unwatch_calls.get(), 1);
        assert_eq!(element.markers.borrow().len(), 2);
    }

    #[test]
    fn test_destroy_after_reveal_is_noop() {
        let watcher = Rc::new(SingleWatcher::default());
        let element = TestElement::default();
        let trigger = RevealTrigger::new(&watcher, element.clone());

        watcher.report(&[VisibilityEntry::visible(element, 1.0)]);
        trigger.destroy();
        trigger.destroy();

        assert_eq!(trigger.state(), RevealState::Revealed);
        assert_eq!(watcher.unwatch_calls.get(), 1);
    }

    #[test]
    fn test_destroy_after_watcher_dropped() {
        let watcher = Rc::new(SingleWatcher::default());
        let trigger = RevealTrigger::new(&watcher, TestElement::default());
        drop(watcher);

        trigger.destroy();
        assert_eq!(trigger.state(), RevealState::Cancelled);
    }

    #[test]
    fn test_reports_for_other_elements_are_ignored() {
        let watcher = Rc::new(SingleWatcher::default());
        let element = TestElement {
            id: 1,
            ..TestElement::default()
        };
        let stranger = TestElement {
            id: 2,
            ..TestElement::default()
        };
        let trigger = RevealTrigger::new(&watcher, element.clone());

        watcher.report(&[VisibilityEntry::visible(stranger, 1.0)]);

        assert_eq!(trigger.state(), RevealState::Observing);
        assert!(!element.has_marker(REVEAL_ACTIVE_MARKER));
    }
}

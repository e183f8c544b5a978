//! Browser visibility watcher backed by `IntersectionObserver`.
//!
//! One [`IntersectionWatcher`] multiplexes every revealed element on the
//! page: a single observer reports batches of entries, and each entry is
//! routed to the callback registered for its target.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use lumen_core::{
    Error, Result, RevealTrigger, VisibilityCallback, VisibilityEntry, VisibilityThreshold,
    VisibilityWatcher,
};
use tracing::{debug, trace};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom::{DomElement, js_error_message};

/// Reveal trigger over the browser watcher.
pub type DomRevealTrigger = RevealTrigger<IntersectionWatcher>;

/// Ratios reported in addition to the reveal threshold.
///
/// An element whose crossing report comes in a hair under the threshold
/// still gets reported again as it keeps scrolling into view.
const EXTRA_CHECKPOINTS: [f64; 2] = [0.5, 1.0];

type Registry = Rc<RefCell<Vec<(DomElement, VisibilityCallback<DomElement>)>>>;

thread_local! {
    static SHARED: RefCell<Option<Rc<IntersectionWatcher>>> = const { RefCell::new(None) };
}

/// Visibility watcher over a single `IntersectionObserver`.
///
/// Dropping the watcher disconnects the observer.
pub struct IntersectionWatcher {
    observer: IntersectionObserver,
    registry: Registry,
    _on_intersect: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl IntersectionWatcher {
    /// Create a watcher reporting at `threshold`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ObserverUnavailable`] if the browser refuses to
    /// create the observer.
    pub fn new(threshold: VisibilityThreshold) -> Result<Self> {
        let registry: Registry = Rc::default();

        let on_intersect = {
            let registry = Rc::clone(&registry);
            Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                move |entries: Array, _observer: IntersectionObserver| {
                    dispatch(&registry, &entries);
                },
            )
        };

        let options = IntersectionObserverInit::new();
        options.set_threshold(&checkpoints(threshold));

        let observer =
            IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)
                .map_err(|e| Error::ObserverUnavailable(js_error_message(&e)))?;

        debug!(threshold = threshold.ratio(), "Created intersection watcher");

        Ok(Self {
            observer,
            registry,
            _on_intersect: on_intersect,
        })
    }

    /// The page-wide watcher, created on first use.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ObserverUnavailable`] if the watcher cannot be
    /// created. Creation is retried on the next call.
    pub fn shared() -> Result<Rc<Self>> {
        SHARED.with(|slot| {
            let existing = slot.borrow().clone();
            if let Some(watcher) = existing {
                return Ok(watcher);
            }

            let watcher = Rc::new(Self::new(VisibilityThreshold::REVEAL)?);
            *slot.borrow_mut() = Some(Rc::clone(&watcher));
            Ok(watcher)
        })
    }

    /// Number of elements currently watched.
    #[must_use]
    pub fn watched_count(&self) -> usize {
        self.registry.borrow().len()
    }
}

impl VisibilityWatcher for IntersectionWatcher {
    type Element = DomElement;

    fn watch(&self, element: &DomElement, on_change: VisibilityCallback<DomElement>) {
        self.registry
            .borrow_mut()
            .push((element.clone(), on_change));
        self.observer.observe(element.as_element());
    }

    fn unwatch(&self, element: &DomElement) {
        self.registry.borrow_mut().retain(|(el, _)| el != element);
        self.observer.unobserve(element.as_element());
    }
}

impl Drop for IntersectionWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Mark `element` for reveal on the page-wide watcher.
///
/// # Errors
///
/// Returns [`Error::ObserverUnavailable`] if the watcher cannot be created.
pub fn reveal(element: Element) -> Result<DomRevealTrigger> {
    let watcher = IntersectionWatcher::shared()?;
    Ok(RevealTrigger::new(&watcher, DomElement::from(element)))
}

fn checkpoints(threshold: VisibilityThreshold) -> Array {
    let list = Array::new();
    list.push(&JsValue::from_f64(threshold.ratio()));
    for ratio in EXTRA_CHECKPOINTS {
        if ratio > threshold.ratio() {
            list.push(&JsValue::from_f64(ratio));
        }
    }
    list
}

/// Convert a batch of observer entries and route it to their targets.
fn dispatch(registry: &Registry, entries: &Array) {
    let batch: Vec<VisibilityEntry<DomElement>> = entries
        .iter()
        .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
        .map(|entry| {
            VisibilityEntry::new(
                DomElement::from(entry.target()),
                entry.intersection_ratio(),
                entry.is_intersecting(),
            )
        })
        .collect();
    trace!(entries = batch.len(), "Intersection report");

    route(registry, &batch);
}

/// Hand each registered element the entries that target it.
///
/// The matching registrations are snapshotted first and callbacks run after
/// the registry borrow is released, so a callback may unwatch its element.
/// Entries for elements that are not registered are dropped.
fn route<E: Clone + PartialEq>(
    registry: &RefCell<Vec<(E, VisibilityCallback<E>)>>,
    batch: &[VisibilityEntry<E>],
) {
    let targets: Vec<_> = registry
        .borrow()
        .iter()
        .filter(|(element, _)| batch.iter().any(|entry| &entry.target == element))
        .cloned()
        .collect();

    for (element, callback) in targets {
        let own: Vec<_> = batch
            .iter()
            .filter(|entry| entry.target == element)
            .cloned()
            .collect();
        callback(&own);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use lumen_core::{MarkerTarget, REVEAL_ACTIVE_MARKER, RevealState};

    use super::*;

    type TestRegistry = Rc<RefCell<Vec<(u32, VisibilityCallback<u32>)>>>;

    /// Callback that records the ratios it receives.
    fn recorder(seen: &Rc<RefCell<Vec<f64>>>) -> VisibilityCallback<u32> {
        let seen = Rc::clone(seen);
        Rc::new(move |entries: &[VisibilityEntry<u32>]| {
            seen.borrow_mut().extend(entries.iter().map(|e| e.ratio));
        })
    }

    #[test]
    fn test_route_mixed_batch_reaches_each_target() {
        let registry: TestRegistry = Rc::default();
        let seen_a = Rc::default();
        let seen_b = Rc::default();
        registry.borrow_mut().push((1, recorder(&seen_a)));
        registry.borrow_mut().push((2, recorder(&seen_b)));

        route(
            &registry,
            &[
                VisibilityEntry::visible(1, 0.2),
                VisibilityEntry::visible(2, 0.6),
                VisibilityEntry::visible(1, 0.4),
            ],
        );

        assert_eq!(*seen_a.borrow(), vec![0.2, 0.4]);
        assert_eq!(*seen_b.borrow(), vec![0.6]);
    }

    #[test]
    fn test_route_drops_unregistered_targets() {
        let registry: TestRegistry = Rc::default();
        let seen = Rc::default();
        registry.borrow_mut().push((1, recorder(&seen)));

        route(&registry, &[VisibilityEntry::visible(9, 1.0)]);

        assert!(seen.borrow().is_empty());
        assert_eq!(registry.borrow().len(), 1);
    }

    #[test]
    fn test_route_allows_unwatch_from_callback() {
        let registry: TestRegistry = Rc::default();
        let calls = Rc::new(Cell::new(0));
        let self_removing: VisibilityCallback<u32> = {
            let registry = Rc::clone(&registry);
            let calls = Rc::clone(&calls);
            Rc::new(move |_entries: &[VisibilityEntry<u32>]| {
                calls.set(calls.get() + 1);
                registry.borrow_mut().retain(|(el, _)| *el != 1);
            })
        };
        let seen_b = Rc::default();
        registry.borrow_mut().push((1, self_removing));
        registry.borrow_mut().push((2, recorder(&seen_b)));

        let batch = [
            VisibilityEntry::visible(1, 0.5),
            VisibilityEntry::visible(2, 0.5),
        ];
        route(&registry, &batch);
        route(&registry, &batch);

        assert_eq!(calls.get(), 1);
        assert_eq!(*seen_b.borrow(), vec![0.5, 0.5]);
        assert_eq!(registry.borrow().len(), 1);
    }

    /// Element handle for driving real triggers through `route`.
    #[derive(Clone)]
    struct TestElement {
        id: u32,
        classes: Rc<RefCell<Vec<String>>>,
    }

    impl PartialEq for TestElement {
        fn eq(&self, other: &Self) -> bool {
            self.id == other.id
        }
    }

    impl MarkerTarget for TestElement {
        fn add_marker(&self, marker: &str) {
            if !self.has_marker(marker) {
                self.classes.borrow_mut().push(marker.to_string());
            }
        }

        fn has_marker(&self, marker: &str) -> bool {
            self.classes.borrow().iter().any(|c| c == marker)
        }
    }

    /// Watcher with the same registry and routing as `IntersectionWatcher`.
    #[derive(Default)]
    struct RoutingWatcher {
        registry: RefCell<Vec<(TestElement, VisibilityCallback<TestElement>)>>,
    }

    impl VisibilityWatcher for RoutingWatcher {
        type Element = TestElement;

        fn watch(&self, element: &TestElement, on_change: VisibilityCallback<TestElement>) {
            self.registry
                .borrow_mut()
                .push((element.clone(), on_change));
        }

        fn unwatch(&self, element: &TestElement) {
            self.registry.borrow_mut().retain(|(el, _)| el != element);
        }
    }

    #[test]
    fn test_route_drives_triggers_independently() {
        let watcher = Rc::new(RoutingWatcher::default());
        let a = TestElement {
            id: 1,
            classes: Rc::default(),
        };
        let b = TestElement {
            id: 2,
            classes: Rc::default(),
        };
        let trigger_a = RevealTrigger::new(&watcher, a.clone());
        let trigger_b = RevealTrigger::new(&watcher, b.clone());

        route(
            &watcher.registry,
            &[
                VisibilityEntry::visible(a.clone(), 0.5),
                VisibilityEntry::visible(b.clone(), 0.05),
                VisibilityEntry::visible(a.clone(), 0.9),
            ],
        );

        assert!(trigger_a.is_revealed());
        assert!(a.has_marker(REVEAL_ACTIVE_MARKER));
        assert_eq!(trigger_b.state(), RevealState::Observing);
        assert!(!b.has_marker(REVEAL_ACTIVE_MARKER));
        assert_eq!(watcher.registry.borrow().len(), 1);
    }
}

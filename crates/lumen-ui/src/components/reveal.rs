//! Reveal-on-scroll wrapper component.

use leptos::html::Div;
use leptos::prelude::*;
use tracing::warn;

use crate::observer::{DomRevealTrigger, reveal};

/// Wraps its children in a `<div>` that fades in the first time it is at
/// least 10% on screen.
///
/// The trigger is attached once the element is mounted and destroyed when
/// the component is cleaned up. If the browser has no
/// `IntersectionObserver`, the failure is logged and no marker is added,
/// so the content stays plainly visible.
#[component]
pub fn Reveal(
    /// Extra classes for the wrapper element.
    #[prop(optional, into)]
    class: String,
    /// Content to reveal.
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<Div>::new();
    let trigger = StoredValue::new_local(None::<DomRevealTrigger>);

    Effect::new(move |_| {
        let Some(div) = node_ref.get() else {
            return;
        };
        if trigger.with_value(Option::is_some) {
            return;
        }
        match reveal(div.into()) {
            Ok(handle) => trigger.set_value(Some(handle)),
            Err(e) => warn!("Reveal unavailable: {}", e),
        }
    });

    on_cleanup(move || {
        trigger.try_with_value(|handle| {
            if let Some(handle) = handle {
                handle.destroy();
            }
        });
    });

    view! {
        <div node_ref=node_ref class=class>
            {children()}
        </div>
    }
}

//! Header component.

use leptos::prelude::*;
use lumen_core::Page;

/// Application header with links to both pages.
#[component]

pub fn Header(
    /// Page currently mounted, highlighted in the navigation.
    current: Page,
) -> impl IntoView {
    let link_class = move |page: Page| {
        if page == current {
            "nav-link nav-link-active"
        } else {
            "nav-link"
        }
    };

    view! {
        <header class="app-header">
            <a class="logo" href=Page::Home.path()>
                <span class="logo-text">"Lumen"</span>
            </a>
            <nav class="app-nav">
                <a class=link_class(Page::Home) href=Page::Home.path()>"Home"</a>
                <a class=link_class(Page::Weather) href=Page::Weather.path()>"Weather"</a>
            </nav>
        </header>
    }
}

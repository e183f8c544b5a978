//! Main application component.

use leptos::prelude::*;
use lumen_core::Page;

use crate::components::Header;
use crate::pages::{HomePage, WeatherPage};
use crate::theme::generate_css_variables;

/// Main application component.
#[component]

pub fn App(
    /// Page chosen from the location path.
    page: Page,
) -> impl IntoView {
    let css_vars = generate_css_variables();

    let content = match page {
        Page::Home => view! { <HomePage /> }.into_any(),
        Page::Weather => view! { <WeatherPage /> }.into_any(),
    };

    view! {
        <style>{css_vars}</style>
        <style>{include_str!("../styles/main.css")}</style>
        <Header current=page />
        {content}
    }
}

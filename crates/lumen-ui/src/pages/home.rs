//! Landing page.

use leptos::prelude::*;

use crate::components::Reveal;

/// A titled block of copy on the landing page.
struct Highlight {
    title: &'static str,
    body: &'static str,
}

static HIGHLIGHTS: [Highlight; 3] = [
    Highlight {
        title: "Built for the browser",
        body: "Compiled to WebAssembly and rendered with fine-grained reactivity.",
    },
    Highlight {
        title: "Motion on arrival",
        body: "Sections fade in the first time they scroll into view, and only once.",
    },
    Highlight {
        title: "Nothing to install",
        body: "A single page with no server round trips after the first load.",
    },
];

/// Landing page, mounted for every path except `/weather`.
#[component]

pub fn HomePage() -> impl IntoView {
    view! {
        <main class="page page-home">
            <Reveal class="hero">
                <h1 class="hero-title">"Lumen"</h1>
                <p class="hero-subtitle">"A small site that lights up as you scroll."</p>
            </Reveal>
            <section class="highlights">
                {HIGHLIGHTS
                    .iter()
                    .map(|highlight| view! {
                        <Reveal class="card">
                            <h2 class="card-title">{highlight.title}</h2>
                            <p class="card-body">{highlight.body}</p>
                        </Reveal>
                    })
                    .collect_view()}
            </section>
            <Reveal class="cta">
                <a class="btn btn-primary" href="/weather">"Check the weather"</a>
            </Reveal>
        </main>
    }
}

//! `Lumen` UI - Leptos-based user interface.
//!
//! This crate provides the browser side of `Lumen`: the
//! `IntersectionObserver` watcher behind reveal triggers, the [`Reveal`]
//! component, the pages and the logging setup used by the WASM entry point.

pub mod app;
pub mod components;
pub mod dom;
pub mod logging;
pub mod observer;
pub mod pages;
pub mod theme;

pub use app::App;
pub use components::Reveal;
pub use dom::DomElement;
pub use observer::{DomRevealTrigger, IntersectionWatcher, reveal};

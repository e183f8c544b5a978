//! `Lumen` Core Library
//!
//! This crate provides the platform-independent parts of the `Lumen` web
//! application:
//! - One-shot reveal-on-scroll triggers
//! - The visibility watcher and marker seams the host implements
//! - Page selection from the location path
//! - Application configuration
//!
//! Nothing here touches the DOM. The UI crate plugs a browser
//! `IntersectionObserver` and `classList` in behind [`VisibilityWatcher`]
//! and [`MarkerTarget`]; tests plug in deterministic fakes.
//!
//! # Error Handling
//!
//! Fallible operations return [`Result`] with the crate's [`Error`].
//! Observing and cancelling a reveal never fail.

pub mod config;
pub mod error;
pub mod marker;
pub mod reveal;
pub mod route;
pub mod watcher;

pub use config::{AppConfig, CONFIG_ELEMENT_ID, DEFAULT_LOG_LEVEL, DEFAULT_MOUNT_TARGET_ID};
pub use error::{Error, Result};
pub use marker::{MarkerTarget, REVEAL_ACTIVE_MARKER, REVEAL_MARKER};
pub use reveal::{RevealState, RevealTrigger};
pub use route::{Page, WEATHER_PATH};
pub use watcher::{
    REVEAL_THRESHOLD, VisibilityCallback, VisibilityEntry, VisibilityThreshold, VisibilityWatcher,
};

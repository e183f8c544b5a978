//! UI components for the `Lumen` application.

mod header;
mod reveal;

pub use header::Header;
pub use reveal::Reveal;

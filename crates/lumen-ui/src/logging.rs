//! Structured logging to the browser console using tracing.
//!
//! Provides:
//! - A level filter from the application configuration
//! - Human-readable lines without timestamps (there is no system clock
//!   on `wasm32-unknown-unknown`)
//! - Routing by level to `console.error`, `console.warn`, `console.info`,
//!   `console.debug` and `console.log`

use std::io;

use lumen_core::{AppConfig, Error, Result};
use tracing::{Level, Metadata};
use tracing_subscriber::{
    EnvFilter, Layer,
    filter::LevelFilter,
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};
use wasm_bindgen::JsValue;

/// Console method a log line is written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleMethod {
    /// `console.error`
    Error,
    /// `console.warn`
    Warn,
    /// `console.info`
    Info,
    /// `console.debug`
    Debug,
    /// `console.log`
    Log,
}

impl From<Level> for ConsoleMethod {
    fn from(level: Level) -> Self {
        if level == Level::ERROR {
            Self::Error
        } else if level == Level::WARN {
            Self::Warn
        } else if level == Level::INFO {
            Self::Info
        } else if level == Level::DEBUG {
            Self::Debug
        } else {
            Self::Log
        }
    }
}

impl ConsoleMethod {
    fn write(self, line: &str) {
        let value = JsValue::from_str(line);
        match self {
            Self::Error => web_sys::console::error_1(&value),
            Self::Warn => web_sys::console::warn_1(&value),
            Self::Info => web_sys::console::info_1(&value),
            Self::Debug => web_sys::console::debug_1(&value),
            Self::Log => web_sys::console::log_1(&value),
        }
    }
}

/// Buffers one formatted event and writes it to the console on drop.
pub struct ConsoleWriter {
    method: ConsoleMethod,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    fn new(method: ConsoleMethod) -> Self {
        Self {
            method,
            buffer: Vec::new(),
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buffer);
        let line = line.trim_end();
        if !line.is_empty() {
            self.method.write(line);
        }
    }
}

/// [`MakeWriter`] handing out a [`ConsoleWriter`] per event.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::Log)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::from(*meta.level()))
    }
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns an error if the configured level is invalid or a subscriber is
/// already installed.
pub fn init_logging(config: &AppConfig) -> Result<()> {
    let level = config.level()?;
    let filter = EnvFilter::default().add_directive(LevelFilter::from_level(level).into());

    let console_layer = fmt::layer()
        .with_writer(ConsoleMakeWriter)
        .without_time()
        .with_target(config.log_target)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(console_layer)
        .try_init()
        .map_err(|e| Error::Configuration(format!("Failed to initialize logging: {e}")))
}

//! Logging initialisation.
//!
//! # Design
//! - One entry point installs the global `tracing` subscriber for the app.
//! - wasm32 has no stderr and no system clock: events go to the browser console, untimed.
//! - Natively `RUST_LOG` overrides the configured level.

use crate::core::config::{DEFAULT_LOG_LEVEL, UiConfig};
use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Errors raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// A global subscriber is already installed.
    #[error("failed to install tracing subscriber")]
    SubscriberInstall {
        /// Underlying tracing subscriber error.
        #[source]
        source: TryInitError,
    },
    /// The level directive could not be parsed.
    #[error("invalid log filter directive")]
    InvalidFilter {
        /// Directive as configured.
        directive: String,
        /// Underlying parse error.
        #[source]
        source: ParseError,
    },
}

/// Logging configuration.
#[derive(Debug, Clone, Copy)]
pub struct LoggingConfig<'a> {
    /// Filter directive (e.g. `info`, `reelbox_ui=debug`).
    pub level: &'a str,
}

impl Default for LoggingConfig<'_> {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl<'a> From<&'a UiConfig> for LoggingConfig<'a> {
    fn from(config: &'a UiConfig) -> Self {
        Self {
            level: &config.log_level,
        }
    }
}

/// Parse a filter directive.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidFilter`] for malformed directives.
pub fn build_filter(level: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(level).map_err(|source| TelemetryError::InvalidFilter {
        directive: level.to_string(),
        source,
    })
}

/// Configure and install the global tracing subscriber.
///
/// # Errors
///
/// Returns an error for an invalid level or when a subscriber is already installed.
pub fn init_logging(config: &LoggingConfig<'_>) -> Result<(), TelemetryError> {
    #[cfg(not(target_arch = "wasm32"))]
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => build_filter(config.level)?,
    };
    #[cfg(target_arch = "wasm32")]
    let filter = build_filter(config.level)?;

    #[cfg(not(target_arch = "wasm32"))]
    let layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);
    #[cfg(target_arch = "wasm32")]
    let layer = fmt::layer()
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .with_writer(console::ConsoleMakeWriter);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|source| TelemetryError::SubscriberInstall { source })
}

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io;
    use tracing::{Level, Metadata};
    use tracing_subscriber::fmt::MakeWriter;

    pub(super) struct ConsoleMakeWriter;

    /// Buffers one formatted event and hands it to the console on drop.
    pub(super) struct ConsoleWriter {
        level: Level,
        buffer: Vec<u8>,
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
            let line = line.trim_end().to_string();
            if line.is_empty() {
                return;
            }
            match self.level {
                Level::ERROR => gloo::console::error!(line),
                Level::WARN => gloo::console::warn!(line),
                Level::INFO => gloo::console::info!(line),
                _ => gloo::console::debug!(line),
            }
        }
    }

    impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter {
                level: Level::INFO,
                buffer: Vec::new(),
            }
        }

        fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
            ConsoleWriter {
                level: *meta.level(),
                buffer: Vec::new(),
            }
        }
    }
}

//! Bridge between the tracing crate and duolog's severity routing.
//!
//! The layer forwards `tracing` events into a duolog [`Logger`], so code
//! instrumented with the standard `tracing` macros shares the same two
//! output streams, templates, and colorization as direct duolog callers.
//!
//! # Usage
//!
//! ```rust,ignore
//! use duolog::{get_logger, tracing_bridge};
//!
//! tracing_bridge::init_tracing(get_logger("app"));
//! tracing::info!("visible through the duolog standard stream");
//! ```

use std::io::Write;
use std::sync::Mutex;

use duolog_core::Severity;
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use crate::logger::{ConsoleLogger, Logger};

/// A tracing layer that routes events through a duolog logger.
///
/// The logger sits behind a mutex because `tracing` delivers events
/// through a shared reference. Writer failures cannot propagate out of
/// `on_event`, so the bridge discards them; the direct emission methods
/// remain the interface with fail-fast I/O errors.
pub struct DuologLayer<O = std::io::Stdout, E = std::io::Stderr> {
    logger: Mutex<Logger<O, E>>,
}

impl<O, E> DuologLayer<O, E> {
    /// Wraps a logger for use as a tracing layer.
    pub fn new(logger: Logger<O, E>) -> Self {
        Self {
            logger: Mutex::new(logger),
        }
    }

    /// Consumes the layer and returns the wrapped logger.
    pub fn into_logger(self) -> Logger<O, E> {
        self.logger.into_inner().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

/// Maps a tracing level to the duolog severity it emits at.
///
/// `tracing` has no `VERBOSE` tier, so its five levels map onto the five
/// conventional duolog levels and `VERBOSE` stays reachable only through
/// direct emission.
#[must_use]
pub const fn severity_for_level(level: &Level) -> Severity {
    match *level {
        Level::ERROR => Severity::Error,
        Level::WARN => Severity::Warning,
        Level::INFO => Severity::Info,
        Level::DEBUG => Severity::Debug,
        Level::TRACE => Severity::Trace,
    }
}

impl<S, O, E> Layer<S> for DuologLayer<O, E>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    O: Write + 'static,
    E: Write + 'static,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let severity = severity_for_level(event.metadata().level());

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        let Some(message) = visitor.message else {
            return;
        };

        if let Ok(mut logger) = self.logger.lock() {
            let _ = logger.log(severity, format_args!("{message}"));
        }
    }
}

/// Visitor to extract the message field from a tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }
}

/// Installs a global tracing subscriber that forwards events into
/// `logger`.
///
/// # Example
///
/// ```rust,ignore
/// use duolog::{get_logger, tracing_bridge};
///
/// tracing_bridge::init_tracing(get_logger("app"));
/// tracing::warn!("routed to the standard stream as WARNING");
/// ```
pub fn init_tracing(logger: ConsoleLogger) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(DuologLayer::new(logger))
        .init();
}

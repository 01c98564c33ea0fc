//! Logger construction: the injectable factory and the process-wide
//! variant selector.
//!
//! [`LoggerFactory`] is an explicit value an application can thread through
//! its wiring. The free functions ([`get_logger`], the `setup_*` family)
//! back the ambient interface: a process-wide selection that
//! [`get_logger`] reads at construction time. The plain variant is
//! installed by the statics themselves, so a process that never calls a
//! `setup_*` function gets plain loggers.
//!
//! The selector is intended to be set once at startup, before concurrent
//! work begins. The switch is a relaxed atomic, so concurrent
//! reconfiguration is not a data race, but which configuration a logger
//! constructed during the window observes is unspecified.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::logger::{ConsoleLogger, Logger};
use crate::variant::{LoggerConfig, LoggerVariant};

/// Constructs loggers of a fixed presentation variant.
///
/// The factory is the dependency-injected alternative to the ambient
/// selector: application bootstrap builds one and passes it down, and
/// everything below it stays oblivious to which variant is active.
///
/// # Examples
///
/// ```
/// use duolog::{LoggerFactory, LoggerVariant};
///
/// let factory = LoggerFactory::new(LoggerVariant::ProcessTagged.config());
/// let logger = factory.logger("worker");
/// assert_eq!(logger.variant(), LoggerVariant::ProcessTagged);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct LoggerFactory {
    config: LoggerConfig,
}

impl LoggerFactory {
    /// Creates a factory producing loggers with the given flags.
    #[must_use]
    pub const fn new(config: LoggerConfig) -> Self {
        Self { config }
    }

    /// Returns the flags the factory applies.
    #[must_use]
    pub const fn config(&self) -> LoggerConfig {
        self.config
    }

    /// Returns the variant the factory produces.
    #[must_use]
    pub const fn variant(&self) -> LoggerVariant {
        self.config.variant()
    }

    /// Constructs a console logger named `name`.
    #[must_use]
    pub fn logger(&self, name: impl Into<String>) -> ConsoleLogger {
        Logger::new(name, self.config)
    }
}

static TIMESTAMP: AtomicBool = AtomicBool::new(false);
static PROCESS_TAG: AtomicBool = AtomicBool::new(false);

fn install(config: LoggerConfig) {
    TIMESTAMP.store(config.timestamp, Ordering::Relaxed);
    PROCESS_TAG.store(config.process_tag, Ordering::Relaxed);
}

/// Returns the presentation flags the ambient selector currently holds.
#[must_use]
pub fn selected_config() -> LoggerConfig {
    LoggerConfig {
        timestamp: TIMESTAMP.load(Ordering::Relaxed),
        process_tag: PROCESS_TAG.load(Ordering::Relaxed),
    }
}

/// Returns the variant the ambient selector currently holds.
#[must_use]
pub fn selected_variant() -> LoggerVariant {
    selected_config().variant()
}

/// Constructs a console logger of the currently selected variant.
///
/// The selection is read once, at construction; reconfiguring the
/// selector afterwards never alters a logger that already exists.
#[must_use]
pub fn get_logger(name: impl Into<String>) -> ConsoleLogger {
    Logger::new(name, selected_config())
}

/// Selects the plain variant for subsequently constructed loggers.
pub fn setup_default() {
    install(LoggerVariant::Plain.config());
}

/// Selects the timestamped variant for subsequently constructed loggers.
pub fn setup_timestamping() {
    install(LoggerVariant::Timestamped.config());
}

/// Selects the process-tagged variant for subsequently constructed
/// loggers, for runs that fan out across worker processes.
pub fn setup_parallel() {
    install(LoggerVariant::ProcessTagged.config());
}

/// Selects the timestamped process-tagged variant for subsequently
/// constructed loggers.
pub fn setup_timestamping_parallel() {
    install(LoggerVariant::TimestampedProcessTagged.config());
}

//! The [`Logger`] that renders records and routes them to output streams.

use std::fmt;
use std::io::{self, Write};
use std::time::SystemTime;

use duolog_core::{LogRecord, RecordFormatter, Severity};
use duolog_sink::RecordSink;

use crate::variant::{LoggerConfig, LoggerVariant};

/// A named logger owning one formatter and two severity-routed sinks.
///
/// Non-error records go to the standard stream, `ERROR` records to the
/// error stream; both sinks share the logger's single formatter, so a
/// presentation variant is wired exactly once. There is no upward
/// propagation: the two sinks are the only outputs a record can reach,
/// and they live and die with the logger.
///
/// The effective level gates emission before a record is built. It is
/// owned by the application, which typically resolves it from the
/// command-line verbosity count via
/// [`severity_for_verbosity`](crate::severity_for_verbosity); a fresh
/// logger starts at `WARNING`, the level the default verbosity resolves
/// to.
///
/// # Examples
///
/// ```
/// use duolog::{Logger, LoggerConfig, Severity};
///
/// let mut logger = Logger::with_streams("sync", LoggerConfig::default(), Vec::new(), Vec::new());
/// logger.set_level(Severity::Verbose);
///
/// logger.info(format_args!("copied {} files", 3))?;
/// logger.debug(format_args!("not emitted at VERBOSE"))?;
/// logger.error(format_args!("boom"))?;
///
/// let (out, err) = logger.into_streams();
/// assert_eq!(out, b"INFO: sync: copied 3 files\n");
/// assert_eq!(err, b"ERROR: sync: boom\n");
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct Logger<O, E> {
    name: String,
    level: Severity,
    config: LoggerConfig,
    formatter: RecordFormatter,
    standard: RecordSink<O>,
    error: RecordSink<E>,
}

/// Logger variant wired to the process stdout and stderr streams.
pub type ConsoleLogger = Logger<io::Stdout, io::Stderr>;

impl ConsoleLogger {
    /// Creates a console logger with the given presentation flags.
    ///
    /// Writes go straight to [`io::stdout`] and [`io::stderr`]; the
    /// streams' own locking is the only synchronisation, matching the
    /// shared-resource policy of the process streams.
    #[must_use]
    pub fn new(name: impl Into<String>, config: LoggerConfig) -> Self {
        Self::with_streams(name, config, io::stdout(), io::stderr())
    }
}

impl<O, E> Logger<O, E> {
    /// Creates a logger over explicit standard and error writers.
    ///
    /// This is the seam tests and embedders use to capture output; the
    /// wiring is identical to [`ConsoleLogger::new`].
    #[must_use]
    pub fn with_streams(
        name: impl Into<String>,
        config: LoggerConfig,
        standard: O,
        error: E,
    ) -> Self {
        Self {
            name: name.into(),
            level: Severity::Warning,
            config,
            formatter: RecordFormatter::new(config.template()),
            standard: RecordSink::standard(standard),
            error: RecordSink::error(error),
        }
    }

    /// Returns the logger's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the effective level.
    #[must_use]
    pub const fn level(&self) -> Severity {
        self.level
    }

    /// Sets the effective level; records below it are dropped before they
    /// reach either sink.
    pub fn set_level(&mut self, level: Severity) {
        self.level = level;
    }

    /// Returns the presentation flags the logger was built with.
    #[must_use]
    pub const fn config(&self) -> LoggerConfig {
        self.config
    }

    /// Returns the presentation variant the logger was built with.
    #[must_use]
    pub const fn variant(&self) -> LoggerVariant {
        self.config.variant()
    }

    /// Reports whether a record at `severity` would be emitted.
    ///
    /// Callers use this to skip building expensive messages for disabled
    /// levels; the emission macros consult it before evaluating their
    /// format arguments.
    #[must_use]
    pub const fn enabled(&self, severity: Severity) -> bool {
        severity.is_emitting() && self.level.allows(severity)
    }

    /// Consumes the logger and returns the two writers.
    #[must_use]
    pub fn into_streams(self) -> (O, E) {
        (self.standard.into_inner(), self.error.into_inner())
    }
}

impl<O, E> Logger<O, E>
where
    O: Write,
    E: Write,
{
    /// Emits a record at `severity`.
    ///
    /// Disabled levels return without building a record, so argument
    /// formatting never runs for them. An enabled record is decorated
    /// (timestamp, at most once), then offered to both sinks; each sink
    /// applies its own filter. Writer failures propagate unchanged.
    pub fn log(&mut self, severity: Severity, args: fmt::Arguments<'_>) -> io::Result<()> {
        if !self.enabled(severity) {
            return Ok(());
        }

        let mut record = LogRecord::new(severity, self.name.as_str(), args.to_string());
        if self.config.timestamp {
            record.stamp(SystemTime::now());
        }

        self.standard.write(&record, &mut self.formatter)?;
        self.error.write(&record, &mut self.formatter)?;
        Ok(())
    }

    /// Emits an `ERROR` record, routed to the error stream.
    pub fn error(&mut self, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.log(Severity::Error, args)
    }

    /// Emits a `WARNING` record.
    pub fn warning(&mut self, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.log(Severity::Warning, args)
    }

    /// Emits an `INFO` record.
    pub fn info(&mut self, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.log(Severity::Info, args)
    }

    /// Emits a `VERBOSE` record.
    pub fn verbose(&mut self, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.log(Severity::Verbose, args)
    }

    /// Emits a `DEBUG` record.
    pub fn debug(&mut self, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.log(Severity::Debug, args)
    }

    /// Emits a `TRACE` record.
    pub fn trace(&mut self, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.log(Severity::Trace, args)
    }

    /// Flushes both sinks.
    pub fn flush(&mut self) -> io::Result<()> {
        self.standard.flush()?;
        self.error.flush()
    }
}

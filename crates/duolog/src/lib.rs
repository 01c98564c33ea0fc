#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `duolog` is a leveled console logging facility that splits one logical
//! log stream into two physical streams by severity: `ERROR` records go
//! to the error stream, everything else to the standard stream, so the
//! two can be redirected independently. The severity scale extends the
//! conventional five levels with `VERBOSE` (between `INFO` and `DEBUG`),
//! `TRACE` (below `DEBUG`), and `OFF` (disables all output), and a total
//! mapping turns a `-v`-counter verbosity index into the level a logger
//! gates on.
//!
//! # Design
//!
//! Presentation is composed, not subclassed: a [`LoggerConfig`] carries
//! two independent flags (timestamp decoration and process tagging), and
//! every combination is a valid [`LoggerVariant`]. The process-wide
//! selector ([`setup_default`] and friends) chooses the variant the
//! ambient [`get_logger`] constructs; [`LoggerFactory`] offers the same
//! choice as an explicit, injectable value. Reconfiguring the selector
//! affects only loggers constructed afterwards, because each logger owns
//! its two sinks and one formatter outright.
//!
//! # Invariants
//!
//! - A record reaches at most one of a logger's two sinks.
//! - Argument formatting never runs for a disabled level.
//! - The timestamp decoration is applied exactly once per record, before
//!   formatting.
//! - A logger configured at `OFF` emits nothing, at any severity.
//!
//! # Errors
//!
//! Emission returns [`std::io::Result`]: a failure to write to a stream
//! propagates to the caller unchanged, so a broken pipe is visible
//! rather than silently dropped. Nothing is retried.
//!
//! # Examples
//!
//! ```
//! use duolog::{Logger, LoggerConfig, Severity, severity_for_verbosity, info_log, debug_log};
//!
//! // The application resolves `-vv` to a level and configures the logger.
//! let mut logger = Logger::with_streams("x", LoggerConfig::default(), Vec::new(), Vec::new());
//! logger.set_level(severity_for_verbosity(Some(2)));
//!
//! info_log!(logger, "hi")?;            // emitted: VERBOSE allows INFO
//! debug_log!(logger, "dropped")?;      // gated out before formatting
//! logger.error(format_args!("boom"))?; // routed to the error stream
//!
//! let (out, err) = logger.into_streams();
//! assert_eq!(out, b"INFO: x: hi\n");
//! assert_eq!(err, b"ERROR: x: boom\n");
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! # See also
//!
//! - [`duolog_core`] for the record model and rendering.
//! - [`duolog_sink`] for the severity-filtered sinks.

pub mod color;
pub mod factory;
pub mod logger;
mod macros;
pub mod variant;
pub mod verbosity;

#[cfg(feature = "tracing")]
pub mod tracing_bridge;

pub use duolog_core::{
    LogRecord, ParseSeverityError, RecordFormatter, Severity, PLAIN_TEMPLATE,
    PROCESS_TAGGED_TEMPLATE, level_color, set_use_colors, use_colors,
};
pub use duolog_sink::{LineMode, RecordSink, SinkFilter};

pub use color::enable_colors_for_terminal;
pub use factory::{
    LoggerFactory, get_logger, selected_config, selected_variant, setup_default, setup_parallel,
    setup_timestamping, setup_timestamping_parallel,
};
pub use logger::{ConsoleLogger, Logger};
pub use variant::{LoggerConfig, LoggerVariant};
pub use verbosity::{
    VERBOSE_DEBUG, VERBOSE_ERROR, VERBOSE_INFO, VERBOSE_OFF, VERBOSE_TRACE, VERBOSE_VERBOSE,
    VERBOSE_WARNING, severity_for_verbosity,
};

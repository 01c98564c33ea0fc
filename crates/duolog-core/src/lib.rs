#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `duolog-core` holds the record model shared across the duolog workspace:
//! the [`Severity`] scale, the [`LogRecord`] type carrying one emitted event,
//! and the [`RecordFormatter`] that renders records through percent-escape
//! templates with optional ANSI colors.
//!
//! # Design
//!
//! The severity scale is a strict superset of the conventional five-level
//! scale: it adds a `VERBOSE` tier between `INFO` and `DEBUG`, a `TRACE`
//! tier below `DEBUG`, and an `OFF` tier above `ERROR` that disables all
//! output. Each level carries a numeric weight so that "is this record
//! enabled" stays a single integer comparison.
//!
//! Rendering walks a template string and substitutes `%`-escapes from the
//! record, reusing one scratch buffer per formatter so repeated emissions
//! avoid fresh allocations. Colorization wraps the whole rendered line in
//! the escape sequence registered for the record's level.
//!
//! # Invariants
//!
//! - Every [`Severity`] has exactly one stable display name; the enum makes
//!   an unnamed level unrepresentable.
//! - Template expansion never fails: unknown escapes pass through verbatim
//!   and a trailing `%` is emitted as-is.
//! - The timestamp decoration is applied at most once per record.
//!
//! # Errors
//!
//! Rendering is infallible; the only fallible operation in this crate is
//! parsing a [`Severity`] from its display name, which yields
//! [`ParseSeverityError`].
//!
//! # Examples
//!
//! ```
//! use duolog_core::{LogRecord, RecordFormatter, Severity, PLAIN_TEMPLATE};
//!
//! let record = LogRecord::new(Severity::Info, "sync", "copied 3 files");
//! let mut formatter = RecordFormatter::new(PLAIN_TEMPLATE);
//! assert_eq!(formatter.format(&record), "INFO: sync: copied 3 files");
//! ```

pub mod format;
pub mod record;
pub mod severity;

pub use format::{
    PLAIN_TEMPLATE, PROCESS_TAGGED_TEMPLATE, RecordFormatter, level_color, set_use_colors,
    use_colors,
};
pub use record::LogRecord;
pub use severity::{ParseSeverityError, Severity};

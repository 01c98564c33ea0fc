#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `duolog-sink` provides the record sinks that split one logical log
//! stream into two physical output streams. Each sink pairs an
//! [`std::io::Write`] target with a severity [`SinkFilter`] and a floor
//! level; records are rendered through a [`duolog_core::RecordFormatter`]
//! shared by both of a logger's sinks so presentation logic exists exactly
//! once.
//!
//! # Design
//!
//! The partition is by predicate, not by threshold: `ERROR` records go to
//! the error sink and every other level goes to the standard sink. The
//! filters test exact equality with `ERROR` by contract, so the two
//! predicates are complementary over the whole scale.
//!
//! # Invariants
//!
//! - A record is written by at most one of a logger's two sinks.
//! - Sinks never clone record payloads; they stream the formatter's
//!   scratch buffer into the writer.
//! - [`LineMode::WithNewline`] keeps each rendered record on its own line,
//!   the default for console diagnostics.
//!
//! # Errors
//!
//! All operations surface [`std::io::Error`] values originating from the
//! underlying writer, unchanged and unretried. A broken pipe is the
//! caller's problem to observe, never this crate's to swallow.
//!
//! # Examples
//!
//! ```
//! use duolog_core::{LogRecord, RecordFormatter, Severity, PLAIN_TEMPLATE};
//! use duolog_sink::RecordSink;
//!
//! let mut formatter = RecordFormatter::new(PLAIN_TEMPLATE);
//! let mut standard = RecordSink::standard(Vec::new());
//! let mut errors = RecordSink::error(Vec::new());
//!
//! let record = LogRecord::new(Severity::Warning, "sync", "3 files vanished");
//! standard.write(&record, &mut formatter)?;
//! errors.write(&record, &mut formatter)?;
//!
//! assert_eq!(standard.into_inner(), b"WARNING: sync: 3 files vanished\n");
//! assert!(errors.into_inner().is_empty());
//! # Ok::<(), std::io::Error>(())
//! ```

mod filter;
mod line_mode;
mod sink;

pub use filter::SinkFilter;
pub use line_mode::LineMode;
pub use sink::RecordSink;

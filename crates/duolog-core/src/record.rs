//! The [`LogRecord`] type carrying one emitted event and its metadata.

use std::time::SystemTime;

use crate::format;
use crate::severity::Severity;

/// One emitted log event.
///
/// A record carries everything the formatter may substitute into a
/// template: the severity, the emitting logger's name, the message text,
/// and the process id captured at construction. The message is mutable
/// until the record reaches the formatter so the timestamp decoration can
/// prepend to it.
#[derive(Clone, Debug)]
pub struct LogRecord {
    severity: Severity,
    logger_name: String,
    message: String,
    process_id: u32,
    timestamp: Option<SystemTime>,
}

impl LogRecord {
    /// Creates a record for `message` emitted by `logger_name` at
    /// `severity`.
    ///
    /// The process id is captured from [`std::process::id`] at
    /// construction, so records built in a forked worker carry the
    /// worker's id.
    #[must_use]
    pub fn new(
        severity: Severity,
        logger_name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            logger_name: logger_name.into(),
            message: message.into(),
            process_id: std::process::id(),
            timestamp: None,
        }
    }

    /// Returns the record's severity.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the name of the logger that emitted the record.
    #[must_use]
    pub fn logger_name(&self) -> &str {
        &self.logger_name
    }

    /// Returns the message text, including any decoration already applied.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the id of the process that constructed the record.
    #[must_use]
    pub const fn process_id(&self) -> u32 {
        self.process_id
    }

    /// Returns the decoration instant, if [`stamp`](Self::stamp) ran.
    #[must_use]
    pub const fn timestamp(&self) -> Option<SystemTime> {
        self.timestamp
    }

    /// Prepends the bracketed decoration timestamp to the message.
    ///
    /// The instant is captured by the caller at decoration time, not at
    /// write time. Stamping is applied at most once: a second call is a
    /// no-op, so a record can never carry two timestamps.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::SystemTime;
    /// use duolog_core::{LogRecord, Severity};
    ///
    /// let mut record = LogRecord::new(Severity::Info, "x", "hi");
    /// record.stamp(SystemTime::UNIX_EPOCH);
    /// assert_eq!(record.message(), "[19700101000000.000000] hi");
    ///
    /// // Idempotent: stamping again changes nothing.
    /// record.stamp(SystemTime::now());
    /// assert_eq!(record.message(), "[19700101000000.000000] hi");
    /// ```
    pub fn stamp(&mut self, now: SystemTime) {
        if self.timestamp.is_some() {
            return;
        }
        self.timestamp = Some(now);
        let mut decorated = format::decoration_prefix(now);
        decorated.push_str(&self.message);
        self.message = decorated;
    }
}

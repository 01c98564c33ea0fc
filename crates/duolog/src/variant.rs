//! Presentation variants and their configuration flags.
//!
//! The two presentation behaviours, timestamp decoration and process
//! tagging, are independent flags, not subclasses. Every combination of
//! the two is a valid [`LoggerVariant`], and composing them requires no
//! bespoke code beyond setting both flags.

use duolog_core::{PLAIN_TEMPLATE, PROCESS_TAGGED_TEMPLATE};

/// Presentation flags applied when a logger is constructed.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoggerConfig {
    /// Prepend a `[YYYYMMDDHHMMSS.ffffff] ` capture-time prefix to every
    /// message.
    pub timestamp: bool,
    /// Render the emitting process id in every line.
    pub process_tag: bool,
}

impl LoggerConfig {
    /// Returns the format template the flags select.
    ///
    /// Process tagging is the only flag that changes the template; the
    /// timestamp flag decorates the message itself before formatting.
    #[must_use]
    pub const fn template(self) -> &'static str {
        if self.process_tag {
            PROCESS_TAGGED_TEMPLATE
        } else {
            PLAIN_TEMPLATE
        }
    }

    /// Returns the variant these flags describe.
    #[must_use]
    pub const fn variant(self) -> LoggerVariant {
        match (self.timestamp, self.process_tag) {
            (false, false) => LoggerVariant::Plain,
            (true, false) => LoggerVariant::Timestamped,
            (false, true) => LoggerVariant::ProcessTagged,
            (true, true) => LoggerVariant::TimestampedProcessTagged,
        }
    }
}

/// A capability combination of the two presentation behaviours.
///
/// Variants are fully specified by which decorators are active; they are
/// interconvertible with [`LoggerConfig`] and exist so the process-wide
/// selector can name a combination.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LoggerVariant {
    /// `LEVEL: loggerName: message`
    #[default]
    Plain,
    /// Plain with a capture-time prefix on the message.
    Timestamped,
    /// `LEVEL: [pid]: loggerName: message`
    ProcessTagged,
    /// Process-tagged with a capture-time prefix on the message.
    TimestampedProcessTagged,
}

impl LoggerVariant {
    /// Returns the flags that produce this variant.
    #[must_use]
    pub const fn config(self) -> LoggerConfig {
        match self {
            Self::Plain => LoggerConfig {
                timestamp: false,
                process_tag: false,
            },
            Self::Timestamped => LoggerConfig {
                timestamp: true,
                process_tag: false,
            },
            Self::ProcessTagged => LoggerConfig {
                timestamp: false,
                process_tag: true,
            },
            Self::TimestampedProcessTagged => LoggerConfig {
                timestamp: true,
                process_tag: true,
            },
        }
    }
}

impl From<LoggerConfig> for LoggerVariant {
    fn from(config: LoggerConfig) -> Self {
        config.variant()
    }
}

impl From<LoggerVariant> for LoggerConfig {
    fn from(variant: LoggerVariant) -> Self {
        variant.config()
    }
}

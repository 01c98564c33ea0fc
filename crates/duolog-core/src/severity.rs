//! The [`Severity`] scale and its parsing.

use std::fmt;
use std::str::FromStr;

/// Severity of a log record.
///
/// The scale extends the conventional five levels with a `VERBOSE` tier
/// between `INFO` and `DEBUG`, a `TRACE` tier finer than `DEBUG`, and an
/// `OFF` tier that sits above every emitting level. Variants are ordered by
/// their numeric weight, so `Severity::Error > Severity::Warning` and a
/// plain comparison answers "is this record at least as severe".
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Severity {
    /// Disables all output; no record is ever emitted at this level.
    Off = 60,
    /// Error conditions, routed to the error stream.
    Error = 40,
    /// Potentially problematic situations.
    Warning = 30,
    /// General informational messages.
    Info = 20,
    /// Chattier progress output, finer than `INFO`.
    Verbose = 15,
    /// Debugging information for development.
    Debug = 10,
    /// The most fine-grained diagnostics, below `DEBUG`.
    Trace = 5,
}

impl Severity {
    /// Returns the stable uppercase label used in rendered output.
    ///
    /// The label feeds the `%L` template escape and the color lookup, so it
    /// is part of the rendered-line contract.
    ///
    /// # Examples
    ///
    /// ```
    /// use duolog_core::Severity;
    ///
    /// assert_eq!(Severity::Verbose.as_str(), "VERBOSE");
    /// assert_eq!(Severity::Off.as_str(), "OFF");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
            Self::Verbose => "VERBOSE",
            Self::Debug => "DEBUG",
            Self::Trace => "TRACE",
        }
    }

    /// Returns the numeric weight of the level.
    ///
    /// Weights shrink as permissiveness grows: `OFF` is 60, `TRACE` is 5.
    /// A record is enabled when its weight is at least the effective
    /// level's weight.
    #[must_use]
    pub const fn weight(self) -> u8 {
        self as u8
    }

    /// Reports whether a record at `record` severity passes a gate set to
    /// `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use duolog_core::Severity;
    ///
    /// assert!(Severity::Info.allows(Severity::Error));
    /// assert!(Severity::Info.allows(Severity::Info));
    /// assert!(!Severity::Info.allows(Severity::Verbose));
    /// assert!(!Severity::Off.allows(Severity::Error));
    /// ```
    #[must_use]
    pub const fn allows(self, record: Self) -> bool {
        record.weight() >= self.weight()
    }

    /// Reports whether this severity is `ERROR`.
    ///
    /// The sink filters branch on this predicate; it is an exact-equality
    /// test by contract, not a threshold.
    #[must_use]
    pub const fn is_error(self) -> bool {
        matches!(self, Self::Error)
    }

    /// Reports whether any record can be emitted at this level.
    ///
    /// Only `OFF` is non-emitting.
    #[must_use]
    pub const fn is_emitting(self) -> bool {
        !matches!(self, Self::Off)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Severity`] from a string fails.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseSeverityError {
    _private: (),
}

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unrecognised severity level name")
    }
}

impl std::error::Error for ParseSeverityError {}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "OFF" => Ok(Self::Off),
            "ERROR" => Ok(Self::Error),
            "WARNING" => Ok(Self::Warning),
            "INFO" => Ok(Self::Info),
            "VERBOSE" => Ok(Self::Verbose),
            "DEBUG" => Ok(Self::Debug),
            "TRACE" => Ok(Self::Trace),
            _ => Err(ParseSeverityError { _private: () }),
        }
    }
}

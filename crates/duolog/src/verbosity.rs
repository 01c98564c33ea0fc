//! Mapping from a command-line verbosity count to a severity level.
//!
//! A `-v`-style counter produces an integer index; this module resolves
//! the index to the [`Severity`] a logger should gate on. The mapping is
//! total and monotonic: every integer resolves, and a higher index never
//! yields a less permissive level.

use duolog_core::Severity;

/// Verbosity index that disables all output.
pub const VERBOSE_OFF: i32 = -2;
/// Verbosity index that emits only errors.
pub const VERBOSE_ERROR: i32 = -1;
/// Verbosity index for the default level (no `-v` flags).
pub const VERBOSE_WARNING: i32 = 0;
/// Verbosity index for informational output (`-v`).
pub const VERBOSE_INFO: i32 = 1;
/// Verbosity index for chatty progress output (`-vv`).
pub const VERBOSE_VERBOSE: i32 = 2;
/// Verbosity index for debugging output (`-vvv`).
pub const VERBOSE_DEBUG: i32 = 3;
/// Verbosity index for the finest diagnostics (`-vvvv` and above).
pub const VERBOSE_TRACE: i32 = 4;

/// Resolves a verbosity index to the severity a logger should gate on.
///
/// `None` (no index supplied) resolves like index 0, the default
/// `WARNING`. Indices at or below [`VERBOSE_OFF`] resolve to `OFF` and
/// indices at or above [`VERBOSE_TRACE`] resolve to `TRACE`, keeping the
/// mapping monotonic over all of `i32`.
///
/// # Examples
///
/// ```
/// use duolog::{Severity, severity_for_verbosity};
///
/// assert_eq!(severity_for_verbosity(None), Severity::Warning);
/// assert_eq!(severity_for_verbosity(Some(2)), Severity::Verbose);
/// assert_eq!(severity_for_verbosity(Some(17)), Severity::Trace);
/// assert_eq!(severity_for_verbosity(Some(-2)), Severity::Off);
/// ```
#[must_use]
pub fn severity_for_verbosity(index: Option<i32>) -> Severity {
    match index.unwrap_or(VERBOSE_WARNING) {
        i if i <= VERBOSE_OFF => Severity::Off,
        VERBOSE_ERROR => Severity::Error,
        VERBOSE_WARNING => Severity::Warning,
        VERBOSE_INFO => Severity::Info,
        VERBOSE_VERBOSE => Severity::Verbose,
        VERBOSE_DEBUG => Severity::Debug,
        _ => Severity::Trace,
    }
}

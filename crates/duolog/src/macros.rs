//! Emission macros that gate before formatting.
//!
//! Each macro checks [`Logger::enabled`](crate::Logger::enabled) before
//! building its format arguments, so a message for a disabled level costs
//! one level comparison and nothing else. The macros evaluate to the
//! [`std::io::Result`] of the underlying emission.

/// Emits an `ERROR` record through `$logger` if the level is enabled.
///
/// # Example
/// ```
/// use duolog::{error_log, Logger, LoggerConfig};
///
/// let mut logger = Logger::with_streams("net", LoggerConfig::default(), Vec::new(), Vec::new());
/// error_log!(logger, "connection reset by {}", "peer")?;
/// # Ok::<(), std::io::Error>(())
/// ```
#[macro_export]
macro_rules! error_log {
    ($logger:expr, $($arg:tt)*) => {
        if $logger.enabled($crate::Severity::Error) {
            $logger.log($crate::Severity::Error, ::std::format_args!($($arg)*))
        } else {
            ::std::io::Result::Ok(())
        }
    };
}

/// Emits a `WARNING` record through `$logger` if the level is enabled.
#[macro_export]
macro_rules! warning_log {
    ($logger:expr, $($arg:tt)*) => {
        if $logger.enabled($crate::Severity::Warning) {
            $logger.log($crate::Severity::Warning, ::std::format_args!($($arg)*))
        } else {
            ::std::io::Result::Ok(())
        }
    };
}

/// Emits an `INFO` record through `$logger` if the level is enabled.
#[macro_export]
macro_rules! info_log {
    ($logger:expr, $($arg:tt)*) => {
        if $logger.enabled($crate::Severity::Info) {
            $logger.log($crate::Severity::Info, ::std::format_args!($($arg)*))
        } else {
            ::std::io::Result::Ok(())
        }
    };
}

/// Emits a `VERBOSE` record through `$logger` if the level is enabled.
#[macro_export]
macro_rules! verbose_log {
    ($logger:expr, $($arg:tt)*) => {
        if $logger.enabled($crate::Severity::Verbose) {
            $logger.log($crate::Severity::Verbose, ::std::format_args!($($arg)*))
        } else {
            ::std::io::Result::Ok(())
        }
    };
}

/// Emits a `DEBUG` record through `$logger` if the level is enabled.
#[macro_export]
macro_rules! debug_log {
    ($logger:expr, $($arg:tt)*) => {
        if $logger.enabled($crate::Severity::Debug) {
            $logger.log($crate::Severity::Debug, ::std::format_args!($($arg)*))
        } else {
            ::std::io::Result::Ok(())
        }
    };
}

/// Emits a `TRACE` record through `$logger` if the level is enabled.
#[macro_export]
macro_rules! trace_log {
    ($logger:expr, $($arg:tt)*) => {
        if $logger.enabled($crate::Severity::Trace) {
            $logger.log($crate::Severity::Trace, ::std::format_args!($($arg)*))
        } else {
            ::std::io::Result::Ok(())
        }
    };
}

//! Template expansion, colorization, and timestamp rendering.
//!
//! Records are rendered through percent-escape templates. Two canonical
//! templates exist: [`PLAIN_TEMPLATE`] and [`PROCESS_TAGGED_TEMPLATE`],
//! selected by whether process tagging is active on the emitting logger.

use std::borrow::Cow;
use std::fmt::Write as _;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::record::LogRecord;
use crate::severity::Severity;

/// Template without a process id: `LEVEL: loggerName: message`.
pub const PLAIN_TEMPLATE: &str = "%L: %n: %m";

/// Template with a process id: `LEVEL: [pid]: loggerName: message`.
pub const PROCESS_TAGGED_TEMPLATE: &str = "%L: [%p]: %n: %m";

/// ANSI sequence that restores the default terminal attributes.
pub const RESET: &str = "\x1b[0m";

static USE_COLORS: AtomicBool = AtomicBool::new(false);

/// Turns colorized output on or off process-wide.
///
/// Colors are off by default. The switch is read at formatting time, so it
/// affects every logger in the process, including ones constructed before
/// the call.
pub fn set_use_colors(enabled: bool) {
    USE_COLORS.store(enabled, Ordering::Relaxed);
}

/// Reports whether colorized output is currently enabled.
#[must_use]
pub fn use_colors() -> bool {
    USE_COLORS.load(Ordering::Relaxed)
}

/// Returns the ANSI color sequence registered for a level.
///
/// Levels absent from the table (`OFF`) yield `None` and render without a
/// color wrap even when colors are enabled.
#[must_use]
pub const fn level_color(severity: Severity) -> Option<&'static str> {
    match severity {
        Severity::Error => Some("\x1b[0;31m"),
        Severity::Warning => Some("\x1b[0;33m"),
        Severity::Info => Some("\x1b[0;94m"),
        Severity::Verbose => Some("\x1b[0;34m"),
        Severity::Debug => Some("\x1b[0;90m"),
        Severity::Trace => Some("\x1b[0;37m"),
        Severity::Off => None,
    }
}

/// Expands a record template into `out`.
///
/// Processes each `%X` escape by substituting the corresponding record
/// field. Unknown escapes are passed through verbatim and a literal `%%`
/// produces a single `%`, so expansion never fails.
///
/// Escapes: `%L` level name, `%n` logger name, `%p` process id, `%m`
/// message.
fn expand_template(template: &str, record: &LogRecord, out: &mut String) {
    let mut chars = template.chars();

    while let Some(ch) = chars.next() {
        if ch != '%' {
            out.push(ch);
            continue;
        }

        match chars.next() {
            Some('L') => out.push_str(record.severity().as_str()),
            Some('n') => out.push_str(record.logger_name()),
            Some('p') => {
                let _ = write!(out, "{}", record.process_id());
            }
            Some('m') => out.push_str(record.message()),
            Some('%') => out.push('%'),
            Some(other) => {
                // Unknown escape: pass through verbatim
                out.push('%');
                out.push(other);
            }
            None => {
                // Trailing percent with no escape character
                out.push('%');
            }
        }
    }
}

/// Renders [`LogRecord`] values through a fixed template.
///
/// The formatter owns a reusable scratch buffer so repeated emissions
/// avoid fresh allocations; one formatter instance is shared by both of a
/// logger's sinks. When the process-wide color switch is on, the rendered
/// line is wrapped in the escape sequence registered for the record's
/// level followed by [`RESET`].
///
/// # Examples
///
/// ```
/// use duolog_core::{LogRecord, RecordFormatter, Severity, PROCESS_TAGGED_TEMPLATE};
///
/// let record = LogRecord::new(Severity::Warning, "fetch", "retrying");
/// let mut formatter = RecordFormatter::new(PROCESS_TAGGED_TEMPLATE);
/// let line = formatter.format(&record);
/// assert!(line.starts_with("WARNING: ["));
/// assert!(line.ends_with("]: fetch: retrying"));
/// ```
#[derive(Clone, Debug)]
pub struct RecordFormatter {
    template: Cow<'static, str>,
    scratch: String,
}

impl RecordFormatter {
    /// Creates a formatter over the given template.
    #[must_use]
    pub fn new(template: impl Into<Cow<'static, str>>) -> Self {
        Self {
            template: template.into(),
            scratch: String::new(),
        }
    }

    /// Returns the template the formatter expands.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Renders a record, reusing the internal scratch buffer.
    ///
    /// The returned slice is valid until the next call.
    pub fn format(&mut self, record: &LogRecord) -> &str {
        self.scratch.clear();

        let color = if use_colors() {
            level_color(record.severity())
        } else {
            None
        };

        if let Some(color) = color {
            self.scratch.push_str(color);
            expand_template(&self.template, record, &mut self.scratch);
            self.scratch.push_str(RESET);
        } else {
            expand_template(&self.template, record, &mut self.scratch);
        }

        &self.scratch
    }
}

/// Renders the decoration prefix `[YYYYMMDDHHMMSS.ffffff] ` for `now`.
///
/// The conversion from epoch seconds to a civil date is performed manually
/// rather than through a date-time crate; instants before the epoch clamp
/// to the epoch.
#[must_use]
pub fn decoration_prefix(now: SystemTime) -> String {
    let since_epoch = now.duration_since(UNIX_EPOCH).unwrap_or_default();
    let epoch_secs = since_epoch.as_secs();
    let micros = since_epoch.subsec_micros();

    let total_days = epoch_secs / 86400;
    let day_seconds = (epoch_secs % 86400) as u32;
    let hours = day_seconds / 3600;
    let minutes = (day_seconds % 3600) / 60;
    let seconds = day_seconds % 60;

    let (year, month, day) = civil_from_days(total_days as i64);

    format!(
        "[{year:04}{month:02}{day:02}{hours:02}{minutes:02}{seconds:02}.{micros:06}] "
    )
}

/// Converts a day count (days since 1970-01-01) to a civil date (year, month, day).
///
/// Algorithm from Howard Hinnant's date library (public domain).
fn civil_from_days(days: i64) -> (i32, u32, u32) {
    let z = days + 719468;
    let era = if z >= 0 { z } else { z - 146096 } / 146097;
    let doe = (z - era * 146097) as u32;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let y = yoe as i64 + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = if m <= 2 { y + 1 } else { y };
    (y as i32, m, d)
}

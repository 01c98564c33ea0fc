use std::io::{self, Write};

use duolog_core::{LogRecord, RecordFormatter, Severity};

use crate::filter::SinkFilter;
use crate::line_mode::LineMode;

/// Severity-filtered sink that streams rendered records into an
/// [`std::io::Write`] target.
///
/// A sink admits a record only when the record's severity clears the
/// sink's floor level and passes its [`SinkFilter`]. Rendering goes
/// through a [`RecordFormatter`] borrowed from the owning logger, so both
/// of a logger's sinks share one formatter instance and one template.
///
/// # Examples
///
/// Collect error records into a [`Vec<u8>`]:
///
/// ```
/// use duolog_core::{LogRecord, RecordFormatter, Severity, PLAIN_TEMPLATE};
/// use duolog_sink::RecordSink;
///
/// let mut formatter = RecordFormatter::new(PLAIN_TEMPLATE);
/// let mut sink = RecordSink::error(Vec::new());
///
/// let written = sink.write(
///     &LogRecord::new(Severity::Error, "net", "connection reset"),
///     &mut formatter,
/// )?;
/// assert!(written);
///
/// let skipped = sink.write(
///     &LogRecord::new(Severity::Info, "net", "reconnected"),
///     &mut formatter,
/// )?;
/// assert!(!skipped);
///
/// assert_eq!(sink.into_inner(), b"ERROR: net: connection reset\n");
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct RecordSink<W> {
    writer: W,
    filter: SinkFilter,
    floor: Severity,
    line_mode: LineMode,
}

impl<W> RecordSink<W> {
    /// Creates the standard-stream sink: every level down to `TRACE`,
    /// except records exactly at `ERROR`.
    #[must_use]
    pub fn standard(writer: W) -> Self {
        Self::with_parts(writer, SinkFilter::NonError, Severity::Trace, LineMode::WithNewline)
    }

    /// Creates the error-stream sink: records exactly at `ERROR`.
    #[must_use]
    pub fn error(writer: W) -> Self {
        Self::with_parts(writer, SinkFilter::ErrorOnly, Severity::Error, LineMode::WithNewline)
    }

    /// Creates a sink from explicit parts.
    #[must_use]
    pub fn with_parts(writer: W, filter: SinkFilter, floor: Severity, line_mode: LineMode) -> Self {
        Self {
            writer,
            filter,
            floor,
            line_mode,
        }
    }

    /// Returns the sink's severity filter.
    #[must_use]
    pub const fn filter(&self) -> SinkFilter {
        self.filter
    }

    /// Returns the least permissive severity the sink accepts.
    #[must_use]
    pub const fn floor(&self) -> Severity {
        self.floor
    }

    /// Returns the current [`LineMode`].
    #[must_use]
    pub const fn line_mode(&self) -> LineMode {
        self.line_mode
    }

    /// Updates the [`LineMode`] used for subsequent writes.
    pub fn set_line_mode(&mut self, line_mode: LineMode) {
        self.line_mode = line_mode;
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    #[must_use]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Reports whether the sink would admit a record at `severity`.
    #[must_use]
    pub const fn admits(&self, severity: Severity) -> bool {
        self.floor.allows(severity) && self.filter.accepts(severity)
    }
}

impl<W> RecordSink<W>
where
    W: Write,
{
    /// Writes a single record if it passes the floor and filter.
    ///
    /// Returns `Ok(true)` when the record was rendered and written,
    /// `Ok(false)` when the sink's gate rejected it. Writer failures
    /// propagate unchanged; nothing is retried.
    pub fn write(
        &mut self,
        record: &LogRecord,
        formatter: &mut RecordFormatter,
    ) -> io::Result<bool> {
        if !self.admits(record.severity()) {
            return Ok(false);
        }

        self.writer.write_all(formatter.format(record).as_bytes())?;
        if self.line_mode.append_newline() {
            self.writer.write_all(b"\n")?;
        }
        Ok(true)
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duolog_core::PLAIN_TEMPLATE;

    fn formatter() -> RecordFormatter {
        RecordFormatter::new(PLAIN_TEMPLATE)
    }

    #[test]
    fn standard_sink_accepts_every_non_error_level() {
        let sink = RecordSink::standard(Vec::<u8>::new());
        for level in [
            Severity::Warning,
            Severity::Info,
            Severity::Verbose,
            Severity::Debug,
            Severity::Trace,
        ] {
            assert!(sink.admits(level), "{level} should reach the standard sink");
        }
        assert!(!sink.admits(Severity::Error));
    }

    #[test]
    fn error_sink_accepts_only_error() {
        let sink = RecordSink::error(Vec::<u8>::new());
        assert!(sink.admits(Severity::Error));
        for level in [
            Severity::Warning,
            Severity::Info,
            Severity::Verbose,
            Severity::Debug,
            Severity::Trace,
        ] {
            assert!(!sink.admits(level));
        }
    }

    #[test]
    fn write_appends_newline_by_default() {
        let mut fmt = formatter();
        let mut sink = RecordSink::standard(Vec::new());
        sink.write(&LogRecord::new(Severity::Info, "x", "hi"), &mut fmt)
            .expect("write succeeds");
        assert_eq!(sink.into_inner(), b"INFO: x: hi\n");
    }

    #[test]
    fn write_without_newline_preserves_output() {
        let mut fmt = formatter();
        let mut sink = RecordSink::standard(Vec::new());
        sink.set_line_mode(LineMode::WithoutNewline);
        sink.write(&LogRecord::new(Severity::Info, "x", "ready"), &mut fmt)
            .expect("write succeeds");
        assert_eq!(sink.into_inner(), b"INFO: x: ready");
    }

    #[test]
    fn rejected_record_writes_nothing() {
        let mut fmt = formatter();
        let mut sink = RecordSink::error(Vec::new());
        let written = sink
            .write(&LogRecord::new(Severity::Debug, "x", "noise"), &mut fmt)
            .expect("gate check succeeds");
        assert!(!written);
        assert!(sink.get_ref().is_empty());
    }

    #[test]
    fn write_propagates_io_errors() {
        struct FailingWriter;

        impl Write for FailingWriter {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut fmt = formatter();
        let mut sink = RecordSink::standard(FailingWriter);
        let err = sink
            .write(&LogRecord::new(Severity::Info, "x", "hi"), &mut fmt)
            .expect_err("broken pipe surfaces");
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn shared_formatter_serves_both_sinks() {
        let mut fmt = formatter();
        let mut standard = RecordSink::standard(Vec::new());
        let mut errors = RecordSink::error(Vec::new());

        let info = LogRecord::new(Severity::Info, "x", "hi");
        let boom = LogRecord::new(Severity::Error, "x", "boom");
        for record in [&info, &boom] {
            standard.write(record, &mut fmt).expect("write succeeds");
            errors.write(record, &mut fmt).expect("write succeeds");
        }

        assert_eq!(standard.into_inner(), b"INFO: x: hi\n");
        assert_eq!(errors.into_inner(), b"ERROR: x: boom\n");
    }
}

//! Integration tests for severity-based stream routing.
//!
//! A logger's standard sink receives every level except ERROR; the error
//! sink receives exactly ERROR. The partition is by equality, not by
//! threshold, so the two streams can be redirected independently without
//! a record ever appearing on both.

use duolog::{Logger, LoggerConfig, Severity};

type CaptureLogger = Logger<Vec<u8>, Vec<u8>>;

fn capture_logger() -> CaptureLogger {
    let mut logger = Logger::with_streams("route", LoggerConfig::default(), Vec::new(), Vec::new());
    logger.set_level(Severity::Trace);
    logger
}

fn emitted_lines(logger: CaptureLogger) -> (String, String) {
    let (out, err) = logger.into_streams();
    (
        String::from_utf8(out).expect("standard stream is utf-8"),
        String::from_utf8(err).expect("error stream is utf-8"),
    )
}

// ============================================================================
// Test 1: ERROR reaches only the error stream
// ============================================================================

#[test]
fn error_records_hit_only_the_error_stream() {
    let mut logger = capture_logger();
    logger.error(format_args!("boom")).unwrap();

    let (out, err) = emitted_lines(logger);
    assert!(out.is_empty());
    assert_eq!(err, "ERROR: route: boom\n");
}

// ============================================================================
// Test 2: every other level reaches only the standard stream
// ============================================================================

#[test]
fn non_error_records_hit_only_the_standard_stream() {
    let mut logger = capture_logger();
    logger.warning(format_args!("w")).unwrap();
    logger.info(format_args!("i")).unwrap();
    logger.verbose(format_args!("v")).unwrap();
    logger.debug(format_args!("d")).unwrap();
    logger.trace(format_args!("t")).unwrap();

    let (out, err) = emitted_lines(logger);
    assert_eq!(
        out,
        "WARNING: route: w\nINFO: route: i\nVERBOSE: route: v\nDEBUG: route: d\nTRACE: route: t\n"
    );
    assert!(err.is_empty());
}

// ============================================================================
// Test 3: interleaving keeps each stream self-contained
// ============================================================================

#[test]
fn interleaved_emission_partitions_cleanly() {
    let mut logger = capture_logger();
    logger.info(format_args!("first")).unwrap();
    logger.error(format_args!("second")).unwrap();
    logger.debug(format_args!("third")).unwrap();
    logger.error(format_args!("fourth")).unwrap();

    let (out, err) = emitted_lines(logger);
    assert_eq!(out, "INFO: route: first\nDEBUG: route: third\n");
    assert_eq!(err, "ERROR: route: second\nERROR: route: fourth\n");
}

// ============================================================================
// Test 4: no record is ever written twice
// ============================================================================

#[test]
fn each_record_appears_exactly_once_across_both_streams() {
    let mut logger = capture_logger();
    for i in 0..10 {
        if i % 3 == 0 {
            logger.error(format_args!("rec{i}")).unwrap();
        } else {
            logger.info(format_args!("rec{i}")).unwrap();
        }
    }

    let (out, err) = emitted_lines(logger);
    for i in 0..10 {
        let needle = format!("rec{i}");
        let total = out.matches(&needle).count() + err.matches(&needle).count();
        assert_eq!(total, 1, "record {i} must appear exactly once");
    }
}

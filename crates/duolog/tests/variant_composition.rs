//! Integration tests for presentation-variant composition.
//!
//! The timestamp and process-tag behaviours are independent flags; the
//! four variants are their cross product and share one emission path.
//! These tests pin the rendered shape of each combination and the
//! monotonicity of decoration timestamps.

use duolog::{Logger, LoggerVariant, Severity};

fn emit_one(variant: LoggerVariant, message: &str) -> String {
    let mut logger = Logger::with_streams("x", variant.config(), Vec::new(), Vec::new());
    logger.set_level(Severity::Trace);
    logger.info(format_args!("{message}")).unwrap();
    let (out, _) = logger.into_streams();
    String::from_utf8(out).unwrap()
}

/// Splits `[YYYYMMDDHHMMSS.ffffff] rest` into the stamp digits and the rest.
fn split_stamp(decorated: &str) -> (&str, &str) {
    assert!(decorated.starts_with('['), "missing stamp in {decorated:?}");
    let close = decorated.find("] ").expect("stamp is bracketed");
    let stamp = &decorated[1..close];
    assert_eq!(stamp.len(), 21, "stamp {stamp:?} has the wrong width");
    assert!(stamp[..14].chars().all(|c| c.is_ascii_digit()));
    assert_eq!(&stamp[14..15], ".");
    assert!(stamp[15..].chars().all(|c| c.is_ascii_digit()));
    (stamp, &decorated[close + 2..])
}

// ============================================================================
// Test 1: the four variant shapes
// ============================================================================

#[test]
fn plain_variant_shape() {
    assert_eq!(emit_one(LoggerVariant::Plain, "hi"), "INFO: x: hi\n");
}

#[test]
fn process_tagged_variant_shape() {
    let line = emit_one(LoggerVariant::ProcessTagged, "hi");
    assert_eq!(line, format!("INFO: [{}]: x: hi\n", std::process::id()));
}

#[test]
fn timestamped_variant_shape() {
    let line = emit_one(LoggerVariant::Timestamped, "hi");
    let decorated = line
        .strip_prefix("INFO: x: ")
        .expect("plain template around the decorated message");
    let (_stamp, rest) = split_stamp(decorated);
    assert_eq!(rest, "hi\n");
}

#[test]
fn both_decorators_compose_without_bespoke_wiring() {
    let line = emit_one(LoggerVariant::TimestampedProcessTagged, "hi");
    let prefix = format!("INFO: [{}]: x: ", std::process::id());
    let decorated = line
        .strip_prefix(&prefix)
        .expect("process-tagged template around the decorated message");
    let (_stamp, rest) = split_stamp(decorated);
    assert_eq!(rest, "hi\n");
}

// ============================================================================
// Test 2: decoration timestamps never run backwards
// ============================================================================

#[test]
fn successive_stamps_are_non_decreasing() {
    let mut logger = Logger::with_streams(
        "x",
        LoggerVariant::Timestamped.config(),
        Vec::new(),
        Vec::new(),
    );
    logger.set_level(Severity::Trace);
    for i in 0..5 {
        logger.info(format_args!("m{i}")).unwrap();
    }

    let (out, _) = logger.into_streams();
    let out = String::from_utf8(out).unwrap();
    let stamps: Vec<String> = out
        .lines()
        .map(|line| {
            let decorated = line.strip_prefix("INFO: x: ").unwrap();
            split_stamp(decorated).0.to_owned()
        })
        .collect();

    assert_eq!(stamps.len(), 5);
    for pair in stamps.windows(2) {
        // The stamp format is lexicographically ordered.
        assert!(pair[0] <= pair[1], "stamp went backwards: {pair:?}");
    }
}

// ============================================================================
// Test 3: the error stream carries the same decoration
// ============================================================================

#[test]
fn error_stream_lines_are_decorated_too() {
    let mut logger = Logger::with_streams(
        "x",
        LoggerVariant::TimestampedProcessTagged.config(),
        Vec::new(),
        Vec::new(),
    );
    logger.error(format_args!("boom")).unwrap();

    let (out, err) = logger.into_streams();
    assert!(out.is_empty());
    let line = String::from_utf8(err).unwrap();
    let prefix = format!("ERROR: [{}]: x: ", std::process::id());
    let decorated = line.strip_prefix(&prefix).expect("decorated error line");
    let (_stamp, rest) = split_stamp(decorated);
    assert_eq!(rest, "boom\n");
}

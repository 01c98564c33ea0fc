//! Integration tests for the tracing bridge (feature `tracing`).
//!
//! Events emitted through the standard `tracing` macros must come out of
//! the duolog streams with the same routing and templates as direct
//! emission.

#![cfg(feature = "tracing")]

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use duolog::tracing_bridge::DuologLayer;
use duolog::{Logger, LoggerConfig, Severity};
use tracing_subscriber::layer::SubscriberExt;

/// Shared in-memory writer so the test can inspect output after the
/// subscriber takes ownership of the logger.
#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn tracing_events_flow_through_the_duolog_streams() {
    let out = SharedBuf::default();
    let err = SharedBuf::default();

    let mut logger =
        Logger::with_streams("bridge", LoggerConfig::default(), out.clone(), err.clone());
    logger.set_level(Severity::Trace);

    let subscriber = tracing_subscriber::registry().with(DuologLayer::new(logger));
    tracing::subscriber::with_default(subscriber, || {
        tracing::info!("copied a file");
        tracing::error!("lost the connection");
        tracing::debug!("retry budget {}", 3);
    });

    let standard = out.contents();
    let errors = err.contents();
    assert_eq!(
        standard,
        "INFO: bridge: copied a file\nDEBUG: bridge: retry budget 3\n"
    );
    assert_eq!(errors, "ERROR: bridge: lost the connection\n");
}

#[test]
fn bridge_respects_the_effective_level() {
    let out = SharedBuf::default();
    let err = SharedBuf::default();

    // Default gate is WARNING: INFO and below must be dropped.
    let logger = Logger::with_streams("bridge", LoggerConfig::default(), out.clone(), err.clone());

    let subscriber = tracing_subscriber::registry().with(DuologLayer::new(logger));
    tracing::subscriber::with_default(subscriber, || {
        tracing::info!("dropped");
        tracing::warn!("kept");
    });

    assert_eq!(out.contents(), "WARNING: bridge: kept\n");
    assert!(err.contents().is_empty());
}

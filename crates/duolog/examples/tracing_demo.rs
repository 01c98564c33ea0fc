//! Demonstrates routing standard tracing macros through duolog.
//!
//! Run with: `cargo run -p duolog --example tracing_demo --features tracing`

use duolog::{Severity, get_logger, setup_parallel, tracing_bridge};

fn main() {
    // Tag every line with the process id, as a multi-process run would.
    setup_parallel();
    let mut logger = get_logger("demo");
    logger.set_level(Severity::Debug);
    tracing_bridge::init_tracing(logger);

    tracing::info!("starting up");
    tracing::debug!("loaded {} targets", 4);
    tracing::warn!("target list is stale");
    tracing::error!("giving up on target {}", "alpha");
    tracing::trace!("not emitted at DEBUG");
}

//! Browser console logging

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_web::MakeWebConsoleWriter;

/// Install a `tracing` subscriber that writes to the browser console.
///
/// Safe to call more than once; later calls are ignored.
pub fn init() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    // No timer: `SystemTime` is unavailable on wasm32-unknown-unknown
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new())
        .with_filter(level);

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}

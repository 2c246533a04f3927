//! Diagnostics go to stderr so stdout stays clean for JSON output.
//!
//! Filter with `RUST_LOG`, e.g. `RUST_LOG=heatmask=debug` or
//! `RUST_LOG=heatmask::interaction=trace`. Defaults to `warn`.

use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(filter);

    tracing_subscriber::registry().with(console_layer).init();
}

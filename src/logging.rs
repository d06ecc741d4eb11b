//! Tracing subscriber setup.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install a compact stderr subscriber. `RUST_LOG` wins over the `-v` count.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

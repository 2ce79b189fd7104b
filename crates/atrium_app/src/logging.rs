//! Logging setup

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global `tracing` subscriber
///
/// `RUST_LOG` wins when set; otherwise `debug` when verbose, else `info`.
/// Calling this twice is harmless.
pub fn init(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let installed = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .try_init();

    if installed.is_err() {
        tracing::debug!("logging::init - subscriber already installed");
    }
}

//! Logging to the javascript console.

use tracing_subscriber::{EnvFilter, prelude::*};
use tracing_web::MakeWebConsoleWriter;

const DEFAULT_FILTER: &str = "error,isukuhub_ui=debug,isukuhub_model=debug";

/// Initialize logging and route panics through `tracing`.
///
/// Safe to call more than once; only the first call installs anything.
pub fn init_logging() {
    let env_filter = EnvFilter::new(DEFAULT_FILTER);

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_ansi(false) // Only partially supported across browsers
        .without_time() // std::time is not available in browsers
        .with_writer(MakeWebConsoleWriter::new().with_pretty_level())
        .with_level(false);

    if tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        return;
    }

    std::panic::set_hook(Box::new(|info| {
        tracing::error!(%info, "panic while rendering");
    }));

    tracing::info!("Initialized logs");
}

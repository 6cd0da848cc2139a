#[cfg(feature = "ssr")]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Compact stderr logging for the server. `RUST_LOG` overrides the default
/// filter. Records from the `log` macros in shared code are bridged in.
#[cfg(feature = "ssr")]
pub fn init_server_logger() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("portfolio=info,info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .compact(),
        )
        .init();
}

#[cfg(feature = "hydrate")]
pub fn init_browser_logger() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Warn
    };
    // fails only if a logger is already installed
    let _ = console_log::init_with_level(level);
}

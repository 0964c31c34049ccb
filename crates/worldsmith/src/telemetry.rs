//! Logging setup.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use worldsmith_error::{ConfigError, WorldsmithResult};

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins when set. Otherwise the level is `info`, or `debug` for
/// the worldsmith crates when `verbose` is on. `json` switches to one JSON
/// object per event.
///
/// # Errors
///
/// Returns [`ConfigError`] if a subscriber is already installed.
pub fn init_logging(verbose: bool, json: bool) -> WorldsmithResult<()> {
    let default_directive = if verbose {
        "info,worldsmith=debug,worldsmith_models=debug,worldsmith_narrative=debug,worldsmith_export=debug"
    } else {
        "info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(false))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(false))
            .try_init()
    };
    result.map_err(|e| ConfigError::new(format!("Failed to initialize logging: {}", e)).into())
}

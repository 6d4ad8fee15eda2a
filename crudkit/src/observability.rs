//! Tracing setup

use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Install a JSON `fmt` subscriber filtered by `service.log_level`
///
/// An unparsable level falls back to `info`. Calling this again once a
/// global subscriber is installed leaves the existing one in place.
pub fn init_tracing(config: &Config) {
    let log_level = config.service.log_level.clone();

    let installed = tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init();

    match installed {
        Ok(()) => tracing::info!("Tracing initialized for service: {}", config.service.name),
        Err(_) => tracing::debug!("Global tracing subscriber already set"),
    }
}

//! Build-time API configuration for the browser client.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use cerebrum::config::{ClientConfig, DEFAULT_BASE_URL};

/// API root baked in at build time via `CEREBRUM_API_BASE_URL`.
const BUILD_BASE_URL: Option<&str> = option_env!("CEREBRUM_API_BASE_URL");

/// Config for the API the bundle was built against.
///
/// Falls back to the default root if the build-time value is invalid.
pub fn client_config() -> ClientConfig {
    config_for(BUILD_BASE_URL)
}

fn config_for(base_url: Option<&str>) -> ClientConfig {
    let raw = base_url.unwrap_or(DEFAULT_BASE_URL);
    match ClientConfig::new(raw) {
        Ok(config) => config,
        Err(e) => {
            leptos::logging::warn!("ignoring CEREBRUM_API_BASE_URL: {e}");
            ClientConfig::default()
        }
    }
}

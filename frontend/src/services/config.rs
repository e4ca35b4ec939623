use anyhow::{bail, Context, Result};
use gloo::net::http::Request;
use shared::config::{CONFIG_URL, DEV_CONFIG_URL};
use shared::AppConfig;
use tracing::{info, warn};

/// Values baked in at build time, used when no config file is usable
fn fallback_config() -> AppConfig {
    AppConfig::from_parts(
        option_env!("BARBERSHOP_API_URL"),
        option_env!("BARBERSHOP_API_USERNAME"),
        option_env!("BARBERSHOP_API_PASSWORD"),
    )
}

/// Load the runtime configuration. Never fails: every problem degrades to
/// the build-time fallback.
pub async fn load_config() -> AppConfig {
    if cfg!(debug_assertions) {
        match fetch_config(DEV_CONFIG_URL).await {
            Ok(config) => {
                info!(component = "config", "Development configuration loaded");
                return config;
            }
            Err(err) => warn!(
                component = "config",
                error = %err,
                "Development configuration not found, using default file"
            ),
        }
    }

    match fetch_config(CONFIG_URL).await {
        Ok(config) => {
            if !config.has_credentials() {
                warn!(component = "config", "Configuration has empty credentials, using build-time values");
            }
            config.or_fallback(fallback_config())
        }
        Err(err) => {
            warn!(component = "config", error = %err, "Configuration file unavailable, using build-time values");
            fallback_config()
        }
    }
}

async fn fetch_config(url: &str) -> Result<AppConfig> {
    let response = Request::get(url)
        .send()
        .await
        .with_context(|| format!("failed to request {}", url))?;

    if !response.ok() {
        bail!("{} responded with status {}", url, response.status());
    }

    let text = response
        .text()
        .await
        .with_context(|| format!("failed to read {}", url))?;
    AppConfig::from_json(&text).with_context(|| format!("failed to parse {}", url))
}

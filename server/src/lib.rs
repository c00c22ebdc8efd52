//! Serves a single broadcaster's Twitch schedule, with category box art,
//! as JSON for the web front-end.

pub mod app;
pub mod config;
pub mod server;

use config::AppConfig;

/// Load .env from multiple candidate paths.
fn load_dotenv() {
    let candidates = [".env", "../.env"];
    for path in &candidates {
        if dotenvy::from_filename(path).is_ok() {
            tracing::info!("Loaded .env from: {path}");
            return;
        }
    }
    tracing::info!("No .env file found, using system environment variables");
}

/// Load .env, then read and validate the runtime config.
pub fn init_config() -> Result<AppConfig, anyhow::Error> {
    load_dotenv();

    let config = AppConfig::from_env()?;
    tracing::info!(
        channel = %config.channel_name,
        api_base_url = %config.twitch.api_base_url,
        timeout_secs = config.twitch.request_timeout.as_secs(),
        "Settings loaded (addr={})",
        config.bind_addr()
    );
    Ok(config)
}

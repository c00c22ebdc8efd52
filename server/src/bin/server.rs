//! Headless server binary.
//!
//! Loads configuration, starts the axum web server, and stops on Ctrl+C.

use tracing_subscriber::EnvFilter;

use schedule_server_lib::app::SharedState;
use schedule_server_lib::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting schedule server");

    let config = schedule_server_lib::init_config()?;
    let state = SharedState::new(config)?;

    server::start_server(state).await?;

    tracing::info!("Server stopped");
    Ok(())
}

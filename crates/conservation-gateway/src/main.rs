//! Conservation Gateway - IUCN Red List proxy
//!
//! Exposes region listings, species-by-region, per-species conservation
//! measures and a condensed regional preview.

mod config;
mod error;
mod gateway;
mod server;
#[cfg(test)]
mod test_support;
mod types;

use crate::config::Config;
use crate::error::{GatewayError, Result};
use crate::gateway::ConservationGateway;
use crate::server::{start_server, ServerState, SharedState};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let env_filter =
        EnvFilter::from_default_env().add_directive("conservation_gateway=info".parse()?);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_stackdriver::layer())
        .init();

    info!("Starting Conservation Gateway...");

    let config = Config::from_env()?;
    info!(
        port = config.port,
        upstream = %config.api_url,
        measure_fetch_limit = config.measure_fetch_limit,
        "Loaded configuration"
    );

    let gateway = ConservationGateway::new(&config.gateway_config())?;
    let state: SharedState = Arc::new(ServerState::new(gateway));

    start_server(state, config.port)
        .await
        .map_err(|e| GatewayError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

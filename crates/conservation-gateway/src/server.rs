//! HTTP server exposing the gateway operations

use crate::error::{GatewayError, Result};
use crate::gateway::ConservationGateway;
use crate::types::{HealthResponse, PreviewResponse};
use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
use redlist_api::{IucnCategory, MeasureRecord, RegionList, SpeciesByRegion};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

/// Shared state for the HTTP server
pub struct ServerState {
    pub gateway: ConservationGateway,
    pub started_at: DateTime<Utc>,
}

impl ServerState {
    pub fn new(gateway: ConservationGateway) -> Self {
        Self {
            gateway,
            started_at: Utc::now(),
        }
    }
}

pub type SharedState = Arc<ServerState>;

#[derive(Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    page: u32,
}

#[derive(Deserialize)]
pub struct PreviewQuery {
    #[serde(default)]
    page: u32,
    #[serde(default)]
    category: Option<String>,
}

#[derive(Deserialize)]
pub struct MeasuresQuery {
    #[serde(default)]
    region: Option<String>,
}

/// Create the HTTP router
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/regions", get(list_regions))
        .route("/regions/{region}/species", get(list_species))
        .route("/regions/{region}/preview", get(preview))
        .route("/species/{id}/measures", get(species_measures))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the HTTP server
pub async fn start_server(state: SharedState, port: u16) -> std::io::Result<()> {
    let router = create_router(state);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    info!("Starting HTTP server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await
}

/// Health check endpoint
async fn health(State(state): State<SharedState>) -> Json<HealthResponse> {
    let uptime_secs = (Utc::now() - state.started_at).num_seconds() as u64;

    Json(HealthResponse {
        status: "ok".to_string(),
        uptime_secs,
        upstream: state.gateway.upstream_url().to_string(),
        measure_fetch_limit: state.gateway.measure_fetch_limit(),
    })
}

async fn list_regions(State(state): State<SharedState>) -> Result<Json<RegionList>> {
    Ok(Json(state.gateway.list_regions().await?))
}

async fn list_species(
    State(state): State<SharedState>,
    Path(region): Path<String>,
    Query(params): Query<PageQuery>,
) -> Result<Json<SpeciesByRegion>> {
    Ok(Json(
        state
            .gateway
            .list_species_by_region(&region, params.page)
            .await?,
    ))
}

async fn species_measures(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Query(params): Query<MeasuresQuery>,
) -> Result<Json<MeasureRecord>> {
    let region = params
        .region
        .filter(|r| !r.is_empty())
        .ok_or_else(|| GatewayError::BadRequest("region is required".into()))?;

    Ok(Json(
        state
            .gateway
            .fetch_conservation_measures(&id, &region)
            .await?,
    ))
}

async fn preview(
    State(state): State<SharedState>,
    Path(region): Path<String>,
    Query(params): Query<PreviewQuery>,
) -> Result<Json<PreviewResponse>> {
    let category = match params.category.as_deref() {
        None => IucnCategory::CR,
        Some(code) => IucnCategory::from_str(code)
            .ok_or_else(|| GatewayError::BadRequest(format!("Unknown category: {}", code)))?,
    };

    Ok(Json(
        state
            .gateway
            .build_preview(&region, params.page, category)
            .await?,
    ))
}

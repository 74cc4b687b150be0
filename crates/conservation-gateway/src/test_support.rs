//! In-process stand-in for the Red List API used by unit tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use crate::gateway::{ConservationGateway, GatewayConfig};

pub const TEST_TOKEN: &str = "test-token";

struct StubState {
    species: Vec<(String, String)>,
    fail_measures: bool,
    requests: Mutex<Vec<String>>,
    measure_fetches: AtomicUsize,
}

type Shared = Arc<StubState>;

/// Serves canned region, species and measure payloads on a random local port
pub struct StubUpstream {
    pub base_url: String,
    state: Shared,
}

impl StubUpstream {
    /// `species` is a list of (taxonid, category) returned for every region
    pub async fn start(species: &[(&str, &str)]) -> Self {
        Self::spawn(species, false).await
    }

    /// Like `start`, but every measures request answers 502
    pub async fn failing_measures(species: &[(&str, &str)]) -> Self {
        Self::spawn(species, true).await
    }

    async fn spawn(species: &[(&str, &str)], fail_measures: bool) -> Self {
        let state = Arc::new(StubState {
            species: species
                .iter()
                .map(|(id, category)| (id.to_string(), category.to_string()))
                .collect(),
            fail_measures,
            requests: Mutex::new(Vec::new()),
            measure_fetches: AtomicUsize::new(0),
        });

        let router = Router::new()
            .route("/region/list", get(regions))
            .route("/species/region/{region}/page/{page}", get(species_page))
            .route("/measures/species/id/{id}/region/{region}", get(measures))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    pub fn gateway(&self) -> ConservationGateway {
        ConservationGateway::new(&GatewayConfig::new(&self.base_url, TEST_TOKEN)).unwrap()
    }

    pub fn gateway_with_limit(&self, limit: usize) -> ConservationGateway {
        let mut config = GatewayConfig::new(&self.base_url, TEST_TOKEN);
        config.measure_fetch_limit = limit;
        ConservationGateway::new(&config).unwrap()
    }

    /// Request URIs (path and query) in arrival order
    pub fn requests(&self) -> Vec<String> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn measure_fetches(&self) -> usize {
        self.state.measure_fetches.load(Ordering::SeqCst)
    }
}

fn record(state: &StubState, uri: &Uri) {
    state.requests.lock().unwrap().push(uri.to_string());
}

async fn regions(State(state): State<Shared>, uri: Uri) -> Response {
    record(&state, &uri);
    Json(json!({
        "count": 2,
        "results": [
            {"name": "Europe", "identifier": "europe"},
            {"name": "North America", "identifier": "north_america"}
        ]
    }))
    .into_response()
}

async fn species_page(
    State(state): State<Shared>,
    Path((region, page)): Path<(String, String)>,
    uri: Uri,
) -> Response {
    record(&state, &uri);
    let result: Vec<_> = state
        .species
        .iter()
        .map(|(id, category)| {
            json!({
                "taxonid": id.parse::<u64>().ok(),
                "scientific_name": format!("Species {}", id),
                "kingdom_name": "ANIMALIA",
                "category": category,
            })
        })
        .collect();

    Json(json!({
        "count": result.len(),
        "region_identifier": region,
        "page": page,
        "result": result,
    }))
    .into_response()
}

async fn measures(
    State(state): State<Shared>,
    Path((id, region)): Path<(String, String)>,
    uri: Uri,
) -> Response {
    record(&state, &uri);
    state.measure_fetches.fetch_add(1, Ordering::SeqCst);

    if state.fail_measures {
        return (StatusCode::BAD_GATEWAY, "Bad Gateway").into_response();
    }

    Json(json!({
        "id": id,
        "region_identifier": region,
        "result": [
            {"code": "1.1", "title": format!("Measure {}a", id)},
            {"code": "2.1", "title": format!("Measure {}b", id)}
        ]
    }))
    .into_response()
}

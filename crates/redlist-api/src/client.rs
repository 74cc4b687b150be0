//! Red List API HTTP client

use crate::error::{RemoteApiError, Result};
use crate::types::*;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Path of the region listing endpoint
pub const REGION_LIST_PATH: &str = "/region/list";
/// Prefix of the species-by-region endpoint; region and page segments follow
pub const REGION_SPECIES_PATH: &str = "/species/region/";
/// Template of the per-species conservation measures endpoint
pub const SPECIES_MEASURES_PATH: &str = "/measures/species/id/{id}/region/{region}";

/// Build the species listing path for one region page
pub fn species_by_region_path(region: &str, page: u32) -> String {
    format!(
        "{}{}/page/{}",
        REGION_SPECIES_PATH,
        urlencoding::encode(region),
        page
    )
}

/// Build the conservation measures path for a species in a region
pub fn species_measures_path(species_id: &str, region: &str) -> String {
    SPECIES_MEASURES_PATH
        .replace("{id}", &urlencoding::encode(species_id))
        .replace("{region}", &urlencoding::encode(region))
}

/// Client for the IUCN Red List conservation data API
///
/// Every request carries the access token as a `token` query parameter.
/// Responses are decoded as-is; there is no retry or caching at this layer.
pub struct RedListClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl RedListClient {
    /// Public Red List API v3
    pub const DEFAULT_BASE_URL: &'static str = "https://apiv3.iucnredlist.org/api/v3";

    /// Create a client with the default 30 second timeout
    pub fn new(base_url: &str, token: &str) -> Result<Self> {
        Self::with_timeout(base_url, token, Duration::from_secs(30))
    }

    /// Create a client with a custom request timeout
    pub fn with_timeout(base_url: &str, token: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List all regions known to the API
    pub async fn list_regions(&self) -> Result<RegionList> {
        self.get_json(REGION_LIST_PATH).await
    }

    /// List the species assessed in a region, one page at a time
    pub async fn species_by_region(&self, region: &str, page: u32) -> Result<SpeciesByRegion> {
        self.get_json(&species_by_region_path(region, page)).await
    }

    /// Get the conservation measures recorded for a species in a region
    pub async fn species_measures(&self, species_id: &str, region: &str) -> Result<MeasureRecord> {
        self.get_json(&species_measures_path(species_id, region))
            .await
    }

    fn url_with_token(&self, path: &str) -> String {
        format!(
            "{}{}?token={}",
            self.base_url,
            path,
            urlencoding::encode(&self.token)
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.http.get(self.url_with_token(path)).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteApiError::Status {
                status,
                path: path.to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

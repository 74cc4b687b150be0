//! Conservation data gateway: Red List lookups and the regional preview

use std::time::Duration;

use redlist_api::{
    IucnCategory, MeasureRecord, RedListClient, RegionList, Result, Species, SpeciesByRegion,
};
use tracing::{debug, info};

use crate::types::PreviewResponse;

/// Measure fetches per preview; the upstream measures endpoint returns
/// intermittent 502s when queried for more species in one go.
pub const DEFAULT_MEASURE_FETCH_LIMIT: usize = 2;

/// Species listing page actually requested upstream, whatever page the caller asks for.
pub const REQUESTED_PAGE: u32 = 0;

/// Category the preview filters on, whatever category the caller asks for.
pub const PREVIEW_CATEGORY: IucnCategory = IucnCategory::CR;

/// Settings injected into the gateway at construction
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub api_url: String,
    pub token: String,
    pub timeout: Duration,
    pub measure_fetch_limit: usize,
}

impl GatewayConfig {
    pub fn new(api_url: &str, token: &str) -> Self {
        Self {
            api_url: api_url.to_string(),
            token: token.to_string(),
            timeout: Duration::from_secs(30),
            measure_fetch_limit: DEFAULT_MEASURE_FETCH_LIMIT,
        }
    }
}

/// Keep the species whose category code equals `category_code` exactly
pub fn filter_by_category(species: &[Species], category_code: &str) -> Vec<Species> {
    species
        .iter()
        .filter(|s| s.category == category_code)
        .cloned()
        .collect()
}

pub struct ConservationGateway {
    client: RedListClient,
    measure_fetch_limit: usize,
}

impl ConservationGateway {
    pub fn new(config: &GatewayConfig) -> Result<Self> {
        let client = RedListClient::with_timeout(&config.api_url, &config.token, config.timeout)?;

        Ok(Self {
            client,
            measure_fetch_limit: config.measure_fetch_limit,
        })
    }

    pub fn upstream_url(&self) -> &str {
        self.client.base_url()
    }

    pub fn measure_fetch_limit(&self) -> usize {
        self.measure_fetch_limit
    }

    pub async fn list_regions(&self) -> Result<RegionList> {
        let regions = self.client.list_regions().await?;
        info!(count = regions.count, "Available regions");
        Ok(regions)
    }

    /// List species for a region. `page` is reported but page 0 is always fetched.
    pub async fn list_species_by_region(&self, region: &str, page: u32) -> Result<SpeciesByRegion> {
        let species = self.client.species_by_region(region, REQUESTED_PAGE).await?;
        info!(count = species.count, region, page, "Available species for region");
        Ok(species)
    }

    pub async fn fetch_conservation_measures(
        &self,
        species_id: &str,
        region: &str,
    ) -> Result<MeasureRecord> {
        let record = self.client.species_measures(species_id, region).await?;
        debug!(
            species_id,
            region,
            measures = record.result.len(),
            "Fetched conservation measures"
        );
        Ok(record)
    }

    /// Summarise the conservation measures of critically endangered species in a region.
    ///
    /// Only [`PREVIEW_CATEGORY`] is ever selected; `category_filter` shows up in
    /// the logs and nowhere else. Measures are fetched one species at a time,
    /// in listing order, and at most `measure_fetch_limit` species are queried.
    /// The first failing call aborts the preview.
    pub async fn build_preview(
        &self,
        region: &str,
        page: u32,
        category_filter: IucnCategory,
    ) -> Result<PreviewResponse> {
        let listing = self.list_species_by_region(region, page).await?;

        let filtered = filter_by_category(&listing.result, PREVIEW_CATEGORY.as_str());
        info!(
            count = filtered.len(),
            category = %category_filter,
            "Filtered species by category"
        );

        let mut records = Vec::with_capacity(filtered.len().min(self.measure_fetch_limit));
        for species in filtered.iter().take(self.measure_fetch_limit) {
            records.push(
                self.fetch_conservation_measures(&species.taxonid, region)
                    .await?,
            );
        }

        if filtered.len() > records.len() {
            debug!(
                skipped = filtered.len() - records.len(),
                limit = self.measure_fetch_limit,
                "Measure fetch limit reached"
            );
        }

        Ok(PreviewResponse::from_records(&records))
    }
}

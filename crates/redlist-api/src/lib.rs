//! Rust client for the IUCN Red List conservation data API
//!
//! This crate provides typed bindings to the Red List v3 endpoints used to
//! look up regional assessments and conservation measures.
//!
//! # Example
//!
//! ```no_run
//! use redlist_api::RedListClient;
//!
//! # async fn example() -> Result<(), redlist_api::RemoteApiError> {
//! let client = RedListClient::new(RedListClient::DEFAULT_BASE_URL, "my-token")?;
//!
//! let regions = client.list_regions().await?;
//! for region in regions.results {
//!     println!("{} ({})", region.name, region.identifier);
//! }
//!
//! let measures = client.species_measures("12392", "europe").await?;
//! println!("{}", measures.joined_titles());
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! - `GET /region/list` - List regions
//! - `GET /species/region/{region}/page/{page}` - Species assessed in a region
//! - `GET /measures/species/id/{id}/region/{region}` - Conservation measures
//!
//! All requests append the access token as `?token=...`.

mod client;
mod error;
mod types;

pub use client::{
    species_by_region_path, species_measures_path, RedListClient, REGION_LIST_PATH,
    REGION_SPECIES_PATH, SPECIES_MEASURES_PATH,
};
pub use error::{RemoteApiError, Result};
pub use types::{IucnCategory, Measure, MeasureRecord, Region, RegionList, Species, SpeciesByRegion};

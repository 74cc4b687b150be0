//! Data types for the conservation gateway

use redlist_api::MeasureRecord;
use serde::{Deserialize, Serialize};

/// One species' measures, flattened for the preview
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewEntry {
    pub id: String,
    /// Measure titles joined with ","
    pub titles: String,
}

impl From<&MeasureRecord> for PreviewEntry {
    fn from(record: &MeasureRecord) -> Self {
        Self {
            id: record.id.clone(),
            titles: record.joined_titles(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewResponse {
    pub species_measures: Vec<PreviewEntry>,
}

impl PreviewResponse {
    pub fn from_records(records: &[MeasureRecord]) -> Self {
        Self {
            species_measures: records.iter().map(PreviewEntry::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_secs: u64,
    pub upstream: String,
    pub measure_fetch_limit: usize,
}

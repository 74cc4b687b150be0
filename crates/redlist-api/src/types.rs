//! Data types for Red List API responses
//!
//! These structs mirror the upstream JSON payloads. Species records keep any
//! field we do not model in `extra` so they re-serialise unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// IUCN Red List conservation status categories
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum IucnCategory {
    /// Extinct
    EX,
    /// Extinct in the Wild
    EW,
    /// Critically Endangered
    CR,
    /// Endangered
    EN,
    /// Vulnerable
    VU,
    /// Near Threatened
    NT,
    /// Least Concern
    LC,
    /// Data Deficient
    DD,
    /// Not Evaluated
    NE,
}

impl IucnCategory {
    /// Parse an IUCN category from a string code
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "EX" => Some(Self::EX),
            "EW" => Some(Self::EW),
            "CR" => Some(Self::CR),
            "EN" => Some(Self::EN),
            "VU" => Some(Self::VU),
            "NT" => Some(Self::NT),
            "LC" => Some(Self::LC),
            "DD" => Some(Self::DD),
            "NE" => Some(Self::NE),
            _ => None,
        }
    }

    /// The code as it appears in the `category` field of species records
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EX => "EX",
            Self::EW => "EW",
            Self::CR => "CR",
            Self::EN => "EN",
            Self::VU => "VU",
            Self::NT => "NT",
            Self::LC => "LC",
            Self::DD => "DD",
            Self::NE => "NE",
        }
    }
}

impl fmt::Display for IucnCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A region the upstream API scopes species listings by
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Region {
    pub identifier: String,
    pub name: String,
}

/// Response from `/region/list`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionList {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub results: Vec<Region>,
}

/// A species assessed in a region
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Species {
    /// Upstream sends this as an integer; older payloads use a string
    #[serde(deserialize_with = "deserialize_id")]
    pub taxonid: String,
    /// Red List category code, e.g. "CR"
    #[serde(default)]
    pub category: String,
    /// Remaining descriptive fields, passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Species {
    pub fn scientific_name(&self) -> Option<&str> {
        self.extra.get("scientific_name").and_then(Value::as_str)
    }
}

/// Response from `/species/region/{region}/page/{page}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesByRegion {
    #[serde(default)]
    pub count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_identifier: Option<String>,
    /// Echoed back by the API, sometimes as a string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<Value>,
    #[serde(default)]
    pub result: Vec<Species>,
}

/// A single conservation action
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Measure {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Missing or null titles decode as ""
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub title: String,
}

/// Response from `/measures/species/id/{id}/region/{region}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasureRecord {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_identifier: Option<String>,
    #[serde(default)]
    pub result: Vec<Measure>,
}

impl MeasureRecord {
    /// All measure titles joined with a comma, in upstream order
    pub fn joined_titles(&self) -> String {
        self.result
            .iter()
            .map(|m| m.title.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}

fn deserialize_nullable_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Helper to deserialize an identifier that can be either string or number
fn deserialize_id<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};

    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or integer identifier")
        }

        fn visit_u64<E>(self, v: u64) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v.to_string())
        }

        fn visit_i64<E>(self, v: i64) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v.to_string())
        }

        fn visit_str<E>(self, v: &str) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v.to_string())
        }
    }

    deserializer.deserialize_any(IdVisitor)
}

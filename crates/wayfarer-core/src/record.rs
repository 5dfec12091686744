//! Destination records and the catalogue document
//!
//! The catalogue is read once per search from an external JSON document
//! shaped as `{ "recommendations": [Record, ...] }`. Records are never
//! mutated after parsing, only filtered.

use serde::{Deserialize, Serialize};

use crate::WayfarerResult;

/// One travel destination entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub name: String,
    pub country: String,
    pub category: String,
    pub description: String,
    pub image_url: String,
    pub price_range: String,
    pub best_time: String,
}

impl Record {
    /// The fields a keyword search looks at, in match order
    #[inline]
    pub fn searchable_fields(&self) -> [&str; 4] {
        [&self.name, &self.country, &self.category, &self.description]
    }
}

/// Parsed catalogue document
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub recommendations: Vec<Record>,
}

impl Catalog {
    /// Parse a catalogue from its JSON text
    pub fn from_json(text: &str) -> WayfarerResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Parse a catalogue from raw JSON bytes
    pub fn from_slice(bytes: &[u8]) -> WayfarerResult<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn len(&self) -> usize {
        self.recommendations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recommendations.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.recommendations
    }
}

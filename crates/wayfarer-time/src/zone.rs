//! Country → time zone table

use std::collections::HashMap;

/// Zone used for any country missing from the table
pub const UTC_ZONE: &str = "UTC";

/// Static, exact-match mapping from country name to IANA zone identifier.
/// Keys are case-sensitive as authored.
#[derive(Clone, Debug)]
pub struct TimeZoneTable {
    zones: HashMap<String, String>,
}

impl TimeZoneTable {
    /// Create an empty table; every lookup falls back to UTC
    pub fn empty() -> Self {
        TimeZoneTable {
            zones: HashMap::new(),
        }
    }

    /// Table covering the destinations in the bundled catalogue
    pub fn builtin() -> Self {
        const ZONES: &[(&str, &str)] = &[
            ("Greece", "Europe/Athens"),
            ("Japan", "Asia/Tokyo"),
            ("Canada", "America/Toronto"),
            ("Indonesia", "Asia/Jakarta"),
            ("Peru", "America/Lima"),
            ("Switzerland", "Europe/Zurich"),
            ("Maldives", "Indian/Maldives"),
            ("Cambodia", "Asia/Phnom_Penh"),
            ("United States", "America/New_York"),
            ("Myanmar", "Asia/Yangon"),
        ];

        let mut table = Self::empty();
        for (country, zone) in ZONES {
            table.insert(*country, *zone);
        }
        table
    }

    /// Map `country` to `zone`, replacing any previous entry
    pub fn insert(&mut self, country: impl Into<String>, zone: impl Into<String>) {
        self.zones.insert(country.into(), zone.into());
    }

    pub fn with_entry(mut self, country: impl Into<String>, zone: impl Into<String>) -> Self {
        self.insert(country, zone);
        self
    }

    /// Zone for `country`; unknown countries resolve to [`UTC_ZONE`]
    pub fn resolve(&self, country: &str) -> &str {
        self.zones
            .get(country)
            .map(String::as_str)
            .unwrap_or(UTC_ZONE)
    }

    pub fn contains(&self, country: &str) -> bool {
        self.zones.contains_key(country)
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

impl Default for TimeZoneTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Resolve a country with the built-in table
pub fn resolve_zone(country: &str) -> String {
    TimeZoneTable::builtin().resolve(country).to_string()
}

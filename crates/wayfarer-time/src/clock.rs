//! Clock snapshots formatted in a country's zone

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::TimeZoneTable;

/// Placeholder shown when a zone cannot be formatted
pub const NOT_AVAILABLE: &str = "N/A";

/// Weekday, month, day, then 12-hour time: `Sun, Oct 18, 3:04:05 PM`
const TIME_FORMAT: &str = "%a, %b %-d, %-I:%M:%S %p";
/// `Sun, Oct 18`
const DATE_FORMAT: &str = "%a, %b %-d";

/// Human-readable local time and date for one zone
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimeSnapshot {
    pub time: String,
    pub date: String,
    pub zone: String,
}

impl TimeSnapshot {
    /// Sentinel snapshot for a zone that could not be formatted
    pub fn unavailable(zone: impl Into<String>) -> Self {
        TimeSnapshot {
            time: NOT_AVAILABLE.to_string(),
            date: NOT_AVAILABLE.to_string(),
            zone: zone.into(),
        }
    }

    pub fn is_available(&self) -> bool {
        self.time != NOT_AVAILABLE
    }
}

/// Format `at` in `zone`. An unknown zone identifier yields the
/// [`NOT_AVAILABLE`] sentinel, never an error.
pub fn format_in_zone(zone: &str, at: DateTime<Utc>) -> TimeSnapshot {
    match zone.parse::<Tz>() {
        Ok(tz) => {
            let local = at.with_timezone(&tz);
            TimeSnapshot {
                time: local.format(TIME_FORMAT).to_string(),
                date: local.format(DATE_FORMAT).to_string(),
                zone: zone.to_string(),
            }
        }
        Err(err) => {
            tracing::warn!(zone = %zone, error = %err, "cannot format time for zone");
            TimeSnapshot::unavailable(zone)
        }
    }
}

/// Resolves countries to zones and reads the current time in them
#[derive(Clone, Debug, Default)]
pub struct WorldClock {
    zones: TimeZoneTable,
}

impl WorldClock {
    pub fn new(zones: TimeZoneTable) -> Self {
        WorldClock { zones }
    }

    pub fn zones(&self) -> &TimeZoneTable {
        &self.zones
    }

    /// Current time and date in `country`'s zone
    pub fn current_time(&self, country: &str) -> TimeSnapshot {
        self.snapshot_at(country, Utc::now())
    }

    /// Time and date in `country`'s zone at a fixed instant
    pub fn snapshot_at(&self, country: &str, at: DateTime<Utc>) -> TimeSnapshot {
        format_in_zone(self.zones.resolve(country), at)
    }
}

/// Current time in `country` using the built-in zone table
pub fn current_time(country: &str) -> TimeSnapshot {
    WorldClock::default().current_time(country)
}

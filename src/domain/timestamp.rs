//! Event timestamp type

use chrono::{DateTime, Datelike, SecondsFormat, TimeZone, Utc};
use nutype::nutype;

/// Moment at which a generated event supposedly happened
#[nutype(derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash))]
pub struct EventTime(DateTime<Utc>);

impl EventTime {
    /// Get the underlying DateTime
    pub fn into_datetime(self) -> DateTime<Utc> {
        self.into_inner()
    }

    /// RFC 3339 rendering with second precision, e.g. `2026-03-01T08:15:00Z`
    pub fn to_rfc3339(&self) -> String {
        self.into_inner().to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

/// Midnight UTC on the first of January of `reference`'s year
pub fn start_of_year(reference: DateTime<Utc>) -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(reference.year(), 1, 1, 0, 0, 0).single()
}

//! # Temporal Types: UTC-Only Timestamps
//!
//! Defines `Timestamp`, a UTC-only instant truncated to seconds precision.
//! Decision dates, notification dates, and financeability audit dates on
//! the proposition aggregate are all `Timestamp`s.
//!
//! ## Clock Injection
//!
//! Aggregate methods never call [`Timestamp::now()`] themselves; the
//! caller passes the instant in. Only the use-case layer and the CLI read
//! the wall clock, which keeps every transition deterministic under test.

use chrono::{DateTime, NaiveDate, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::OsisError;

/// A UTC-only timestamp, truncated to seconds precision.
///
/// Serialises as RFC 3339 with a `Z` suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Current UTC time, truncated to seconds.
    pub fn now() -> Self {
        Self(truncate_to_seconds(Utc::now()))
    }

    /// From a `chrono::DateTime<Utc>`, truncating sub-seconds.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(truncate_to_seconds(dt))
    }

    /// Midnight UTC at the start of a calendar day.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, OsisError> {
        Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
            .single()
            .map(Self)
            .ok_or_else(|| {
                OsisError::InvalidTimestamp(format!("{year:04}-{month:02}-{day:02}"))
            })
    }

    /// Parse an RFC 3339 string with a `Z` suffix.
    ///
    /// # Errors
    ///
    /// Rejects strings that are not RFC 3339 or that carry an explicit
    /// offset, including `+00:00`.
    pub fn parse(s: &str) -> Result<Self, OsisError> {
        if !s.ends_with('Z') {
            return Err(OsisError::InvalidTimestamp(format!(
                "timestamp must use Z suffix (UTC only), got: {s:?}"
            )));
        }
        let dt = DateTime::parse_from_rfc3339(s)
            .map_err(|e| OsisError::InvalidTimestamp(format!("{s:?}: {e}")))?;
        Ok(Self(truncate_to_seconds(dt.with_timezone(&Utc))))
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Calendar date of this instant in UTC.
    pub fn date(&self) -> NaiveDate {
        self.0.date_naive()
    }

    /// Render as ISO8601 with Z suffix (e.g. `2024-11-01T00:00:00Z`).
    pub fn to_iso8601(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

fn truncate_to_seconds(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.with_nanosecond(0).unwrap_or(dt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_has_no_subseconds() {
        let ts = Timestamp::now();
        assert_eq!(ts.as_datetime().nanosecond(), 0);
    }

    #[test]
    fn test_from_utc_truncates() {
        let dt = Utc.with_ymd_and_hms(2021, 11, 1, 12, 30, 45).unwrap();
        let ts = Timestamp::from_utc(dt.with_nanosecond(987_654_321).unwrap());
        assert_eq!(ts.to_iso8601(), "2021-11-01T12:30:45Z");
    }

    #[test]
    fn test_from_ymd_is_midnight() {
        let ts = Timestamp::from_ymd(2021, 11, 1).unwrap();
        assert_eq!(ts.to_iso8601(), "2021-11-01T00:00:00Z");
        assert_eq!(ts.date(), NaiveDate::from_ymd_opt(2021, 11, 1).unwrap());
    }

    #[test]
    fn test_from_ymd_rejects_impossible_date() {
        assert!(Timestamp::from_ymd(2021, 2, 30).is_err());
    }

    // ── parse ────────────────────────────────────────────────────────

    #[test]
    fn test_parse_z_suffix_accepted() {
        let ts = Timestamp::parse("2024-01-15T12:00:00Z").unwrap();
        assert_eq!(ts.to_string(), "2024-01-15T12:00:00Z");
    }

    #[test]
    fn test_parse_offsets_rejected() {
        assert!(Timestamp::parse("2024-01-15T12:00:00+00:00").is_err());
        assert!(Timestamp::parse("2024-01-15T12:00:00+02:00").is_err());
    }

    #[test]
    fn test_parse_garbage_rejected() {
        assert!(Timestamp::parse("demain").is_err());
        assert!(Timestamp::parse("").is_err());
    }

    #[test]
    fn test_serde_roundtrip() {
        let ts = Timestamp::parse("2024-01-15T12:00:00Z").unwrap();
        let json = serde_json::to_string(&ts).unwrap();
        let parsed: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(ts, parsed);
    }
}

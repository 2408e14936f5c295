//! Date-precision-aware timestamp wire type.
//!
//! Upstream APIs routinely mix date-only fields (`"2024-01-01"`) and
//! full-precision timestamps (`"2024-01-01T09:30:00.000125"`) in the same
//! payload. [`Timestamp`] handles both without per-field annotation: an
//! instant whose time-of-day components are all zero is written date-only,
//! anything else is written at microsecond precision, and both forms parse
//! back. All values are normalized to UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Leading text of a [`TimestampError`] message.
///
/// The decode classifier keys on this prefix to report unparseable
/// timestamp strings as corrupted data rather than a type mismatch.
pub(crate) const MALFORMED_TIMESTAMP_PREFIX: &str = "malformed timestamp";

const DATE_ONLY_FORMAT: &str = "%Y-%m-%d";
const FULL_PRECISION_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";
const FLEXIBLE_PRECISION_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// A UTC instant with dual-format wire representation.
///
/// # Example
///
/// ```
/// use pharos_codec::Timestamp;
///
/// let midnight = Timestamp::parse_wire("2024-01-01").unwrap();
/// assert_eq!(midnight.to_wire(), "2024-01-01");
///
/// let precise = Timestamp::parse_wire("2024-01-01T09:30:00.000125").unwrap();
/// assert_eq!(precise.to_wire(), "2024-01-01T09:30:00.000125");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp from a UTC datetime.
    #[must_use]
    pub const fn new(datetime: DateTime<Utc>) -> Self {
        Self(datetime)
    }

    /// Returns the underlying UTC datetime.
    #[must_use]
    pub const fn datetime(&self) -> DateTime<Utc> {
        self.0
    }

    /// Returns the wire string for this instant.
    ///
    /// Date-only (`YYYY-MM-DD`) when the time of day is exactly midnight,
    /// microsecond precision otherwise.
    #[must_use]
    pub fn to_wire(&self) -> String {
        if self.is_midnight() {
            self.0.format(DATE_ONLY_FORMAT).to_string()
        } else {
            self.0.format(FULL_PRECISION_FORMAT).to_string()
        }
    }

    /// Parses a wire string into a timestamp.
    ///
    /// Attempts date-only first, then full-precision, then RFC 3339 with an
    /// offset (normalized to UTC) for interop with conventional encoders.
    ///
    /// # Errors
    ///
    /// Returns [`TimestampError`] carrying the offending string when no
    /// format matches.
    pub fn parse_wire(value: &str) -> Result<Self, TimestampError> {
        if let Ok(date) = NaiveDate::parse_from_str(value, DATE_ONLY_FORMAT) {
            return Ok(Self(date.and_time(NaiveTime::MIN).and_utc()));
        }
        if let Ok(datetime) = NaiveDateTime::parse_from_str(value, FLEXIBLE_PRECISION_FORMAT) {
            return Ok(Self(datetime.and_utc()));
        }
        if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
            return Ok(Self(datetime.with_timezone(&Utc)));
        }
        Err(TimestampError {
            value: value.to_string(),
        })
    }

    /// Round-trips this instant through the date-only format, dropping the
    /// time of day. Useful for day-precision comparison against wire values.
    #[must_use]
    pub fn truncated_to_day(&self) -> Self {
        Self(self.0.date_naive().and_time(NaiveTime::MIN).and_utc())
    }

    /// Round-trips this instant through the full-precision format, dropping
    /// sub-microsecond resolution.
    #[must_use]
    pub fn normalized_to_micros(&self) -> Self {
        DateTime::from_timestamp_micros(self.0.timestamp_micros()).map_or(*self, Self)
    }

    fn is_midnight(&self) -> bool {
        self.0.time() == NaiveTime::MIN
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(datetime: DateTime<Utc>) -> Self {
        Self(datetime)
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(timestamp: Timestamp) -> Self {
        timestamp.0
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_wire())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_wire())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse_wire(&raw).map_err(serde::de::Error::custom)
    }
}

/// A string that matched none of the supported timestamp formats.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed timestamp \"{value}\": expected YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS.ffffff")]
pub struct TimestampError {
    /// The offending wire string.
    pub value: String,
}

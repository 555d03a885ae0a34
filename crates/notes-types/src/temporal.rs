use std::fmt;

use chrono::{DateTime, SecondsFormat, Timelike, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TypeError;

/// A UTC instant truncated to millisecond precision.
///
/// Serializes as an ISO-8601 string with exactly three fractional digits and
/// a `Z` suffix, e.g. `2024-05-01T12:00:00.000Z`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// The current wall-clock time.
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    /// Wrap a `DateTime`, dropping sub-millisecond precision.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        let millis = (dt.nanosecond() / 1_000_000) * 1_000_000;
        Self(dt.with_nanosecond(millis).unwrap_or(dt))
    }

    /// Build from milliseconds since the UNIX epoch.
    pub fn from_millis(ms: i64) -> Option<Self> {
        DateTime::from_timestamp_millis(ms).map(Self)
    }

    /// Milliseconds since the UNIX epoch.
    pub fn as_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// The current time, but never earlier than `previous`.
    ///
    /// Guards update timestamps against the wall clock stepping backwards.
    pub fn now_after(previous: &Self) -> Self {
        Self::now().max(*previous)
    }

    /// Parse an RFC 3339 / ISO-8601 string.
    pub fn parse(s: &str) -> Result<Self, TypeError> {
        DateTime::parse_from_rfc3339(s)
            .map(|dt| Self::from_datetime(dt.with_timezone(&Utc)))
            .map_err(|e| TypeError::InvalidTimestamp(format!("{s}: {e}")))
    }

    /// ISO-8601 text form.
    pub fn to_iso8601(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({})", self.to_iso8601())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso8601())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

//! Domain primitives: LogTime, DailyTarget.

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// Time a log entry was recorded, in milliseconds since Unix epoch.
///
/// Stored as an integer so that ordering in the store matches ordering here.
/// Serializes as an RFC 3339 string with millisecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LogTime(i64);

impl LogTime {
    /// Create a LogTime from milliseconds.
    pub fn new(ms: i64) -> Self {
        LogTime(ms)
    }

    /// Current server time.
    pub fn now() -> Self {
        LogTime(Utc::now().timestamp_millis())
    }

    /// Get the underlying milliseconds value.
    pub fn as_ms(&self) -> i64 {
        self.0
    }

    /// Convert to a UTC datetime. Returns None if out of chrono's range.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.0).single()
    }
}

impl std::fmt::Display for LogTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to_datetime() {
            Some(dt) => write!(f, "{}", dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
            None => write!(f, "{}", self.0),
        }
    }
}

impl Serialize for LogTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.to_datetime() {
            Some(dt) => {
                serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            None => serializer.serialize_i64(self.0),
        }
    }
}

/// Daily goal for the number of log entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DailyTarget(u32);

impl DailyTarget {
    /// Value used when no target has been stored.
    pub const DEFAULT: DailyTarget = DailyTarget(10);

    pub fn new(value: u32) -> Self {
        DailyTarget(value)
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    /// JSON text stored in the settings table.
    pub fn to_json(&self) -> String {
        self.0.to_string()
    }
}

impl Default for DailyTarget {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid target value")]
pub struct InvalidTarget;

impl TryFrom<&serde_json::Value> for DailyTarget {
    type Error = InvalidTarget;

    /// Accepts non-negative whole numbers that fit in a u32, including
    /// floats with no fractional part (`5.0`).
    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        if let Some(n) = value.as_u64() {
            return u32::try_from(n).map(DailyTarget).map_err(|_| InvalidTarget);
        }
        match value.as_f64() {
            Some(f) if f.fract() == 0.0 && f >= 0.0 && f <= u32::MAX as f64 => {
                Ok(DailyTarget(f as u32))
            }
            _ => Err(InvalidTarget),
        }
    }
}

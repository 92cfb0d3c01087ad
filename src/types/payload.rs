//! Raw response body shared by the archive, forecast and flood endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// The decoded JSON body of a daily-data response.
///
/// Only the `daily` container is kept; every other top-level key (latitude,
/// timezone, units...) is ignored. The container stays untyped here because a
/// missing or malformed series must degrade to "no data" during normalization
/// rather than failing the download.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DailyPayload {
    /// `Some(Value::Null)` for `"daily": null`, `None` when the key is absent.
    #[serde(default, deserialize_with = "present_key")]
    pub daily: Option<Value>,
}

// Only runs when the key exists, so an explicit null still counts as present.
fn present_key<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl DailyPayload {
    /// Wraps a `daily` container, mainly for building payloads by hand.
    pub fn from_daily(daily: Value) -> Self {
        Self { daily: Some(daily) }
    }

    /// Whether the payload carries a `daily` key at all.
    pub fn has_daily(&self) -> bool {
        self.daily.is_some()
    }

    fn entry(&self, key: &str) -> Option<&Vec<Value>> {
        self.daily.as_ref()?.get(key)?.as_array()
    }

    /// Parses the `time` array into dates. `None` if absent or any entry is not `YYYY-MM-DD`.
    pub fn dates(&self) -> Option<Vec<NaiveDate>> {
        self.entry("time")?
            .iter()
            .map(|v| {
                v.as_str()
                    .and_then(|s| NaiveDate::parse_from_str(s, DATE_FORMAT).ok())
            })
            .collect()
    }

    /// Reads a numeric series where `null` entries are kept as missing values.
    ///
    /// `None` if the field is absent or holds anything other than numbers and nulls.
    pub fn nullable_series(&self, field: &str) -> Option<Vec<Option<f64>>> {
        self.entry(field)?
            .iter()
            .map(|v| match v {
                Value::Null => Some(None),
                other => other.as_f64().map(Some),
            })
            .collect()
    }

    /// Reads a numeric series that must be complete: any `null` or non-number yields `None`.
    pub fn strict_series(&self, field: &str) -> Option<Vec<f64>> {
        self.entry(field)?.iter().map(Value::as_f64).collect()
    }
}

//! Defines the three daily datasets the client fetches and the columns each one
//! is normalized into.

use std::fmt;

const WEATHER_API_FIELDS: [&str; 3] = [
    "temperature_2m_max",
    "temperature_2m_min",
    "precipitation_sum",
];
const WEATHER_COLUMNS: [&str; 3] = ["tmax", "tmin", "rain"];

const FLOOD_API_FIELDS: [&str; 1] = ["river_discharge"];
const FLOOD_COLUMNS: [&str; 1] = ["discharge"];

/// One of the daily datasets behind an analysis run.
///
/// Historical weather and forecast share the same fields (°C and mm per day);
/// flood data carries a single river discharge series in m³/s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataSource {
    /// Observed daily weather over a caller-supplied date range.
    Historical,
    /// Daily weather forecast over a fixed horizon.
    Forecast,
    /// Modelled daily river discharge over a caller-supplied date range.
    Flood,
}

impl DataSource {
    /// Daily field names as the remote API expects them in the `daily` parameter.
    pub(crate) fn api_fields(&self) -> &'static [&'static str] {
        match self {
            DataSource::Historical | DataSource::Forecast => &WEATHER_API_FIELDS,
            DataSource::Flood => &FLOOD_API_FIELDS,
        }
    }

    /// Column names used in the normalized frame, index-aligned with [`Self::api_fields`].
    pub(crate) fn column_names(&self) -> &'static [&'static str] {
        match self {
            DataSource::Historical | DataSource::Forecast => &WEATHER_COLUMNS,
            DataSource::Flood => &FLOOD_COLUMNS,
        }
    }

    /// Comma-joined value for the `daily` query parameter.
    pub(crate) fn daily_param(&self) -> String {
        self.api_fields().join(",")
    }

    fn label(&self) -> &'static str {
        match self {
            DataSource::Historical => "historical weather",
            DataSource::Forecast => "forecast",
            DataSource::Flood => "flood",
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

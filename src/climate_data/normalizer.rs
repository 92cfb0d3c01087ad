//! Turns raw daily payloads into typed, date-indexed frames.
//!
//! The contract is strict-or-empty: a payload either yields a frame whose every
//! column has exactly one value per date, or it yields `None` and callers treat
//! the dataset as unavailable.

use crate::types::data_source::DataSource;
use crate::types::frames::build_daily_frame;
use crate::types::frames::flood_frame::FloodFrame;
use crate::types::frames::weather_frame::WeatherFrame;
use crate::types::payload::DailyPayload;
use log::{debug, warn};
use polars::prelude::DataFrame;

/// Normalizes `payload` into a frame with a `date` column plus the columns of `source`.
///
/// Returns `None` when the payload is absent, has no `daily` container, lacks the
/// `time` array or any requested field, contains unparseable dates or non-numeric
/// values, or when any field's length differs from the number of dates.
pub fn normalize(payload: Option<&DailyPayload>, source: DataSource) -> Option<DataFrame> {
    let payload = payload?;
    if !payload.has_daily() {
        debug!("No daily container in {} payload", source);
        return None;
    }
    let Some(dates) = payload.dates() else {
        warn!("Missing or malformed time array in {} payload", source);
        return None;
    };

    let mut columns = Vec::with_capacity(source.api_fields().len());
    for (field, column) in source.api_fields().iter().zip(source.column_names()) {
        let Some(values) = payload.nullable_series(field) else {
            warn!("Missing or non-numeric field '{}' in {} payload", field, source);
            return None;
        };
        if values.len() != dates.len() {
            warn!(
                "Field '{}' has {} values but {} dates in {} payload",
                field,
                values.len(),
                dates.len(),
                source
            );
            return None;
        }
        columns.push((*column, values));
    }

    match build_daily_frame(&dates, columns) {
        Ok(frame) => Some(frame),
        Err(e) => {
            warn!("Failed to assemble {} frame: {}", source, e);
            None
        }
    }
}

/// Normalizes a historical or forecast payload.
pub fn normalize_weather(
    payload: Option<&DailyPayload>,
    source: DataSource,
) -> Option<WeatherFrame> {
    normalize(payload, source).map(WeatherFrame::new)
}

/// Normalizes a river discharge payload.
pub fn normalize_flood(payload: Option<&DailyPayload>) -> Option<FloodFrame> {
    normalize(payload, DataSource::Flood).map(FloodFrame::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn weather_payload() -> DailyPayload {
        serde_json::from_value(json!({
            "latitude": 28.625,
            "daily": {
                "time": ["2023-01-01", "2023-01-02"],
                "temperature_2m_max": [21.4, 22.0],
                "temperature_2m_min": [8.1, null],
                "precipitation_sum": [0.0, 3.2]
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_normalizes_weather() {
        let weather = normalize_weather(Some(&weather_payload()), DataSource::Historical).unwrap();
        assert_eq!(weather.height(), 2);
        let rows = weather.rows();
        assert_eq!(rows[0].date, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
        assert_eq!(rows[0].tmax, Some(21.4));
        assert_eq!(rows[1].tmin, None);
        assert_eq!(rows[1].rain, Some(3.2));
    }

    #[test]
    fn test_absent_payload_is_empty() {
        assert!(normalize(None, DataSource::Forecast).is_none());
    }

    #[test]
    fn test_missing_daily_is_empty() {
        let payload: DailyPayload = serde_json::from_value(json!({"error": true})).unwrap();
        assert!(normalize(Some(&payload), DataSource::Historical).is_none());
    }

    #[test]
    fn test_missing_field_is_empty() {
        let payload = DailyPayload::from_daily(json!({
            "time": ["2023-01-01"],
            "temperature_2m_max": [30.0],
            "precipitation_sum": [1.0]
        }));
        assert!(normalize(Some(&payload), DataSource::Historical).is_none());
    }

    #[test]
    fn test_length_mismatch_is_rejected() {
        let payload = DailyPayload::from_daily(json!({
            "time": ["2023-01-01", "2023-01-02"],
            "temperature_2m_max": [30.0, 31.0],
            "temperature_2m_min": [20.0, 21.0],
            "precipitation_sum": [1.0]
        }));
        assert!(normalize(Some(&payload), DataSource::Historical).is_none());
    }

    #[test]
    fn test_missing_time_is_empty() {
        let payload = DailyPayload::from_daily(json!({"river_discharge": [100.0, 200.0]}));
        assert!(normalize_flood(Some(&payload)).is_none());
    }

    #[test]
    fn test_normalizes_flood() {
        let payload = DailyPayload::from_daily(json!({
            "time": ["2023-01-01", "2023-01-02", "2023-01-03"],
            "river_discharge": [100.0, 200.0, 5200.0]
        }));
        let flood = normalize_flood(Some(&payload)).unwrap();
        assert_eq!(flood.height(), 3);
        assert_eq!(flood.max_discharge(), Some(5200.0));
    }

    #[test]
    fn test_zero_rows_is_valid_but_empty() {
        let payload = DailyPayload::from_daily(json!({
            "time": [],
            "temperature_2m_max": [],
            "temperature_2m_min": [],
            "precipitation_sum": []
        }));
        let weather = normalize_weather(Some(&payload), DataSource::Forecast).unwrap();
        assert!(weather.is_empty());
    }
}

use crate::climate_data::error::ClimateDataError;
use crate::geolocation::error::GeolocationError;
use chrono::NaiveDate;
use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FarmcastError {
    #[error(transparent)]
    ClimateData(#[from] ClimateDataError),

    #[error(transparent)]
    Geolocation(#[from] GeolocationError),

    #[error("Coordinates ({lat}, {lon}) are outside the valid latitude/longitude range")]
    InvalidCoordinates { lat: f64, lon: f64 },

    #[error("Start date {start} is after end date {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("Forecast horizon of {days} days is outside the supported range 1..={max}")]
    InvalidForecastHorizon { days: u32, max: u32 },

    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Failed processing DataFrame: {0}")]
    DataFrame(#[from] PolarsError),
}

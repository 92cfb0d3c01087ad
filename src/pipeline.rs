//! The single-run analysis pipeline: fetch outcomes in, tables, counts and
//! report out.

use crate::analysis::crops::{crop_suitability, CropShare};
use crate::analysis::extremes::{classify, ExtremeCounts};
use crate::analysis::temperature_bands::{temperature_bands, BandCount};
use crate::climate_data::error::ClimateDataError;
use crate::climate_data::normalizer::{normalize_flood, normalize_weather};
use crate::error::FarmcastError;
use crate::report::Report;
use crate::types::coordinates::Coordinates;
use crate::types::data_source::DataSource;
use crate::types::date_range::DateRange;
use crate::types::frames::flood_frame::FloodFrame;
use crate::types::frames::weather_frame::WeatherFrame;
use crate::types::payload::DailyPayload;
use bon::Builder;
use chrono::NaiveDate;
use log::{info, warn};
use std::fmt;

/// Everything the caller supplies for one analysis run.
///
/// # Examples
///
/// ```
/// use farmcast::{AnalysisRequest, Coordinates, DateRange};
/// use chrono::NaiveDate;
///
/// let request = AnalysisRequest::builder()
///     .region("Delta Farm")
///     .coordinates(Coordinates::new(23.8, 90.4).unwrap())
///     .date_range(DateRange::new(
///         NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
///         NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
///     ).unwrap())
///     .build();
/// assert_eq!(request.region, "Delta Farm");
/// ```
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct AnalysisRequest {
    #[builder(into)]
    pub region: String,
    pub coordinates: Coordinates,
    pub date_range: DateRange,
}

impl AnalysisRequest {
    /// Validates raw caller input and builds a request.
    ///
    /// # Errors
    ///
    /// [`FarmcastError::InvalidCoordinates`] or [`FarmcastError::InvalidDateRange`].
    pub fn new(
        region: impl Into<String>,
        latitude: f64,
        longitude: f64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Self, FarmcastError> {
        Ok(Self {
            region: region.into(),
            coordinates: Coordinates::new(latitude, longitude)?,
            date_range: DateRange::new(start, end)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Warning,
}

/// A status message about one dataset, for display next to the report.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub source: DataSource,
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    fn success(source: DataSource, message: impl Into<String>) -> Self {
        Self {
            source,
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    fn warning(source: DataSource, message: impl Into<String>) -> Self {
        let message = message.into();
        warn!("{}", message);
        Self {
            source,
            level: NoticeLevel::Warning,
            message,
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self.level {
            NoticeLevel::Success => "✅",
            NoticeLevel::Warning => "⚠️",
        };
        write!(f, "{} {}", marker, self.message)
    }
}

/// What the flood fetch produced.
#[derive(Debug, Clone, PartialEq)]
pub enum FloodOutcome {
    Available(DailyPayload),
    /// The flood service has no discharge model covering the location.
    NoModelAvailable,
    Failed(String),
}

impl FloodOutcome {
    pub fn payload(&self) -> Option<&DailyPayload> {
        match self {
            FloodOutcome::Available(payload) => Some(payload),
            _ => None,
        }
    }
}

/// All data products of one run. Nothing here outlives the run.
#[derive(Debug, Clone)]
pub struct AnalysisRun {
    pub request: AnalysisRequest,
    pub historical: Option<WeatherFrame>,
    pub forecast: Option<WeatherFrame>,
    pub flood: FloodOutcome,
    /// Date-indexed discharge for charting; `None` if the payload had no usable `time` array.
    pub flood_frame: Option<FloodFrame>,
    pub extremes: ExtremeCounts,
    /// Historical days per max-temperature band; `None` without historical data.
    pub temperature_bands: Option<Vec<BandCount>>,
    pub crop_suitability: Option<Vec<CropShare>>,
    pub notices: Vec<Notice>,
    pub report: Report,
}

/// Status wording for one weather fetch.
struct WeatherMessages {
    fetched: &'static str,
    error_prefix: &'static str,
}

const HISTORICAL_MESSAGES: WeatherMessages = WeatherMessages {
    fetched: "Historical weather data fetched",
    error_prefix: "Weather API error",
};

const FORECAST_MESSAGES: WeatherMessages = WeatherMessages {
    fetched: "Forecast data fetched",
    error_prefix: "Forecast API error",
};

fn weather_outcome(
    source: DataSource,
    messages: &WeatherMessages,
    fetched: Result<DailyPayload, ClimateDataError>,
    notices: &mut Vec<Notice>,
) -> Option<WeatherFrame> {
    let error_prefix = messages.error_prefix;
    match fetched {
        Ok(payload) => match normalize_weather(Some(&payload), source) {
            Some(frame) => {
                notices.push(Notice::success(source, messages.fetched));
                Some(frame)
            }
            None => {
                notices.push(Notice::warning(
                    source,
                    format!("{}: response had no usable daily series", error_prefix),
                ));
                None
            }
        },
        Err(e) => {
            notices.push(Notice::warning(source, format!("{}: {}", error_prefix, e)));
            None
        }
    }
}

fn flood_outcome(
    fetched: Result<DailyPayload, ClimateDataError>,
    notices: &mut Vec<Notice>,
) -> FloodOutcome {
    match fetched {
        Ok(payload) => {
            notices.push(Notice::success(DataSource::Flood, "Flood risk data fetched"));
            FloodOutcome::Available(payload)
        }
        Err(e) if e.is_no_model_available() => {
            notices.push(Notice::warning(
                DataSource::Flood,
                format!("Flood API unavailable → {}", e),
            ));
            FloodOutcome::NoModelAvailable
        }
        Err(e) => {
            let reason = format!("Flood API failed: {}", e);
            notices.push(Notice::warning(
                DataSource::Flood,
                format!("Flood API unavailable → {}", reason),
            ));
            FloodOutcome::Failed(reason)
        }
    }
}

/// Turns the three fetch results into a finished run.
///
/// Each result degrades on its own: a failed or malformed dataset only removes
/// the products that depend on it.
pub fn assemble(
    request: AnalysisRequest,
    forecast_days: u32,
    historical: Result<DailyPayload, ClimateDataError>,
    forecast: Result<DailyPayload, ClimateDataError>,
    flood: Result<DailyPayload, ClimateDataError>,
) -> AnalysisRun {
    let mut notices = Vec::with_capacity(3);
    let historical = weather_outcome(
        DataSource::Historical,
        &HISTORICAL_MESSAGES,
        historical,
        &mut notices,
    );
    let forecast = weather_outcome(
        DataSource::Forecast,
        &FORECAST_MESSAGES,
        forecast,
        &mut notices,
    );
    let flood = flood_outcome(flood, &mut notices);
    let flood_frame = normalize_flood(flood.payload());

    let extremes = classify(historical.as_ref());
    let bands = historical
        .as_ref()
        .filter(|w| !w.is_empty())
        .map(temperature_bands);
    let crops = crop_suitability(historical.as_ref());

    let report = Report::generate()
        .region(&request.region)
        .date_range(request.date_range)
        .maybe_historical(historical.as_ref())
        .maybe_forecast(forecast.as_ref())
        .extremes(extremes)
        .maybe_flood(flood.payload())
        .forecast_days(forecast_days)
        .call();

    info!(
        "Analysis for '{}' finished with {} report sections",
        request.region,
        report.sections.len()
    );

    AnalysisRun {
        request,
        historical,
        forecast,
        flood,
        flood_frame,
        extremes,
        temperature_bands: bands,
        crop_suitability: crops,
        notices,
        report,
    }
}

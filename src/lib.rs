mod analysis;
mod climate_data;
mod config;
mod error;
mod farmcast;
mod geolocation;
mod pipeline;
mod report;
mod types;

pub use error::FarmcastError;
pub use farmcast::*;

pub use config::{
    ClientConfig, DEFAULT_ARCHIVE_URL, DEFAULT_FLOOD_URL, DEFAULT_FORECAST_DAYS,
    DEFAULT_FORECAST_URL, DEFAULT_GEOLOCATION_URL, MAX_FORECAST_DAYS,
};
pub use pipeline::{assemble, AnalysisRequest, AnalysisRun, FloodOutcome, Notice, NoticeLevel};

pub use types::coordinates::Coordinates;
pub use types::data_source::DataSource;
pub use types::date_range::DateRange;
pub use types::payload::DailyPayload;
pub use types::frames::DATE_COLUMN;
pub use types::frames::flood_frame::{FloodFrame, FloodRow, DISCHARGE_COLUMN};
pub use types::frames::weather_frame::{
    WeatherFrame, WeatherRow, RAIN_COLUMN, TMAX_COLUMN, TMIN_COLUMN,
};

pub use analysis::crops::{crop_suitability, recommend_crop, recommend_for, Crop, CropShare};
pub use analysis::extremes::{
    classify, ExtremeCounts, DROUGHT_RAIN_MM, HEATWAVE_TMAX_C, HEAVY_RAIN_MM,
};
pub use analysis::flood_risk::{DischargeStats, FloodRisk};
pub use analysis::temperature_bands::{temperature_bands, BandCount, TemperatureBand};

pub use climate_data::error::ClimateDataError;
pub use climate_data::normalizer::{normalize, normalize_flood, normalize_weather};

pub use geolocation::error::GeolocationError;
pub use geolocation::locator::ResolvedLocation;

pub use report::{Report, ReportSection, SectionKind};

//! Endpoint and timeout settings for a [`crate::Farmcast`] client.

use bon::Builder;
use std::time::Duration;

pub const DEFAULT_GEOLOCATION_URL: &str = "https://ipapi.co/json/";
pub const DEFAULT_ARCHIVE_URL: &str = "https://archive-api.open-meteo.com/v1/archive";
pub const DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
pub const DEFAULT_FLOOD_URL: &str = "https://flood-api.open-meteo.com/v1/flood";

/// Forecast horizon used when none is configured, in days.
pub const DEFAULT_FORECAST_DAYS: u32 = 14;
/// Longest horizon the forecast endpoint serves, in days.
pub const MAX_FORECAST_DAYS: u32 = 16;

const DEFAULT_GEOLOCATION_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// Settings shared by every request a client makes.
///
/// All fields have defaults, so `ClientConfig::default()` talks to the public
/// Open-Meteo and ipapi services. Override individual fields through the builder.
///
/// # Examples
///
/// ```
/// use farmcast::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::builder()
///     .forecast_days(7)
///     .request_timeout(Duration::from_secs(5))
///     .build();
/// assert_eq!(config.forecast_days, 7);
/// assert_eq!(config.flood_url, farmcast::DEFAULT_FLOOD_URL);
/// ```
#[derive(Debug, Clone, Builder)]
pub struct ClientConfig {
    /// IP-geolocation endpoint returning `latitude`, `longitude` and optionally `city`.
    #[builder(into, default = DEFAULT_GEOLOCATION_URL.to_string())]
    pub geolocation_url: String,
    /// Historical weather endpoint.
    #[builder(into, default = DEFAULT_ARCHIVE_URL.to_string())]
    pub archive_url: String,
    /// Forecast endpoint.
    #[builder(into, default = DEFAULT_FORECAST_URL.to_string())]
    pub forecast_url: String,
    /// River discharge endpoint.
    #[builder(into, default = DEFAULT_FLOOD_URL.to_string())]
    pub flood_url: String,
    #[builder(default = DEFAULT_GEOLOCATION_TIMEOUT)]
    pub geolocation_timeout: Duration,
    /// Timeout applied to each of the three data requests.
    #[builder(default = DEFAULT_REQUEST_TIMEOUT)]
    pub request_timeout: Duration,
    /// Forecast horizon in days, `1..=MAX_FORECAST_DAYS`.
    #[builder(default = DEFAULT_FORECAST_DAYS)]
    pub forecast_days: u32,
    #[builder(into, default = default_user_agent())]
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

use crate::climate_data::error::ClimateDataError;
use crate::config::ClientConfig;
use crate::types::coordinates::Coordinates;
use crate::types::data_source::DataSource;
use crate::types::date_range::DateRange;
use crate::types::payload::DailyPayload;
use chrono::NaiveDate;
use log::{debug, info, warn};
use reqwest::{Client, StatusCode};
use serde::Serialize;

const TIMEZONE_AUTO: &str = "auto";

#[derive(Debug, Serialize)]
struct RangeQuery {
    latitude: f64,
    longitude: f64,
    start_date: NaiveDate,
    end_date: NaiveDate,
    daily: String,
    timezone: &'static str,
}

impl RangeQuery {
    fn new(source: DataSource, location: Coordinates, period: DateRange) -> Self {
        Self {
            latitude: location.latitude(),
            longitude: location.longitude(),
            start_date: period.start(),
            end_date: period.end(),
            daily: source.daily_param(),
            timezone: TIMEZONE_AUTO,
        }
    }
}

#[derive(Debug, Serialize)]
struct ForecastQuery {
    latitude: f64,
    longitude: f64,
    daily: String,
    forecast_days: u32,
    timezone: &'static str,
}

/// Issues the three daily-data requests. Each call is a single request bounded by
/// the configured timeout; nothing is retried or cached.
pub struct ClimateFetcher {
    client: Client,
    config: ClientConfig,
}

impl ClimateFetcher {
    pub fn new(client: Client, config: ClientConfig) -> Self {
        Self { client, config }
    }

    pub async fn historical(
        &self,
        location: Coordinates,
        period: DateRange,
    ) -> Result<DailyPayload, ClimateDataError> {
        let query = RangeQuery::new(DataSource::Historical, location, period);
        self.get_daily(DataSource::Historical, &self.config.archive_url, &query)
            .await
    }

    pub async fn forecast(
        &self,
        location: Coordinates,
        days: u32,
    ) -> Result<DailyPayload, ClimateDataError> {
        let query = ForecastQuery {
            latitude: location.latitude(),
            longitude: location.longitude(),
            daily: DataSource::Forecast.daily_param(),
            forecast_days: days,
            timezone: TIMEZONE_AUTO,
        };
        self.get_daily(DataSource::Forecast, &self.config.forecast_url, &query)
            .await
    }

    /// Fetches river discharge. A 404 is reported as
    /// [`ClimateDataError::NoModelAvailable`], separate from other failures.
    pub async fn flood(
        &self,
        location: Coordinates,
        period: DateRange,
    ) -> Result<DailyPayload, ClimateDataError> {
        let query = RangeQuery::new(DataSource::Flood, location, period);
        self.get_daily(DataSource::Flood, &self.config.flood_url, &query)
            .await
    }

    async fn get_daily<Q: Serialize + std::fmt::Debug>(
        &self,
        source: DataSource,
        url: &str,
        query: &Q,
    ) -> Result<DailyPayload, ClimateDataError> {
        info!("Fetching {} data from {}", source, url);
        debug!("Query for {}: {:?}", source, query);

        let response = self
            .client
            .get(url)
            .query(query)
            .timeout(self.config.request_timeout)
            .send()
            .await
            .map_err(|e| ClimateDataError::from_reqwest(url, e))?;

        if source == DataSource::Flood && response.status() == StatusCode::NOT_FOUND {
            warn!("No flood model covers the requested location ({})", url);
            return Err(ClimateDataError::NoModelAvailable {
                url: url.to_string(),
            });
        }

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(ClimateDataError::from_reqwest(url, e));
            }
        };

        let payload = response
            .json::<DailyPayload>()
            .await
            .map_err(|e| ClimateDataError::from_reqwest(url, e))?;
        info!("Received {} payload from {}", source, url);
        Ok(payload)
    }
}

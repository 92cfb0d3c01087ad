//! This module provides the main entry point: a client that resolves a location,
//! fetches the three daily datasets and runs the advisory pipeline.

use crate::climate_data::fetcher::ClimateFetcher;
use crate::config::{ClientConfig, MAX_FORECAST_DAYS};
use crate::error::FarmcastError;
use crate::geolocation::locator::{GeoLocator, ResolvedLocation};
use crate::pipeline::{assemble, AnalysisRequest, AnalysisRun};
use crate::types::coordinates::Coordinates;
use crate::types::date_range::DateRange;
use crate::types::payload::DailyPayload;
use bon::bon;
use log::info;
use reqwest::Client;

fn validate_forecast_days(days: u32) -> Result<u32, FarmcastError> {
    if days == 0 || days > MAX_FORECAST_DAYS {
        return Err(FarmcastError::InvalidForecastHorizon {
            days,
            max: MAX_FORECAST_DAYS,
        });
    }
    Ok(days)
}

/// The main client struct.
///
/// Owns one HTTP connection pool shared by the geolocation lookup and the
/// historical, forecast and flood requests. The client holds no per-run state;
/// every [`Farmcast::analyze`] call starts from scratch.
///
/// # Examples
///
/// ```no_run
/// # use farmcast::{AnalysisRequest, Farmcast, FarmcastError};
/// # use chrono::NaiveDate;
/// # #[tokio::main]
/// # async fn main() -> Result<(), FarmcastError> {
/// let client = Farmcast::new()?;
/// let request = AnalysisRequest::new(
///     "My Farm",
///     28.6139,
///     77.2090,
///     NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
/// )?;
///
/// let run = client.analyze(&request).await;
/// println!("{}", run.report);
/// # Ok(())
/// # }
/// ```
pub struct Farmcast {
    config: ClientConfig,
    locator: GeoLocator,
    fetcher: ClimateFetcher,
}

#[bon]
impl Farmcast {
    /// Creates a client talking to the public services with default timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`FarmcastError::ClientBuild`] if the HTTP client cannot be initialized.
    pub fn new() -> Result<Self, FarmcastError> {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a client with custom endpoints, timeouts or forecast horizon.
    ///
    /// # Errors
    ///
    /// Returns [`FarmcastError::InvalidForecastHorizon`] if `config.forecast_days` is
    /// outside `1..=16`, or [`FarmcastError::ClientBuild`] if the HTTP client
    /// cannot be initialized.
    pub fn with_config(config: ClientConfig) -> Result<Self, FarmcastError> {
        validate_forecast_days(config.forecast_days)?;
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(FarmcastError::ClientBuild)?;
        Ok(Self {
            locator: GeoLocator::new(
                client.clone(),
                &config.geolocation_url,
                config.geolocation_timeout,
            ),
            fetcher: ClimateFetcher::new(client, config.clone()),
            config,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Resolves the caller's position from their network origin.
    ///
    /// Returns `None` on any failure; callers should then ask for coordinates.
    pub async fn locate(&self) -> Option<ResolvedLocation> {
        self.locator.resolve().await
    }

    /// Like [`Farmcast::locate`], but reports why the lookup failed.
    ///
    /// # Errors
    ///
    /// Returns [`FarmcastError::Geolocation`] for network, status or body problems.
    pub async fn try_locate(&self) -> Result<ResolvedLocation, FarmcastError> {
        Ok(self.locator.try_resolve().await?)
    }

    /// Fetches raw daily weather observations for a date range.
    ///
    /// # Errors
    ///
    /// Returns [`FarmcastError::ClimateData`] for network, timeout, status or decoding failures.
    #[builder]
    pub async fn historical(
        &self,
        location: Coordinates,
        period: DateRange,
    ) -> Result<DailyPayload, FarmcastError> {
        Ok(self.fetcher.historical(location, period).await?)
    }

    /// Fetches the raw daily forecast.
    ///
    /// * `.days(u32)`: Optional. Horizon in days, defaults to the configured `forecast_days`.
    ///
    /// # Errors
    ///
    /// Returns [`FarmcastError::InvalidForecastHorizon`] for a horizon outside `1..=16`,
    /// or [`FarmcastError::ClimateData`] if the request fails.
    #[builder]
    pub async fn forecast(
        &self,
        location: Coordinates,
        days: Option<u32>,
    ) -> Result<DailyPayload, FarmcastError> {
        let days = validate_forecast_days(days.unwrap_or(self.config.forecast_days))?;
        Ok(self.fetcher.forecast(location, days).await?)
    }

    /// Fetches raw daily river discharge for a date range.
    ///
    /// # Errors
    ///
    /// Returns [`FarmcastError::ClimateData`] wrapping
    /// [`crate::ClimateDataError::NoModelAvailable`] when no flood model covers the
    /// location, or another variant for other failures.
    #[builder]
    pub async fn flood(
        &self,
        location: Coordinates,
        period: DateRange,
    ) -> Result<DailyPayload, FarmcastError> {
        Ok(self.fetcher.flood(location, period).await?)
    }

    /// Runs the whole pipeline for one request.
    ///
    /// The three fetches are independent and run concurrently; a failure in one
    /// never affects the others. The report is built only after all three
    /// outcomes are known. Failures show up as notices and omitted sections,
    /// never as an error.
    pub async fn analyze(&self, request: &AnalysisRequest) -> AnalysisRun {
        info!(
            "Running analysis for '{}' at {} over {} ({} days)",
            request.region,
            request.coordinates,
            request.date_range,
            request.date_range.num_days()
        );
        let (historical, forecast, flood) = tokio::join!(
            self.fetcher
                .historical(request.coordinates, request.date_range),
            self.fetcher
                .forecast(request.coordinates, self.config.forecast_days),
            self.fetcher.flood(request.coordinates, request.date_range),
        );
        assemble(
            request.clone(),
            self.config.forecast_days,
            historical,
            forecast,
            flood,
        )
    }
}

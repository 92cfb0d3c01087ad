//! Resolves the caller's approximate position from their network origin.

use crate::geolocation::error::GeolocationError;
use crate::types::coordinates::Coordinates;
use log::{info, warn};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

const UNKNOWN_CITY: &str = "Unknown";

#[derive(Debug, Deserialize)]
struct IpLocation {
    latitude: Option<f64>,
    longitude: Option<f64>,
    city: Option<String>,
}

/// A position found by IP geolocation, with the city label the service reported.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLocation {
    pub coordinates: Coordinates,
    /// City name, or `"Unknown"` when the service did not report one.
    pub city: String,
}

pub struct GeoLocator {
    client: Client,
    url: String,
    timeout: Duration,
}

impl GeoLocator {
    pub fn new(client: Client, url: &str, timeout: Duration) -> Self {
        Self {
            client,
            url: url.to_string(),
            timeout,
        }
    }

    /// Looks up the current network origin. Every failure is logged and yields
    /// `None`; falling back to manual coordinates is the caller's job.
    pub async fn resolve(&self) -> Option<ResolvedLocation> {
        match self.try_resolve().await {
            Ok(location) => {
                info!(
                    "Detected location {} {}",
                    location.city, location.coordinates
                );
                Some(location)
            }
            Err(e) => {
                warn!("Could not detect location automatically: {}", e);
                None
            }
        }
    }

    pub async fn try_resolve(&self) -> Result<ResolvedLocation, GeolocationError> {
        let response = self
            .client
            .get(&self.url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| GeolocationError::NetworkRequest(self.url.clone(), e))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(GeolocationError::HttpStatus {
                url: self.url.clone(),
                status,
            });
        }

        let body = response
            .json::<IpLocation>()
            .await
            .map_err(|e| GeolocationError::Decode(self.url.clone(), e))?;
        parse_location(body)
    }
}

fn parse_location(body: IpLocation) -> Result<ResolvedLocation, GeolocationError> {
    let lat = body
        .latitude
        .ok_or(GeolocationError::MissingField("latitude"))?;
    let lon = body
        .longitude
        .ok_or(GeolocationError::MissingField("longitude"))?;
    let coordinates = Coordinates::new(lat, lon)
        .map_err(|_| GeolocationError::InvalidCoordinates { lat, lon })?;
    Ok(ResolvedLocation {
        coordinates,
        city: body.city.unwrap_or_else(|| UNKNOWN_CITY.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: serde_json::Value) -> IpLocation {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_city_defaults_to_unknown() {
        let location = parse_location(body(json!({"latitude": 12.97, "longitude": 77.59}))).unwrap();
        assert_eq!(location.city, "Unknown");
        assert_eq!(location.coordinates.latitude(), 12.97);
    }

    #[test]
    fn test_reports_city() {
        let location = parse_location(body(json!({
            "latitude": 19.07, "longitude": 72.87, "city": "Mumbai", "country": "IN"
        })))
        .unwrap();
        assert_eq!(location.city, "Mumbai");
    }

    #[test]
    fn test_rate_limited_body_is_unresolved() {
        let result = parse_location(body(json!({"error": true, "reason": "RateLimited"})));
        assert!(matches!(result, Err(GeolocationError::MissingField("latitude"))));
    }

    #[test]
    fn test_out_of_range_is_unresolved() {
        let result = parse_location(body(json!({"latitude": 123.0, "longitude": 10.0})));
        assert!(matches!(
            result,
            Err(GeolocationError::InvalidCoordinates { .. })
        ));
    }
}

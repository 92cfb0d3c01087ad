use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeolocationError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("Geolocation lookup at {url} answered with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Failed to decode geolocation response from {0}")]
    Decode(String, #[source] reqwest::Error),

    #[error("Geolocation response is missing '{0}'")]
    MissingField(&'static str),

    #[error("Geolocation returned unusable coordinates ({lat}, {lon})")]
    InvalidCoordinates { lat: f64, lon: f64 },
}

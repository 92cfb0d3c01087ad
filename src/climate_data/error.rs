use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClimateDataError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("Request to {0} timed out")]
    Timeout(String),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    // Flood endpoint answers 404 for regions without a discharge model
    #[error("No flood model available for this region")]
    NoModelAvailable { url: String },

    #[error("Failed to decode JSON response from {0}")]
    Decode(String, #[source] reqwest::Error),
}

impl ClimateDataError {
    pub(crate) fn from_reqwest(url: &str, e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ClimateDataError::Timeout(url.to_string())
        } else if e.is_decode() {
            ClimateDataError::Decode(url.to_string(), e)
        } else if let Some(status) = e.status() {
            ClimateDataError::HttpStatus {
                url: url.to_string(),
                status,
                source: e,
            }
        } else {
            ClimateDataError::NetworkRequest(url.to_string(), e)
        }
    }

    pub fn is_no_model_available(&self) -> bool {
        matches!(self, ClimateDataError::NoModelAvailable { .. })
    }
}

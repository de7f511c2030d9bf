use thiserror::Error;

/// Errors returned by the Yelp client and its parameter builders.
#[derive(Debug, Error)]
pub enum YelpError {
    #[error("location must be specified")]
    UnspecifiedLocation,

    #[error("latitude and longitude are required fields for a coordinate based search")]
    MissingCoordinates,

    #[error("sw_latitude, sw_longitude, ne_latitude and ne_longitude are required fields for a bound based search")]
    MissingBounds,

    #[error("business not found")]
    BusinessNotFound,

    /// Non-200 response; `message` holds the status line, e.g. `500 Internal Server Error`.
    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid request url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl YelpError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, YelpError::BusinessNotFound)
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            YelpError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

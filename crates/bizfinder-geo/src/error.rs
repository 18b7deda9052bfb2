use thiserror::Error;

/// Failure of a single provider lookup. Never escapes [`crate::Geocoder`].
#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {provider}")]
    UnexpectedStatus { provider: &'static str, status: u16 },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{provider} reported an error: {message}")]
    Provider {
        provider: &'static str,
        message: String,
    },

    #[error("{provider} found no match for {address:?}")]
    NoMatch {
        provider: &'static str,
        address: String,
    },

    #[error("{provider} returned invalid coordinates: {reason}")]
    InvalidCoordinates {
        provider: &'static str,
        reason: String,
    },

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

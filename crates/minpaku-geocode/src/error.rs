use thiserror::Error;

/// Errors raised while constructing a [`crate::Geocoder`].
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// The underlying `reqwest::Client` could not be built.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// A failed call to one geocoding provider.
///
/// Never leaves the crate: [`crate::Geocoder`] classifies every variant into a
/// [`crate::GeocodeFailure`] with reason `upstream_error`.
#[derive(Debug, Error)]
pub(crate) enum ProviderError {
    #[error("{provider} request timed out")]
    Timeout {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider} connection failed: {source}")]
    Transport {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected HTTP status {status} from {provider}")]
    UnexpectedStatus { provider: &'static str, status: u16 },

    #[error("malformed response from {provider}: {source}")]
    Deserialize {
        provider: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The provider answered 200 but reported a failure in its own envelope.
    #[error("{provider} returned status {status}: {message}")]
    Api {
        provider: &'static str,
        status: String,
        message: String,
    },

    #[error("{provider} returned invalid coordinates ({lat}, {lon})")]
    InvalidCoordinates {
        provider: &'static str,
        lat: f64,
        lon: f64,
    },
}

impl ProviderError {
    pub(crate) fn from_reqwest(provider: &'static str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            Self::Timeout { provider, source }
        } else {
            Self::Transport { provider, source }
        }
    }

    /// HTTP status to surface to the caller, when there was one.
    pub(crate) fn http_status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

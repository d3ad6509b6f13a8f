use thiserror::Error;

/// Errors raised while constructing a [`crate::ZoningResolver`].
#[derive(Debug, Error)]
pub enum ZoningError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// A failed XKT002 tile fetch. Logged and folded into a not-detected result.
#[derive(Debug, Error)]
pub(crate) enum TileFetchError {
    #[error("reinfolib request timed out")]
    Timeout(#[source] reqwest::Error),

    #[error("reinfolib connection failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("unexpected HTTP status {0} from reinfolib")]
    UnexpectedStatus(u16),

    #[error("malformed reinfolib tile: {0}")]
    Deserialize(#[from] serde_json::Error),
}

impl From<reqwest::Error> for TileFetchError {
    fn from(source: reqwest::Error) -> Self {
        if source.is_timeout() {
            Self::Timeout(source)
        } else {
            Self::Transport(source)
        }
    }
}

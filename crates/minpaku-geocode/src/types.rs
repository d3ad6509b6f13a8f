//! Outcome types returned by the geocoder.

use serde::Serialize;
use thiserror::Error;

/// Which upstream service produced a [`Position`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GeocodeSource {
    /// Google Geocoding API (primary, credentialed).
    Google,
    /// OpenStreetMap Nominatim (fallback, keyless).
    Nominatim,
}

impl GeocodeSource {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Nominatim => "nominatim",
        }
    }
}

/// A resolved, validated geographic position.
///
/// `lat` and `lon` are always finite and inside `[-90, 90]` / `[-180, 180]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub lat: f64,
    pub lon: f64,
    pub display_name: String,
    pub prefecture: String,
    pub city: String,
    /// Provider-specific precision hint (`ROOFTOP`, `house`, `suburb`, ...).
    pub location_type: String,
    pub source: GeocodeSource,
    /// Number of truncation steps taken before the provider answered.
    pub retry_count: u32,
    pub normalized_address: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    /// Caller input was empty after trimming. Never retried.
    Invalid,
    /// The provider had no match after the retry ladder was exhausted.
    NotFound,
    /// Transport failure, timeout, non-2xx status, or malformed response.
    UpstreamError,
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid => write!(f, "invalid"),
            Self::NotFound => write!(f, "not_found"),
            Self::UpstreamError => write!(f, "upstream_error"),
        }
    }
}

/// Terminal, non-exceptional geocoding failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("{reason}: {message}")]
pub struct GeocodeFailure {
    pub reason: FailureReason,
    pub message: String,
    /// HTTP status of the failing upstream response, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    pub retry_count: u32,
    /// Every address string sent upstream, in order.
    pub attempted_addresses: Vec<String>,
}

impl GeocodeFailure {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self {
            reason: FailureReason::Invalid,
            message: message.into(),
            status: None,
            retry_count: 0,
            attempted_addresses: Vec::new(),
        }
    }

    pub(crate) fn not_found(retry_count: u32, attempted_addresses: Vec<String>) -> Self {
        Self {
            reason: FailureReason::NotFound,
            message: "address not found".to_string(),
            status: None,
            retry_count,
            attempted_addresses,
        }
    }

    pub(crate) fn upstream(
        error: &crate::error::ProviderError,
        retry_count: u32,
        attempted_addresses: Vec<String>,
    ) -> Self {
        Self {
            reason: FailureReason::UpstreamError,
            message: error.to_string(),
            status: error.http_status(),
            retry_count,
            attempted_addresses,
        }
    }
}

/// Result of [`crate::Geocoder::geocode`].
pub type GeocodeOutcome = Result<Position, GeocodeFailure>;

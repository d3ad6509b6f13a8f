//! Adapters for the two interchangeable geocoding backends.

pub(crate) mod google;
pub(crate) mod nominatim;

use reqwest::{RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::error::{GeocodeError, ProviderError};
use crate::types::{GeocodeSource, Position};

/// One provider answer before geocoder bookkeeping is attached.
#[derive(Debug, Clone)]
pub(crate) struct Candidate {
    pub lat: f64,
    pub lon: f64,
    pub display_name: String,
    pub prefecture: String,
    pub city: String,
    pub location_type: String,
}

impl Candidate {
    pub(crate) fn into_position(
        self,
        source: GeocodeSource,
        retry_count: u32,
        normalized_address: String,
    ) -> Position {
        Position {
            lat: self.lat,
            lon: self.lon,
            display_name: self.display_name,
            prefecture: self.prefecture,
            city: self.city,
            location_type: self.location_type,
            source,
            retry_count,
            normalized_address,
        }
    }
}

/// Rejects non-finite or out-of-range coordinates.
pub(crate) fn validate_coordinates(
    provider: &'static str,
    lat: f64,
    lon: f64,
) -> Result<(f64, f64), ProviderError> {
    if lat.is_finite()
        && lon.is_finite()
        && (-90.0..=90.0).contains(&lat)
        && (-180.0..=180.0).contains(&lon)
    {
        Ok((lat, lon))
    } else {
        Err(ProviderError::InvalidCoordinates { provider, lat, lon })
    }
}

/// Parses `base_url`, normalising to exactly one trailing slash so that
/// [`Url::join`] appends rather than replaces the last path segment.
pub(crate) fn parse_base_url(base_url: &str) -> Result<Url, GeocodeError> {
    let normalised = format!("{}/", base_url.trim_end_matches('/'));
    Url::parse(&normalised).map_err(|e| GeocodeError::InvalidBaseUrl {
        url: base_url.to_owned(),
        reason: e.to_string(),
    })
}

/// Sends the request, asserts a 2xx status, and decodes the JSON body.
pub(crate) async fn send_json<T: DeserializeOwned>(
    provider: &'static str,
    request: RequestBuilder,
) -> Result<T, ProviderError> {
    let response = request
        .send()
        .await
        .map_err(|e| ProviderError::from_reqwest(provider, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ProviderError::UnexpectedStatus {
            provider,
            status: status.as_u16(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| ProviderError::from_reqwest(provider, e))?;
    serde_json::from_str(&body).map_err(|source| ProviderError::Deserialize { provider, source })
}

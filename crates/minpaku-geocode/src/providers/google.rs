//! Google Geocoding API adapter (primary provider).
//!
//! Performs its own fuzzy matching, so the geocoder sends it a single
//! request with no truncation ladder. The envelope `status` drives
//! classification: `OK` is a hit, `ZERO_RESULTS` is a clean miss, anything
//! else (`REQUEST_DENIED`, `OVER_QUERY_LIMIT`, ...) is an upstream error.

use reqwest::{Client, Url};
use serde::Deserialize;

use super::{parse_base_url, send_json, validate_coordinates, Candidate};
use crate::error::{GeocodeError, ProviderError};

const PROVIDER: &str = "google";

#[derive(Debug, Deserialize)]
struct GoogleResponse {
    status: String,
    #[serde(default)]
    results: Vec<GoogleResult>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GoogleResult {
    formatted_address: String,
    geometry: GoogleGeometry,
    #[serde(default)]
    address_components: Vec<AddressComponent>,
}

#[derive(Debug, Deserialize)]
struct GoogleGeometry {
    location: LatLng,
    #[serde(default)]
    location_type: String,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

#[derive(Debug, Deserialize)]
struct AddressComponent {
    long_name: String,
    #[serde(default)]
    types: Vec<String>,
}

impl GoogleResult {
    fn component(&self, kind: &str) -> Option<&str> {
        self.address_components
            .iter()
            .find(|c| c.types.iter().any(|t| t == kind))
            .map(|c| c.long_name.as_str())
    }

    fn into_candidate(self) -> Result<Candidate, ProviderError> {
        let location = &self.geometry.location;
        let (lat, lon) = validate_coordinates(PROVIDER, location.lat, location.lng)?;
        let prefecture = self
            .component("administrative_area_level_1")
            .unwrap_or_default()
            .to_string();
        let city = self
            .component("locality")
            .or_else(|| self.component("administrative_area_level_2"))
            .unwrap_or_default()
            .to_string();

        Ok(Candidate {
            lat,
            lon,
            display_name: self.formatted_address,
            prefecture,
            city,
            location_type: self.geometry.location_type,
        })
    }
}

impl GoogleResponse {
    fn into_candidate(self) -> Result<Option<Candidate>, ProviderError> {
        if self.status == "ZERO_RESULTS" {
            return Ok(None);
        }
        if self.status != "OK" {
            return Err(ProviderError::Api {
                provider: PROVIDER,
                status: self.status,
                message: self
                    .error_message
                    .unwrap_or_else(|| "no error message".to_string()),
            });
        }
        self.results
            .into_iter()
            .next()
            .map(GoogleResult::into_candidate)
            .transpose()
    }
}

pub(crate) struct GoogleClient {
    client: Client,
    api_key: String,
    endpoint: Url,
}

impl GoogleClient {
    pub(crate) fn new(
        client: Client,
        api_key: &str,
        base_url: &str,
    ) -> Result<Self, GeocodeError> {
        let endpoint = parse_base_url(base_url)?
            .join("maps/api/geocode/json")
            .map_err(|e| GeocodeError::InvalidBaseUrl {
                url: base_url.to_owned(),
                reason: e.to_string(),
            })?;
        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            endpoint,
        })
    }

    pub(crate) async fn search(&self, address: &str) -> Result<Option<Candidate>, ProviderError> {
        self.request(&[("address", address), ("region", "jp")]).await
    }

    pub(crate) async fn reverse(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<Option<Candidate>, ProviderError> {
        let latlng = format!("{lat},{lon}");
        self.request(&[("latlng", latlng.as_str())]).await
    }

    async fn request(&self, params: &[(&str, &str)]) -> Result<Option<Candidate>, ProviderError> {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("language", "ja");
            pairs.append_pair("key", &self.api_key);
        }
        let response: GoogleResponse = send_json(PROVIDER, self.client.get(url)).await?;
        response.into_candidate()
    }
}

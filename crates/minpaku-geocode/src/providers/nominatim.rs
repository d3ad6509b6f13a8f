//! OpenStreetMap Nominatim adapter.
//!
//! Keyless and free, but returns nothing for addresses more specific than
//! its data. Usage policy: at most one request per second, identifying
//! `User-Agent` required.

use reqwest::{Client, Url};
use serde::Deserialize;

use super::{parse_base_url, send_json, validate_coordinates, Candidate};
use crate::error::{GeocodeError, ProviderError};

const PROVIDER: &str = "nominatim";

#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    display_name: String,
    #[serde(default)]
    address: NominatimAddress,
    #[serde(default, rename = "type")]
    kind: String,
}

#[derive(Debug, Default, Deserialize)]
struct NominatimAddress {
    state: Option<String>,
    province: Option<String>,
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    county: Option<String>,
}

/// `/reverse` answers 200 with `{"error": "..."}` when nothing is nearby.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ReverseResponse {
    Place(NominatimPlace),
    Error { error: String },
}

impl NominatimPlace {
    fn into_candidate(self) -> Result<Candidate, ProviderError> {
        let lat = self.lat.trim().parse::<f64>().unwrap_or(f64::NAN);
        let lon = self.lon.trim().parse::<f64>().unwrap_or(f64::NAN);
        let (lat, lon) = validate_coordinates(PROVIDER, lat, lon)?;

        let addr = self.address;
        let prefecture = addr.state.or(addr.province).unwrap_or_default();
        let city = addr
            .city
            .or(addr.town)
            .or(addr.village)
            .or(addr.county)
            .unwrap_or_default();

        Ok(Candidate {
            lat,
            lon,
            display_name: self.display_name,
            prefecture,
            city,
            location_type: self.kind,
        })
    }
}

pub(crate) struct NominatimClient {
    client: Client,
    search_url: Url,
    reverse_url: Url,
}

impl NominatimClient {
    pub(crate) fn new(client: Client, base_url: &str) -> Result<Self, GeocodeError> {
        let base = parse_base_url(base_url)?;
        let join = |path: &str| {
            base.join(path).map_err(|e| GeocodeError::InvalidBaseUrl {
                url: base_url.to_owned(),
                reason: e.to_string(),
            })
        };
        Ok(Self {
            client,
            search_url: join("search")?,
            reverse_url: join("reverse")?,
        })
    }

    /// Free-text search restricted to Japan. `Ok(None)` means the provider
    /// had no match for this exact string.
    pub(crate) async fn search(&self, address: &str) -> Result<Option<Candidate>, ProviderError> {
        let mut url = self.search_url.clone();
        url.query_pairs_mut()
            .append_pair("q", address)
            .append_pair("format", "json")
            .append_pair("addressdetails", "1")
            .append_pair("limit", "1")
            .append_pair("countrycodes", "jp");

        let request = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT_LANGUAGE, "ja");
        let places: Vec<NominatimPlace> = send_json(PROVIDER, request).await?;

        places
            .into_iter()
            .next()
            .map(NominatimPlace::into_candidate)
            .transpose()
    }

    pub(crate) async fn reverse(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<Option<Candidate>, ProviderError> {
        let mut url = self.reverse_url.clone();
        url.query_pairs_mut()
            .append_pair("lat", &lat.to_string())
            .append_pair("lon", &lon.to_string())
            .append_pair("format", "json")
            .append_pair("addressdetails", "1");

        let request = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT_LANGUAGE, "ja");
        match send_json::<ReverseResponse>(PROVIDER, request).await? {
            ReverseResponse::Place(place) => place.into_candidate().map(Some),
            ReverseResponse::Error { error } => {
                tracing::debug!(lat, lon, error = %error, "nominatim reverse lookup found nothing");
                Ok(None)
            }
        }
    }
}

//! Address → position resolution with provider selection and the
//! truncation-retry ladder.

use std::time::Duration;

use minpaku_core::AppConfig;
use reqwest::Client;

use crate::address::{clean_input, is_addressable, normalize_address, truncate_address};
use crate::error::GeocodeError;
use crate::providers::google::GoogleClient;
use crate::providers::nominatim::NominatimClient;
use crate::providers::validate_coordinates;
use crate::types::{GeocodeFailure, GeocodeOutcome, GeocodeSource, Position};

/// Upper bound on upstream requests for one fallback-provider lookup,
/// counting the first attempt.
pub const MAX_ATTEMPTS: usize = 5;

/// Settings for [`Geocoder::new`].
#[derive(Clone)]
pub struct GeocoderConfig {
    /// Google credential. When set, Google is used exclusively.
    pub google_api_key: Option<String>,
    /// Per-request deadline covering connect, send, and body read.
    pub timeout: Duration,
    /// Pause before every retry on the fallback provider.
    pub inter_request_delay: Duration,
    pub user_agent: String,
    pub nominatim_base_url: String,
    pub google_base_url: String,
}

impl GeocoderConfig {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            google_api_key: config.google_maps_api_key.clone(),
            timeout: Duration::from_secs(config.geocode_timeout_secs),
            inter_request_delay: Duration::from_millis(config.geocode_inter_request_delay_ms),
            user_agent: config.user_agent.clone(),
            nominatim_base_url: config.nominatim_base_url.clone(),
            google_base_url: config.google_geocode_base_url.clone(),
        }
    }
}

impl std::fmt::Debug for GeocoderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocoderConfig")
            .field(
                "google_api_key",
                &self.google_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("timeout", &self.timeout)
            .field("inter_request_delay", &self.inter_request_delay)
            .field("user_agent", &self.user_agent)
            .field("nominatim_base_url", &self.nominatim_base_url)
            .field("google_base_url", &self.google_base_url)
            .finish()
    }
}

enum Backend {
    Google(GoogleClient),
    Nominatim(NominatimClient),
}

/// Geocoder bound to one provider for its whole lifetime.
///
/// Holds no mutable state; a single instance can serve concurrent requests.
pub struct Geocoder {
    backend: Backend,
    inter_request_delay: Duration,
}

impl Geocoder {
    /// Builds the HTTP client and selects the provider: Google when a
    /// non-blank credential is configured, Nominatim otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the `reqwest::Client` cannot be
    /// built, or [`GeocodeError::InvalidBaseUrl`] for an unparseable base URL.
    pub fn new(config: &GeocoderConfig) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        let google_key = config
            .google_api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty());

        let backend = match google_key {
            Some(key) => Backend::Google(GoogleClient::new(client, key, &config.google_base_url)?),
            None => Backend::Nominatim(NominatimClient::new(client, &config.nominatim_base_url)?),
        };

        Ok(Self {
            backend,
            inter_request_delay: config.inter_request_delay,
        })
    }

    /// The provider this geocoder sends requests to.
    #[must_use]
    pub fn source(&self) -> GeocodeSource {
        match self.backend {
            Backend::Google(_) => GeocodeSource::Google,
            Backend::Nominatim(_) => GeocodeSource::Nominatim,
        }
    }

    /// Resolves a free-text address.
    ///
    /// Blank input fails with `invalid` before any network call. Google gets
    /// exactly one request; Nominatim walks the truncation ladder, at most
    /// [`MAX_ATTEMPTS`] requests with the configured delay before each retry.
    ///
    /// # Errors
    ///
    /// Returns a [`GeocodeFailure`] value (`invalid`, `not_found`, or
    /// `upstream_error`). Expected failures are never panics.
    pub async fn geocode(&self, address: &str) -> GeocodeOutcome {
        let cleaned = clean_input(address);
        if cleaned.is_empty() {
            return Err(GeocodeFailure::invalid("address is empty"));
        }
        let normalized = normalize_address(&cleaned);

        match &self.backend {
            Backend::Google(client) => geocode_once(client, normalized).await,
            Backend::Nominatim(client) => self.geocode_with_truncation(client, normalized).await,
        }
    }

    async fn geocode_with_truncation(
        &self,
        client: &NominatimClient,
        normalized: String,
    ) -> GeocodeOutcome {
        let mut attempted: Vec<String> = Vec::with_capacity(MAX_ATTEMPTS);
        let mut candidate = normalized.clone();
        let mut retry_count = 0u32;

        loop {
            if retry_count > 0 && !self.inter_request_delay.is_zero() {
                tokio::time::sleep(self.inter_request_delay).await;
            }

            tracing::debug!(attempt = retry_count + 1, address = %candidate, "querying nominatim");
            attempted.push(candidate.clone());

            match client.search(&candidate).await {
                Ok(Some(hit)) => {
                    tracing::info!(
                        retry_count,
                        address = %candidate,
                        lat = hit.lat,
                        lon = hit.lon,
                        "address resolved via nominatim"
                    );
                    return Ok(hit.into_position(GeocodeSource::Nominatim, retry_count, normalized));
                }
                Ok(None) => {}
                Err(err) => {
                    tracing::warn!(retry_count, error = %err, "nominatim request failed");
                    return Err(GeocodeFailure::upstream(&err, retry_count, attempted));
                }
            }

            if attempted.len() >= MAX_ATTEMPTS {
                tracing::debug!(retry_count, "attempt cap reached");
                break;
            }

            let next = truncate_address(&candidate);
            if next == candidate {
                tracing::debug!(address = %candidate, "no truncation rule applies");
                break;
            }
            if !is_addressable(&next) {
                tracing::debug!(address = %next, "candidate lost prefecture or municipality");
                break;
            }
            candidate = next;
            retry_count += 1;
        }

        Err(GeocodeFailure::not_found(retry_count, attempted))
    }

    /// Resolves a coordinate to an address with a single upstream call.
    ///
    /// Returns `None` on any failure, including non-finite or out-of-range
    /// input (which never reaches the network). Failure detail is only logged.
    pub async fn reverse_geocode(&self, lat: f64, lon: f64) -> Option<Position> {
        if validate_coordinates("input", lat, lon).is_err() {
            tracing::debug!(lat, lon, "reverse geocode skipped for invalid coordinate");
            return None;
        }

        let source = self.source();
        let result = match &self.backend {
            Backend::Google(client) => client.reverse(lat, lon).await,
            Backend::Nominatim(client) => client.reverse(lat, lon).await,
        };

        match result {
            Ok(hit) => hit.map(|c| c.into_position(source, 0, format!("{lat},{lon}"))),
            Err(err) => {
                tracing::warn!(lat, lon, provider = source.as_str(), error = %err, "reverse geocode failed");
                None
            }
        }
    }
}

async fn geocode_once(client: &GoogleClient, normalized: String) -> GeocodeOutcome {
    let attempted = vec![normalized.clone()];
    match client.search(&normalized).await {
        Ok(Some(hit)) => {
            tracing::info!(lat = hit.lat, lon = hit.lon, "address resolved via google");
            Ok(hit.into_position(GeocodeSource::Google, 0, normalized))
        }
        Ok(None) => Err(GeocodeFailure::not_found(0, attempted)),
        Err(err) => {
            tracing::warn!(error = %err, "google geocoding request failed");
            Err(GeocodeFailure::upstream(&err, 0, attempted))
        }
    }
}

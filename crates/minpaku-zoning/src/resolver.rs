//! Coordinate → use-area resolution against the reinfolib XKT002 tile API.

use std::time::Duration;

use minpaku_core::AppConfig;
use reqwest::{Client, Url};

use crate::error::{TileFetchError, ZoningError};
use crate::tile::{TileCoordinate, ZOOM_LEVEL};
use crate::types::{FeatureCollection, ZoningFeature, ZoningLookupResult};

const XKT002_PATH: &str = "ex-api/external/XKT002";

/// Settings for [`ZoningResolver::new`].
#[derive(Clone)]
pub struct ZoningConfig {
    /// reinfolib subscription key. Without it every lookup is not-detected.
    pub api_key: Option<String>,
    pub timeout: Duration,
    pub user_agent: String,
    pub base_url: String,
}

impl ZoningConfig {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            api_key: config.reinfolib_api_key.clone(),
            timeout: Duration::from_secs(config.zoning_timeout_secs),
            user_agent: config.user_agent.clone(),
            base_url: config.reinfolib_base_url.clone(),
        }
    }
}

impl std::fmt::Debug for ZoningConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZoningConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Which feature of a tile supplied the answer.
#[derive(Debug, Clone, Copy)]
pub(crate) enum FeatureChoice<'a> {
    /// A polygon containing the query point.
    Containing(&'a ZoningFeature),
    /// No polygon contained the point; the tile's first feature stands in.
    TileFallback(&'a ZoningFeature),
}

impl<'a> FeatureChoice<'a> {
    fn feature(self) -> &'a ZoningFeature {
        match self {
            Self::Containing(f) | Self::TileFallback(f) => f,
        }
    }
}

/// First feature whose polygon contains `(lon, lat)`, else the first feature.
pub(crate) fn choose_feature(
    features: &[ZoningFeature],
    lon: f64,
    lat: f64,
) -> Option<FeatureChoice<'_>> {
    features
        .iter()
        .find(|f| f.contains(lon, lat))
        .map(FeatureChoice::Containing)
        .or_else(|| features.first().map(FeatureChoice::TileFallback))
}

/// Resolves coordinates to a zoning category.
///
/// Stateless apart from the HTTP client; safe to share across tasks.
pub struct ZoningResolver {
    client: Client,
    api_key: Option<String>,
    endpoint: Url,
}

impl ZoningResolver {
    /// # Errors
    ///
    /// Returns [`ZoningError::Http`] if the `reqwest::Client` cannot be
    /// built, or [`ZoningError::InvalidBaseUrl`] for an unparseable base URL.
    pub fn new(config: &ZoningConfig) -> Result<Self, ZoningError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        let base = format!("{}/", config.base_url.trim_end_matches('/'));
        let endpoint = Url::parse(&base)
            .and_then(|b| b.join(XKT002_PATH))
            .map_err(|e| ZoningError::InvalidBaseUrl {
                url: config.base_url.clone(),
                reason: e.to_string(),
            })?;

        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_owned);

        Ok(Self {
            client,
            api_key,
            endpoint,
        })
    }

    /// Whether a credential is configured. Without one, lookups never touch
    /// the network.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Looks up the use area at `(lat, lon)`.
    ///
    /// Never fails: a missing credential, a transport error, a non-2xx
    /// response, a malformed body, or an empty tile all yield a not-detected
    /// result that still carries the external map URL.
    pub async fn resolve_zoning(&self, lat: f64, lon: f64) -> ZoningLookupResult {
        let Some(api_key) = self.api_key.as_deref() else {
            tracing::warn!("REINFOLIB_API_KEY is not set; zoning lookup skipped");
            return ZoningLookupResult::not_detected(lat, lon);
        };

        if !lat.is_finite() || !lon.is_finite() {
            tracing::warn!(lat, lon, "non-finite coordinates; zoning lookup skipped");
            return ZoningLookupResult::not_detected(lat, lon);
        }

        let tile = TileCoordinate::from_lat_lon(lat, lon, ZOOM_LEVEL);
        let collection = match self.fetch_tile(api_key, tile).await {
            Ok(collection) => collection,
            Err(e) => {
                tracing::warn!(x = tile.x, y = tile.y, z = tile.z, error = %e, "use-area tile fetch failed");
                return ZoningLookupResult::not_detected(lat, lon);
            }
        };

        match choose_feature(&collection.features, lon, lat) {
            Some(choice) => {
                if let FeatureChoice::TileFallback(_) = choice {
                    tracing::debug!(
                        x = tile.x,
                        y = tile.y,
                        "no polygon contains the point; using the tile's first feature"
                    );
                }
                ZoningLookupResult::from_properties(&choice.feature().properties, lat, lon)
            }
            None => {
                tracing::debug!(x = tile.x, y = tile.y, "use-area tile has no features");
                ZoningLookupResult::not_detected(lat, lon)
            }
        }
    }

    async fn fetch_tile(
        &self,
        api_key: &str,
        tile: TileCoordinate,
    ) -> Result<FeatureCollection, TileFetchError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[
                ("response_format", "geojson".to_owned()),
                ("z", tile.z.to_string()),
                ("x", tile.x.to_string()),
                ("y", tile.y.to_string()),
            ])
            .header("Ocp-Apim-Subscription-Key", api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TileFetchError::UnexpectedStatus(status.as_u16()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

use minpaku_core::{external_map_url, ZoningCategory};
use serde::{Deserialize, Deserializer, Serialize};

use crate::geometry::Geometry;
use crate::matching::match_zoning_category;

/// Value of [`ZoningLookupResult::source`].
pub const REINFOLIB_SOURCE: &str = "reinfolib";

/// GeoJSON body of an XKT002 tile response.
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<ZoningFeature>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ZoningFeature {
    #[serde(default)]
    pub geometry: Option<Geometry>,
    /// GeoJSON allows `"properties": null`; that reads as all-absent.
    #[serde(default, deserialize_with = "null_as_default")]
    pub properties: FeatureProperties,
}

impl ZoningFeature {
    #[must_use]
    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        self.geometry.as_ref().is_some_and(|g| g.contains(lon, lat))
    }
}

/// The subset of XKT002 feature properties the resolver reads.
///
/// Empty strings are treated as absent. Ratio values are sometimes sent as
/// bare numbers and are stringified.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeatureProperties {
    #[serde(default, deserialize_with = "text_or_number")]
    pub use_area_ja: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub u_floor_area_ratio_ja: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub u_building_coverage_ratio_ja: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) if !s.trim().is_empty() => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Outcome of [`crate::ZoningResolver::resolve_zoning`].
///
/// `detected` is true iff `zoning` is set. `raw_zoning_name` and the ratios
/// may be present even when the name matched no category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoningLookupResult {
    pub detected: bool,
    pub zoning: Option<&'static ZoningCategory>,
    pub raw_zoning_name: Option<String>,
    pub floor_area_ratio: Option<String>,
    pub building_coverage_ratio: Option<String>,
    pub external_map_url: String,
    pub source: &'static str,
}

impl ZoningLookupResult {
    #[must_use]
    pub fn not_detected(lat: f64, lon: f64) -> Self {
        Self {
            detected: false,
            zoning: None,
            raw_zoning_name: None,
            floor_area_ratio: None,
            building_coverage_ratio: None,
            external_map_url: external_map_url(lat, lon),
            source: REINFOLIB_SOURCE,
        }
    }

    /// Builds a result from the chosen feature's properties, matching the
    /// use-area name against the category table.
    #[must_use]
    pub fn from_properties(properties: &FeatureProperties, lat: f64, lon: f64) -> Self {
        let zoning = properties
            .use_area_ja
            .as_deref()
            .and_then(match_zoning_category);
        Self {
            detected: zoning.is_some(),
            zoning,
            raw_zoning_name: properties.use_area_ja.clone(),
            floor_area_ratio: properties.u_floor_area_ratio_ja.clone(),
            building_coverage_ratio: properties.u_building_coverage_ratio_ja.clone(),
            external_map_url: external_map_url(lat, lon),
            source: REINFOLIB_SOURCE,
        }
    }
}

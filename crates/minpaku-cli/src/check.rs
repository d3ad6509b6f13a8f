//! `check`: address → position → zoning → permit verdict.

use minpaku_core::{PermitStatus, ZoningCategory};
use minpaku_geocode::{GeocodeFailure, Geocoder, Position};
use minpaku_zoning::{ZoningLookupResult, ZoningResolver};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CheckReport {
    pub address: String,
    pub position: Position,
    pub zoning: ZoningLookupResult,
    /// Absent when no category was detected; consult `zoning.externalMapUrl`.
    pub verdict: Option<Verdict>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Verdict {
    pub code: &'static str,
    pub name: &'static str,
    pub minpaku_status: PermitStatus,
    pub minpaku_label: &'static str,
    pub minpaku_color: &'static str,
    pub ryokan_status: PermitStatus,
    pub ryokan_label: &'static str,
    pub detail: &'static str,
}

impl From<&'static ZoningCategory> for Verdict {
    fn from(category: &'static ZoningCategory) -> Self {
        Self {
            code: category.code,
            name: category.name,
            minpaku_status: category.minpaku_status,
            minpaku_label: category.minpaku_status.label(),
            minpaku_color: category.minpaku_status.color(),
            ryokan_status: category.ryokan_status,
            ryokan_label: category.ryokan_status.label(),
            detail: category.minpaku_detail,
        }
    }
}

pub(crate) fn build_report(
    address: &str,
    position: Position,
    zoning: ZoningLookupResult,
) -> CheckReport {
    CheckReport {
        address: address.to_owned(),
        verdict: zoning.zoning.map(Verdict::from),
        position,
        zoning,
    }
}

/// Geocodes `address` and resolves zoning at the result.
///
/// Zoning never fails; only a geocoding failure is returned as `Err`.
pub(crate) async fn run_check(
    geocoder: &Geocoder,
    resolver: &ZoningResolver,
    address: &str,
) -> Result<CheckReport, GeocodeFailure> {
    let position = geocoder.geocode(address).await?;
    let zoning = resolver.resolve_zoning(position.lat, position.lon).await;

    tracing::info!(
        lat = position.lat,
        lon = position.lon,
        zoning = zoning.zoning.map_or("undetected", |z| z.code),
        "check complete"
    );
    Ok(build_report(address, position, zoning))
}

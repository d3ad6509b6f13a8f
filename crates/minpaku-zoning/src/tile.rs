//! Slippy-map tile addressing.
//!
//! See <https://wiki.openstreetmap.org/wiki/Slippy_map_tilenames>.

use std::f64::consts::PI;

/// Zoom level the XKT002 use-area tiles are requested at.
pub const ZOOM_LEVEL: u8 = 15;

/// Latitude limit of the Web Mercator projection.
const MAX_MERCATOR_LAT: f64 = 85.051_128_78;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileCoordinate {
    pub x: u32,
    pub y: u32,
    pub z: u8,
}

impl TileCoordinate {
    /// The tile containing `(lat, lon)` at zoom `z`.
    ///
    /// Longitude maps linearly; latitude goes through the inverse Mercator
    /// transform. Inputs beyond the projection's range clamp to the edge tiles.
    #[must_use]
    pub fn from_lat_lon(lat: f64, lon: f64, z: u8) -> Self {
        let n = 2f64.powi(i32::from(z));
        let lat = lat.clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT);
        let lon = lon.clamp(-180.0, 180.0);

        let x = ((lon + 180.0) / 360.0 * n).floor();
        let lat_rad = lat.to_radians();
        let y = ((1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / PI) / 2.0 * n).floor();

        let max = n - 1.0;
        // Both values are clamped to [0, 2^z - 1], which fits in u32 for any u8 zoom we use.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let (x, y) = (x.clamp(0.0, max) as u32, y.clamp(0.0, max) as u32);
        Self { x, y, z }
    }
}

//! Point-in-polygon classification for GeoJSON use-area features.
//!
//! Only the outer ring of each polygon is tested; holes are ignored. Use-area
//! boundaries rarely have holes at the precision that matters here.

use serde::Deserialize;

/// A GeoJSON position: `[lon, lat]`, optionally followed by altitude.
type Coordinate = Vec<f64>;
type Ring = Vec<Coordinate>;

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Polygon { coordinates: Vec<Ring> },
    MultiPolygon { coordinates: Vec<Vec<Ring>> },
    /// Points, lines, and anything else never contain a point.
    #[serde(other)]
    Unsupported,
}

impl Geometry {
    /// Whether `(lon, lat)` lies inside the outer ring of this polygon, or of
    /// any constituent polygon of a multi-polygon.
    #[must_use]
    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        match self {
            Self::Polygon { coordinates } => outer_ring_contains(coordinates, lon, lat),
            Self::MultiPolygon { coordinates } => coordinates
                .iter()
                .any(|rings| outer_ring_contains(rings, lon, lat)),
            Self::Unsupported => false,
        }
    }
}

fn outer_ring_contains(rings: &[Ring], lon: f64, lat: f64) -> bool {
    rings.first().is_some_and(|outer| {
        let ring: Vec<(f64, f64)> = outer
            .iter()
            .filter_map(|c| match c.as_slice() {
                [x, y, ..] => Some((*x, *y)),
                _ => None,
            })
            .collect();
        point_in_polygon((lon, lat), &ring)
    })
}

/// Ray-casting test: counts crossings of a ray from `point` towards +x.
///
/// Boundary convention is half-open: for an axis-aligned square, points on
/// the min-x and min-y edges are inside, points on the max-x and max-y edges
/// are outside. The ring may be open or closed.
#[must_use]
pub fn point_in_polygon(point: (f64, f64), ring: &[(f64, f64)]) -> bool {
    let (px, py) = point;
    let mut inside = false;
    let mut j = ring.len().wrapping_sub(1);
    for (i, &(xi, yi)) in ring.iter().enumerate() {
        let (xj, yj) = ring[j];
        if (yi > py) != (yj > py) && px < (xj - xi) * (py - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

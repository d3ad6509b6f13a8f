//! Zoning-category lookup for a coordinate.
//!
//! [`ZoningResolver`] fetches the zoom-15 use-area tile covering the point
//! from the reinfolib XKT002 API, finds the polygon containing it, and maps
//! the reported use-area name onto the fixed table of thirteen categories.

pub mod error;
pub mod geometry;
pub mod matching;
mod resolver;
pub mod tile;
pub mod types;

pub use error::ZoningError;
pub use geometry::point_in_polygon;
pub use matching::{match_zoning_category, normalize_zoning_name};
pub use resolver::{ZoningConfig, ZoningResolver};
pub use tile::{TileCoordinate, ZOOM_LEVEL};
pub use types::{ZoningLookupResult, REINFOLIB_SOURCE};

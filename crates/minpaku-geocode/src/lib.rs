//! Address geocoding for Japanese street addresses.
//!
//! [`Geocoder`] picks one of two providers at construction time: the Google
//! Geocoding API when a credential is configured, otherwise Nominatim with a
//! progressive address-truncation retry ladder. Every call returns a
//! structured outcome; expected failures are values, not panics.

pub mod address;
pub mod error;
mod geocoder;
mod providers;
pub mod types;

pub use error::GeocodeError;
pub use geocoder::{Geocoder, GeocoderConfig, MAX_ATTEMPTS};
pub use types::{FailureReason, GeocodeFailure, GeocodeOutcome, GeocodeSource, Position};

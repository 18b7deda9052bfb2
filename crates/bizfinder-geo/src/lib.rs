//! Address geocoding with a two-provider fallback.
//!
//! [`Geocoder`] asks OpenStreetMap Nominatim first and ArcGIS second. Lookups
//! never fail from the caller's point of view: provider errors are logged and
//! become `None`, and map centering falls back to a configured default.

pub mod arcgis;
pub mod error;
pub mod geocoder;
mod http;
pub mod nominatim;

pub use arcgis::ArcGisClient;
pub use error::GeocodeError;
pub use geocoder::{Geocoder, GeocoderSettings};
pub use nominatim::NominatimClient;

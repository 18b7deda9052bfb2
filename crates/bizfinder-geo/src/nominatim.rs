//! Primary provider: OpenStreetMap Nominatim `/search`.

use bizfinder_core::Coordinates;
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::error::GeocodeError;
use crate::http::{build_client, endpoint_url, get_json};

pub const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";
const PROVIDER: &str = "nominatim";

/// One search hit. Nominatim encodes coordinates as strings.
#[derive(Debug, Deserialize)]
struct Place {
    lat: String,
    lon: String,
    #[serde(default)]
    display_name: Option<String>,
}

pub struct NominatimClient {
    client: Client,
    search_url: Url,
}

impl NominatimClient {
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the HTTP client cannot be built, or
    /// [`GeocodeError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn new(base_url: &str, user_agent: &str, timeout_secs: u64) -> Result<Self, GeocodeError> {
        Ok(Self {
            client: build_client(user_agent, timeout_secs)?,
            search_url: endpoint_url(base_url, "search")?,
        })
    }

    /// Resolves `address` to the best-ranked hit.
    ///
    /// # Errors
    ///
    /// Any transport, status, or decoding failure, an empty result list, or
    /// an unparseable coordinate pair.
    pub async fn lookup(&self, address: &str) -> Result<Coordinates, GeocodeError> {
        let places: Vec<Place> = get_json(&self.client, self.build_url(address), PROVIDER).await?;
        let place = places
            .into_iter()
            .next()
            .ok_or_else(|| GeocodeError::NoMatch {
                provider: PROVIDER,
                address: address.to_owned(),
            })?;

        let coords = parse_place(&place)?;
        tracing::debug!(
            address,
            matched = place.display_name.as_deref().unwrap_or(""),
            %coords,
            "nominatim resolved address"
        );
        Ok(coords)
    }

    fn build_url(&self, address: &str) -> Url {
        let mut url = self.search_url.clone();
        url.query_pairs_mut()
            .append_pair("q", address)
            .append_pair("format", "jsonv2")
            .append_pair("limit", "1");
        url
    }
}

fn parse_place(place: &Place) -> Result<Coordinates, GeocodeError> {
    let invalid = || GeocodeError::InvalidCoordinates {
        provider: PROVIDER,
        reason: format!("lat={:?} lon={:?}", place.lat, place.lon),
    };
    let lat = place.lat.trim().parse::<f64>().map_err(|_| invalid())?;
    let lon = place.lon.trim().parse::<f64>().map_err(|_| invalid())?;
    Coordinates::new(lat, lon).ok_or_else(invalid)
}

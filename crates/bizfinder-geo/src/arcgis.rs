//! Secondary provider: ArcGIS World Geocoding `findAddressCandidates`.

use bizfinder_core::Coordinates;
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::error::GeocodeError;
use crate::http::{build_client, endpoint_url, get_json};

pub const DEFAULT_BASE_URL: &str =
    "https://geocode.arcgis.com/arcgis/rest/services/World/GeocodeServer";
const PROVIDER: &str = "arcgis";

/// ArcGIS answers 200 even for failures and puts them in `error`.
#[derive(Debug, Deserialize)]
struct CandidatesResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    error: Option<ArcGisErrorBody>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    address: Option<String>,
    location: Point,
}

/// `x` is longitude, `y` latitude.
#[derive(Debug, Deserialize)]
struct Point {
    x: f64,
    y: f64,
}

#[derive(Debug, Deserialize)]
struct ArcGisErrorBody {
    #[serde(default)]
    code: Option<i64>,
    #[serde(default)]
    message: Option<String>,
}

pub struct ArcGisClient {
    client: Client,
    candidates_url: Url,
}

impl ArcGisClient {
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the HTTP client cannot be built, or
    /// [`GeocodeError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn new(base_url: &str, user_agent: &str, timeout_secs: u64) -> Result<Self, GeocodeError> {
        Ok(Self {
            client: build_client(user_agent, timeout_secs)?,
            candidates_url: endpoint_url(base_url, "findAddressCandidates")?,
        })
    }

    /// Resolves `address` to the top candidate.
    ///
    /// # Errors
    ///
    /// Any transport, status, or decoding failure, an in-body error object,
    /// no candidates, or out-of-range coordinates.
    pub async fn lookup(&self, address: &str) -> Result<Coordinates, GeocodeError> {
        let response: CandidatesResponse =
            get_json(&self.client, self.build_url(address), PROVIDER).await?;

        if let Some(error) = response.error {
            return Err(GeocodeError::Provider {
                provider: PROVIDER,
                message: format!(
                    "code {}: {}",
                    error.code.unwrap_or_default(),
                    error.message.unwrap_or_default()
                ),
            });
        }

        let candidate =
            response
                .candidates
                .into_iter()
                .next()
                .ok_or_else(|| GeocodeError::NoMatch {
                    provider: PROVIDER,
                    address: address.to_owned(),
                })?;

        let coords = Coordinates::new(candidate.location.y, candidate.location.x).ok_or_else(|| {
            GeocodeError::InvalidCoordinates {
                provider: PROVIDER,
                reason: format!("x={} y={}", candidate.location.x, candidate.location.y),
            }
        })?;
        tracing::debug!(
            address,
            matched = candidate.address.as_deref().unwrap_or(""),
            %coords,
            "arcgis resolved address"
        );
        Ok(coords)
    }

    fn build_url(&self, address: &str) -> Url {
        let mut url = self.candidates_url.clone();
        url.query_pairs_mut()
            .append_pair("SingleLine", address)
            .append_pair("f", "json")
            .append_pair("maxLocations", "1");
        url
    }
}

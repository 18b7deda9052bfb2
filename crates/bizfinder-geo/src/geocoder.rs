//! Two-tier geocoding: Nominatim first, ArcGIS second, `None` after that.
//!
//! Unresolved addresses are common (the model invents or garbles addresses),
//! so nothing here returns an error. Provider failures are logged at `debug`
//! and swallowed.

use bizfinder_core::{AppConfig, BusinessRecord, Coordinates, PositionSource, ResolvedRecord};
use futures::stream::{self, StreamExt};

use crate::arcgis::{self, ArcGisClient};
use crate::error::GeocodeError;
use crate::nominatim::{self, NominatimClient};

/// Endpoints and policy for a [`Geocoder`].
#[derive(Debug, Clone)]
pub struct GeocoderSettings {
    pub nominatim_url: String,
    pub arcgis_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    /// Map center used when the search region itself cannot be resolved.
    pub default_center: Coordinates,
    /// Upper bound on in-flight record lookups in [`Geocoder::resolve_records`].
    pub concurrency: usize,
}

impl Default for GeocoderSettings {
    fn default() -> Self {
        Self {
            nominatim_url: nominatim::DEFAULT_BASE_URL.to_string(),
            arcgis_url: arcgis::DEFAULT_BASE_URL.to_string(),
            user_agent: "LocalBusinessFinder/1.0".to_string(),
            timeout_secs: 10,
            // Bangalore
            default_center: Coordinates {
                latitude: 12.9716,
                longitude: 77.5946,
            },
            concurrency: 1,
        }
    }
}

impl GeocoderSettings {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            nominatim_url: config.nominatim_url.clone(),
            arcgis_url: config.arcgis_url.clone(),
            user_agent: config.geocoder_user_agent.clone(),
            timeout_secs: config.geocoder_timeout_secs,
            default_center: config.default_center,
            concurrency: config.geocode_concurrency,
        }
    }
}

pub struct Geocoder {
    primary: NominatimClient,
    secondary: ArcGisClient,
    default_center: Coordinates,
    concurrency: usize,
}

impl Geocoder {
    /// # Errors
    ///
    /// Returns [`GeocodeError`] if either provider client cannot be built
    /// (invalid base URL, TLS setup failure).
    pub fn new(settings: &GeocoderSettings) -> Result<Self, GeocodeError> {
        Ok(Self {
            primary: NominatimClient::new(
                &settings.nominatim_url,
                &settings.user_agent,
                settings.timeout_secs,
            )?,
            secondary: ArcGisClient::new(
                &settings.arcgis_url,
                &settings.user_agent,
                settings.timeout_secs,
            )?,
            default_center: settings.default_center,
            concurrency: settings.concurrency.max(1),
        })
    }

    /// # Errors
    ///
    /// See [`Geocoder::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, GeocodeError> {
        Self::new(&GeocoderSettings::from_config(config))
    }

    #[must_use]
    pub fn default_center(&self) -> Coordinates {
        self.default_center
    }

    /// Resolves `address`, trying the primary provider and then the
    /// secondary. `None` when both fail or the address is blank.
    pub async fn geocode(&self, address: &str) -> Option<Coordinates> {
        self.geocode_with_source(address)
            .await
            .map(|(coords, _)| coords)
    }

    /// Like [`Geocoder::geocode`], also reporting which provider answered.
    pub async fn geocode_with_source(&self, address: &str) -> Option<(Coordinates, PositionSource)> {
        let address = address.trim();
        if address.is_empty() {
            return None;
        }

        match self.primary.lookup(address).await {
            Ok(coords) => return Some((coords, PositionSource::Primary)),
            Err(e) => tracing::debug!(address, error = %e, "primary geocoding failed"),
        }

        match self.secondary.lookup(address).await {
            Ok(coords) => Some((coords, PositionSource::Secondary)),
            Err(e) => {
                tracing::debug!(address, error = %e, "backup geocoding failed");
                None
            }
        }
    }

    /// Map center for the search region. Always returns a position: the
    /// configured default when neither provider resolves `location_name`.
    pub async fn resolve_center(&self, location_name: &str) -> Coordinates {
        if let Some(coords) = self.geocode(location_name).await {
            return coords;
        }
        tracing::info!(
            location = location_name,
            default = %self.default_center,
            "could not geocode search region; using default map center"
        );
        self.default_center
    }

    /// Picks a map position for one record: embedded coordinates first, then
    /// the geocoded `location`, else none. Embedded pairs outside the valid
    /// ranges are skipped in favour of the address.
    pub async fn resolve_record(&self, record: BusinessRecord) -> ResolvedRecord {
        match record.coordinates {
            Some(coords) if coords.is_valid() => {
                return ResolvedRecord {
                    record,
                    position: Some(coords),
                    position_source: PositionSource::Embedded,
                };
            }
            Some(coords) => tracing::debug!(
                name = %record.name,
                coordinates = %coords,
                "embedded coordinates out of range; geocoding the address"
            ),
            None => {}
        }

        match self.geocode_with_source(&record.location).await {
            Some((coords, source)) => ResolvedRecord {
                record,
                position: Some(coords),
                position_source: source,
            },
            None => ResolvedRecord::unresolved(record),
        }
    }

    /// Resolves every record, at most `concurrency` lookups at a time. Output
    /// order matches input order.
    pub async fn resolve_records(&self, records: Vec<BusinessRecord>) -> Vec<ResolvedRecord> {
        stream::iter(records)
            .map(|record| self.resolve_record(record))
            .buffered(self.concurrency)
            .collect()
            .await
    }
}

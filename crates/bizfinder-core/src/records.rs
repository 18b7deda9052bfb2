//! Business records parsed from a completion reply, and their map positions.

use serde::{Deserialize, Serialize};

/// Placeholder name for an entry that has no name line.
pub const UNKNOWN_NAME: &str = "Unknown";

/// A WGS84 latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Returns `None` unless the pair [`is_valid`](Self::is_valid).
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        let coords = Self {
            latitude,
            longitude,
        };
        coords.is_valid().then_some(coords)
    }

    /// Both values finite and inside the latitude/longitude ranges, so the
    /// pair can be drawn on a map.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Parses `"<lat>, <lng>"`. The value must split on commas into exactly
    /// two numeric tokens. No range check is applied here; callers that
    /// plot the pair check [`is_valid`](Self::is_valid).
    #[must_use]
    pub fn parse_pair(raw: &str) -> Option<Self> {
        let mut tokens = raw.split(',');
        let latitude = tokens.next()?.trim().parse::<f64>().ok()?;
        let longitude = tokens.next()?.trim().parse::<f64>().ok()?;
        if tokens.next().is_some() {
            return None;
        }
        Some(Self {
            latitude,
            longitude,
        })
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

/// One business entry extracted from the model's reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub business_type: String,
    /// Free-text street address.
    pub location: String,
    /// Literal `"X.X/5"` as the model wrote it.
    pub rating: String,
    pub coordinates: Option<Coordinates>,
}

impl BusinessRecord {
    /// A record with only a name; every other field empty.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            business_type: String::new(),
            location: String::new(),
            rating: String::new(),
            coordinates: None,
        }
    }

    /// Whether the record is worth showing: it has a real name and something
    /// to place it with.
    #[must_use]
    pub fn is_retainable(&self) -> bool {
        self.name != UNKNOWN_NAME && (!self.location.is_empty() || self.coordinates.is_some())
    }

    /// Numerator of the `"X.X/5"` rating, if it parses and lies on the
    /// five-point scale.
    #[must_use]
    pub fn rating_value(&self) -> Option<f64> {
        self.rating
            .split('/')
            .next()
            .and_then(|n| n.trim().parse::<f64>().ok())
            .filter(|v| (0.0..=5.0).contains(v))
    }
}

/// Where a record's map position came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionSource {
    /// The reply carried a parseable `Coordinates:` line.
    Embedded,
    /// Resolved by the primary geocoding provider.
    Primary,
    /// Resolved by the secondary geocoding provider.
    Secondary,
    Unresolved,
}

/// A record paired with the position it will be drawn at, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedRecord {
    #[serde(flatten)]
    pub record: BusinessRecord,
    pub position: Option<Coordinates>,
    pub position_source: PositionSource,
}

impl ResolvedRecord {
    #[must_use]
    pub fn unresolved(record: BusinessRecord) -> Self {
        Self {
            record,
            position: None,
            position_source: PositionSource::Unresolved,
        }
    }
}

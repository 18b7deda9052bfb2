//! One business search, end to end: prompt, completion, extraction, then
//! geocoding of the map center and of every record.

use bizfinder_core::{AppConfig, Coordinates, ResolvedRecord};
use bizfinder_geo::Geocoder;
use bizfinder_llm::{build_prompt, CompletionClient, LlmError, RecordExtractor};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("please enter both a search query and a location")]
    MissingInput,

    #[error(transparent)]
    Llm(#[from] LlmError),
}

/// Non-fatal conditions reported alongside a search outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchWarning {
    /// The reply contained no usable business entries.
    ExtractionEmpty,
    /// Records were found but none of them could be placed on the map.
    NoMarkers,
}

impl SearchWarning {
    pub fn message(self) -> &'static str {
        match self {
            Self::ExtractionEmpty => {
                "No valid business locations could be extracted from the response."
            }
            Self::NoMarkers => {
                "None of the businesses could be placed on the map. Check the addresses before visiting."
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    pub query: String,
    pub location: String,
    pub center: Coordinates,
    pub records: Vec<ResolvedRecord>,
    /// Records that have a map position.
    pub marker_count: usize,
    /// Mean of the ratings that parse; `None` when none do.
    pub average_rating: Option<f64>,
    pub warnings: Vec<SearchWarning>,
}

impl SearchOutcome {
    fn assemble(
        query: &str,
        location: &str,
        center: Coordinates,
        records: Vec<ResolvedRecord>,
    ) -> Self {
        let marker_count = records
            .iter()
            .filter(|r| r.position.is_some_and(|p| p.is_valid()))
            .count();
        let mut warnings = Vec::new();
        if records.is_empty() {
            warnings.push(SearchWarning::ExtractionEmpty);
        } else if marker_count == 0 {
            warnings.push(SearchWarning::NoMarkers);
        }

        Self {
            query: query.to_owned(),
            location: location.to_owned(),
            center,
            average_rating: average_rating(&records),
            marker_count,
            records,
            warnings,
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn average_rating(records: &[ResolvedRecord]) -> Option<f64> {
    let ratings: Vec<f64> = records
        .iter()
        .filter_map(|r| r.record.rating_value())
        .collect();
    if ratings.is_empty() {
        return None;
    }
    Some(ratings.iter().sum::<f64>() / ratings.len() as f64)
}

/// Owns the completion client, geocoder, and extractor. Immutable once
/// built; shared across requests behind an `Arc`.
pub struct SearchService {
    completion: Option<CompletionClient>,
    geocoder: Geocoder,
    extractor: RecordExtractor,
}

impl SearchService {
    pub fn new(
        completion: Option<CompletionClient>,
        geocoder: Geocoder,
        extractor: RecordExtractor,
    ) -> Self {
        Self {
            completion,
            geocoder,
            extractor,
        }
    }

    /// Builds the service from configuration. A missing API key is not an
    /// error: the service starts unconfigured and every search reports it.
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let completion = match CompletionClient::from_config(config) {
            Ok(client) => Some(client),
            Err(LlmError::ClientUnconfigured) => {
                tracing::warn!("GROQ_API_KEY is not set; searches will fail until it is configured");
                None
            }
            Err(e) => return Err(e.into()),
        };
        let geocoder = Geocoder::from_config(config)?;
        let extractor = RecordExtractor::new(config.field_precedence);

        Ok(Self::new(completion, geocoder, extractor))
    }

    pub fn is_configured(&self) -> bool {
        self.completion.is_some()
    }

    /// Model name shown on the page, when a client exists.
    pub fn model(&self) -> Option<&str> {
        self.completion.as_ref().map(CompletionClient::model)
    }

    /// Runs one search.
    ///
    /// # Errors
    ///
    /// - [`SearchError::MissingInput`] when `query` or `location` is blank.
    /// - [`LlmError::ClientUnconfigured`] when no API key was configured.
    /// - [`LlmError::Upstream`] when the completion call fails.
    ///
    /// Geocoding never fails the search; unresolved places are reported
    /// through the outcome instead.
    pub async fn search(&self, query: &str, location: &str) -> Result<SearchOutcome, SearchError> {
        let query = query.trim();
        let location = location.trim();
        if query.is_empty() || location.is_empty() {
            return Err(SearchError::MissingInput);
        }

        let client = self.completion.as_ref().ok_or(LlmError::ClientUnconfigured)?;

        tracing::info!(query, location, "searching for businesses");
        let reply = client.complete(&build_prompt(query, location)).await?;
        let records = self.extractor.extract(&reply);

        let center = self.geocoder.resolve_center(location).await;
        if records.is_empty() {
            tracing::warn!(query, location, "no business entries found in the reply");
            return Ok(SearchOutcome::assemble(query, location, center, Vec::new()));
        }

        let resolved = self.geocoder.resolve_records(records).await;
        let outcome = SearchOutcome::assemble(query, location, center, resolved);
        tracing::info!(
            query,
            location,
            records = outcome.records.len(),
            markers = outcome.marker_count,
            "search complete"
        );
        Ok(outcome)
    }
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;

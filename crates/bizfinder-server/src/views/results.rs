use bizfinder_core::{PositionSource, ResolvedRecord};
use maud::{html, Markup, Render};

use super::map::MapView;
use crate::search::SearchOutcome;

/// Badges at or above this rating are shown green.
const HIGH_RATING: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RatingTone {
    High,
    Low,
    Unrated,
}

impl RatingTone {
    pub(crate) fn of(record: &ResolvedRecord) -> Self {
        match record.record.rating_value() {
            Some(v) if v >= HIGH_RATING => Self::High,
            Some(_) => Self::Low,
            None => Self::Unrated,
        }
    }

    fn class(self) -> &'static str {
        match self {
            Self::High => "rating-badge high",
            Self::Low => "rating-badge low",
            Self::Unrated => "rating-badge unrated",
        }
    }
}

fn or_na(value: &str) -> &str {
    if value.is_empty() {
        "N/A"
    } else {
        value
    }
}

fn source_label(source: PositionSource) -> &'static str {
    match source {
        PositionSource::Embedded => "from the listing",
        PositionSource::Primary | PositionSource::Secondary => "geocoded from the address",
        PositionSource::Unresolved => "not found",
    }
}

struct BusinessCard<'a>(&'a ResolvedRecord);

impl Render for BusinessCard<'_> {
    fn render(&self) -> Markup {
        let resolved = self.0;
        let record = &resolved.record;
        html! {
            div class="business-card" {
                h3 { (record.name) }
                p { strong { "Type:" } " " (record.business_type) }
                p { strong { "Location:" } " " (record.location) }
                p { span class=(RatingTone::of(resolved).class()) { (or_na(&record.rating)) } }
                @if let Some(pos) = resolved.position {
                    p {
                        small title=(source_label(resolved.position_source)) {
                            "📍 Coordinates: " (format!("{:.5}, {:.5}", pos.latitude, pos.longitude))
                        }
                    }
                }
            }
        }
    }
}

fn metric(value: &str, label: &str) -> Markup {
    html! {
        div class="metric-card" {
            div class="metric-value" { (value) }
            div class="metric-label" { (label) }
        }
    }
}

/// Warnings, metrics, cards, table, and map for one search outcome.
pub(crate) struct Results<'a>(pub(crate) &'a SearchOutcome);

impl Render for Results<'_> {
    fn render(&self) -> Markup {
        let outcome = self.0;
        let average = outcome
            .average_rating
            .map_or_else(|| "N/A".to_owned(), |avg| format!("{avg:.1}/5"));

        html! {
            @for warning in &outcome.warnings {
                div class="banner warning" { (warning.message()) }
            }
            @if !outcome.records.is_empty() {
                div class="results" {
                    section class="listing" {
                        h2 { "📋 Search Results" }
                        div class="metrics" {
                            (metric(&outcome.records.len().to_string(), "Businesses Found"))
                            (metric(&average, "Average Rating"))
                        }
                        @for resolved in &outcome.records {
                            (BusinessCard(resolved))
                        }
                        h2 { "📊 Tabular View" }
                        div class="table-container" {
                            table {
                                thead {
                                    tr { th { "Name" } th { "Type" } th { "Rating" } th { "Location" } }
                                }
                                tbody {
                                    @for resolved in &outcome.records {
                                        tr {
                                            td { (resolved.record.name) }
                                            td { (resolved.record.business_type) }
                                            td { (resolved.record.rating) }
                                            td { (resolved.record.location) }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    @if outcome.marker_count > 0 {
                        section class="map-panel" {
                            h2 { "🗺️ Map View" }
                            (MapView { center: outcome.center, records: &outcome.records })
                        }
                    }
                }
            }
        }
    }
}

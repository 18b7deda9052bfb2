//! Server-rendered search page.
//!
//! Every piece of record text passes through maud's escaping; the only raw
//! HTML is the stylesheet, the static map script, and the JSON marker island
//! built by [`map::map_payload`].

mod map;
mod results;
mod style;

use maud::{html, Markup, PreEscaped, Render, DOCTYPE};

use crate::search::{SearchError, SearchOutcome};
use results::Results;

const TITLE: &str = "Local Business Finder";

pub(crate) struct SearchPage<'a> {
    pub(crate) model: Option<&'a str>,
    pub(crate) configured: bool,
    pub(crate) query: &'a str,
    pub(crate) location: &'a str,
    /// `None` until the form has been submitted.
    pub(crate) result: Option<&'a Result<SearchOutcome, SearchError>>,
}

impl Render for SearchPage<'_> {
    fn render(&self) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    title { (TITLE) }
                    link rel="stylesheet" href=(map::LEAFLET_CSS);
                    script src=(map::LEAFLET_JS) {}
                    style { (PreEscaped(style::STYLESHEET)) }
                }
                body {
                    div class="layout" {
                        aside class="sidebar" {
                            (Sidebar { model: self.model, configured: self.configured })
                        }
                        main {
                            h1 { "📍 Local Business Search" }
                            (SearchForm { query: self.query, location: self.location })
                            @match self.result {
                                None => {}
                                Some(Err(SearchError::MissingInput)) => {
                                    div class="banner warning" { "Please enter both a search query and a location." }
                                }
                                Some(Err(e)) => {
                                    div class="banner error" {
                                        "An error occurred: " (e.to_string())
                                        br;
                                        "Please try again in a moment."
                                    }
                                }
                                Some(Ok(outcome)) => {
                                    (Results(outcome))
                                }
                            }
                            (Footer)
                        }
                    }
                }
            }
        }
    }
}

struct Sidebar<'a> {
    model: Option<&'a str>,
    configured: bool,
}

impl Render for Sidebar<'_> {
    fn render(&self) -> Markup {
        html! {
            div class="panel" {
                h2 { "About" }
                div class="panel-inner" {
                    h4 { "🔍 How it works" }
                    p { "This app asks a language model for local businesses and plots them on an interactive map." }
                    ol {
                        li { "Enter what you're looking for" }
                        li { "Specify the location" }
                        li { "Get detailed results with locations on the map" }
                    }
                }
            }
            div class="panel powered" {
                p { "Powered by" }
                h4 { (self.model.unwrap_or("no model configured")) }
            }
            @if self.configured {
                div class="status ok" { "Completion API connected" }
            } @else {
                div class="status missing" { "GROQ_API_KEY is missing. Add it to your .env file." }
            }
        }
    }
}

struct SearchForm<'a> {
    query: &'a str,
    location: &'a str,
}

impl Render for SearchForm<'_> {
    fn render(&self) -> Markup {
        html! {
            form class="search-form" method="get" action="/" {
                label class="query" {
                    "🔍 What are you looking for?"
                    input type="text" name="query" value=(self.query)
                        placeholder="e.g., coffee shops, restaurants, etc.";
                }
                label class="where" {
                    "📍 Where?"
                    input type="text" name="location" value=(self.location)
                        placeholder="e.g., Bangalore, New York, Tokyo";
                }
                button type="submit" { "🔍 Search" }
            }
        }
    }
}

struct Footer;

impl Render for Footer {
    fn render(&self) -> Markup {
        html! {
            footer {
                p {
                    small {
                        "⚠️ Note: business information is generated by AI and may not always be accurate. "
                        "Please verify details before visiting."
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "views_test.rs"]
mod tests;

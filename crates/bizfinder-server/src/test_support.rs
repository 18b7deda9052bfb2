//! Builders shared by the server's unit tests: a `SearchService` wired to
//! wiremock stand-ins for the completion endpoint and both geocoders.

use std::sync::Arc;

use bizfinder_core::Coordinates;
use bizfinder_geo::{Geocoder, GeocoderSettings};
use bizfinder_llm::{CompletionClient, RecordExtractor};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::api::AppState;
use crate::search::SearchService;

pub(crate) const DEFAULT_CENTER: Coordinates = Coordinates {
    latitude: 12.9716,
    longitude: 77.5946,
};

/// One mock server per upstream.
pub(crate) struct Upstreams {
    pub(crate) llm: MockServer,
    pub(crate) nominatim: MockServer,
    pub(crate) arcgis: MockServer,
}

impl Upstreams {
    pub(crate) async fn start() -> Self {
        Self {
            llm: MockServer::start().await,
            nominatim: MockServer::start().await,
            arcgis: MockServer::start().await,
        }
    }

    pub(crate) fn geocoder(&self) -> Geocoder {
        Geocoder::new(&GeocoderSettings {
            nominatim_url: self.nominatim.uri(),
            arcgis_url: self.arcgis.uri(),
            user_agent: "bizfinder-test/0.1".to_owned(),
            timeout_secs: 5,
            default_center: DEFAULT_CENTER,
            concurrency: 2,
        })
        .expect("geocoder")
    }

    pub(crate) fn service(&self) -> SearchService {
        let client = CompletionClient::with_base_url("test-key", &self.llm.uri()).expect("client");
        SearchService::new(Some(client), self.geocoder(), RecordExtractor::default())
    }

    /// A service whose completion client was never configured.
    pub(crate) fn unconfigured_service(&self) -> SearchService {
        SearchService::new(None, self.geocoder(), RecordExtractor::default())
    }

    pub(crate) fn state(&self) -> AppState {
        AppState {
            search: Arc::new(self.service()),
        }
    }

    pub(crate) async fn reply_with(&self, content: &str) {
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(content)))
            .mount(&self.llm)
            .await;
    }

    /// Every geocoding request on both providers fails.
    pub(crate) async fn geocoders_fail(&self) {
        for server in [&self.nominatim, &self.arcgis] {
            Mock::given(method("GET"))
                .respond_with(ResponseTemplate::new(503))
                .mount(server)
                .await;
        }
    }
}

pub(crate) fn completion_body(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
}

pub(crate) fn nominatim_hit(lat: f64, lon: f64) -> serde_json::Value {
    json!([{ "lat": lat.to_string(), "lon": lon.to_string(), "display_name": "Test Place" }])
}

pub(crate) fn unconfigured_state(upstreams: &Upstreams) -> AppState {
    AppState {
        search: Arc::new(upstreams.unconfigured_service()),
    }
}

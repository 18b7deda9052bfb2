//! Leaflet map with one marker per placed record.
//!
//! Marker data is embedded as a JSON island and read by a static script, so
//! no record text is ever interpolated into JavaScript source.

use bizfinder_core::{Coordinates, ResolvedRecord};
use maud::{html, Markup, PreEscaped, Render};
use serde::Serialize;

pub(crate) const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
pub(crate) const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

const ZOOM: u8 = 13;

const MAP_SCRIPT: &str = r"
(function () {
  var data = JSON.parse(document.getElementById('map-data').textContent);
  var map = L.map('map').setView([data.center.latitude, data.center.longitude], data.zoom);
  L.tileLayer('https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png', {
    maxZoom: 19,
    attribution: '&copy; OpenStreetMap contributors'
  }).addTo(map);
  data.markers.forEach(function (m) {
    var popup = document.createElement('div');
    popup.className = 'popup';
    var title = document.createElement('h4');
    title.textContent = m.name;
    popup.appendChild(title);
    [['Type', m.type], ['Location', m.location], ['Rating', m.rating || 'N/A']].forEach(function (row) {
      var line = document.createElement('p');
      var label = document.createElement('strong');
      label.textContent = row[0] + ': ';
      line.appendChild(label);
      line.appendChild(document.createTextNode(row[1]));
      popup.appendChild(line);
    });
    var tooltip = document.createElement('span');
    tooltip.textContent = m.name;
    L.marker([m.latitude, m.longitude])
      .bindPopup(popup, { maxWidth: 300 })
      .bindTooltip(tooltip)
      .addTo(map);
  });
})();
";

#[derive(Debug, Serialize)]
struct MapData<'a> {
    center: Coordinates,
    zoom: u8,
    markers: Vec<Marker<'a>>,
}

#[derive(Debug, Serialize)]
struct Marker<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    business_type: &'a str,
    location: &'a str,
    rating: &'a str,
    latitude: f64,
    longitude: f64,
}

/// Serializes the map center and markers for embedding inside a `<script>`
/// element. `<`, `>` and `&` are emitted as JSON unicode escapes so the
/// payload can never close the element early.
pub(crate) fn map_payload(
    center: Coordinates,
    records: &[ResolvedRecord],
) -> Result<String, serde_json::Error> {
    let markers = records
        .iter()
        .filter_map(|r| {
            r.position.filter(Coordinates::is_valid).map(|pos| Marker {
                name: &r.record.name,
                business_type: &r.record.business_type,
                location: &r.record.location,
                rating: &r.record.rating,
                latitude: pos.latitude,
                longitude: pos.longitude,
            })
        })
        .collect();

    let json = serde_json::to_string(&MapData {
        center,
        zoom: ZOOM,
        markers,
    })?;
    Ok(escape_for_script(&json))
}

fn escape_for_script(json: &str) -> String {
    json.replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
}

pub(crate) struct MapView<'a> {
    pub(crate) center: Coordinates,
    pub(crate) records: &'a [ResolvedRecord],
}

impl Render for MapView<'_> {
    fn render(&self) -> Markup {
        match map_payload(self.center, self.records) {
            Ok(payload) => html! {
                div id="map" {}
                script type="application/json" id="map-data" { (PreEscaped(payload)) }
                script { (PreEscaped(MAP_SCRIPT)) }
            },
            Err(e) => {
                tracing::error!(error = %e, "failed to serialize map markers");
                html! {
                    div class="banner error" { "Could not create map view." }
                }
            }
        }
    }
}

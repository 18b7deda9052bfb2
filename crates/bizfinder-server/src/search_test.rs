use super::*;
use crate::test_support::{nominatim_hit, Upstreams, DEFAULT_CENTER};
use bizfinder_core::PositionSource;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

const TWO_CAFES: &str = "Here are some cafes in Bangalore:\n\n\
1. Joe's Cafe\n\
Type: Cafe\n\
Location: 5 Main St\n\
Rating: 4.5/5\n\
Coordinates: 12.97, 77.59\n\n\
2. Bean There\n\
Type: Coffee Shop\n\
Location: 9 Side Rd\n\
Rating: 3.5/5\n\
Coordinates: unknown\n";

#[tokio::test]
async fn blank_input_is_rejected_before_any_call() {
    let upstreams = Upstreams::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&upstreams.llm)
        .await;

    let service = upstreams.service();
    assert!(matches!(
        service.search("", "Bangalore").await,
        Err(SearchError::MissingInput)
    ));
    assert!(matches!(
        service.search("cafes", "   ").await,
        Err(SearchError::MissingInput)
    ));
}

#[tokio::test]
async fn unconfigured_client_fails_every_search() {
    let upstreams = Upstreams::start().await;
    let service = upstreams.unconfigured_service();

    assert!(!service.is_configured());
    assert!(service.model().is_none());
    assert!(matches!(
        service.search("cafes", "Bangalore").await,
        Err(SearchError::Llm(LlmError::ClientUnconfigured))
    ));
}

#[tokio::test]
async fn upstream_failure_aborts_the_search() {
    let upstreams = Upstreams::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("model overloaded"))
        .mount(&upstreams.llm)
        .await;

    let err = upstreams
        .service()
        .search("cafes", "Bangalore")
        .await
        .unwrap_err();
    match err {
        SearchError::Llm(LlmError::Upstream { message }) => {
            assert!(message.contains("model overloaded"), "message: {message}");
        }
        other => panic!("expected upstream error, got {other:?}"),
    }
}

#[tokio::test]
async fn full_pipeline_resolves_center_and_records() {
    let upstreams = Upstreams::start().await;
    upstreams.reply_with(TWO_CAFES).await;

    Mock::given(method("GET"))
        .and(query_param("q", "Bangalore"))
        .respond_with(ResponseTemplate::new(200).set_body_json(nominatim_hit(12.9, 77.6)))
        .expect(1)
        .mount(&upstreams.nominatim)
        .await;
    Mock::given(method("GET"))
        .and(query_param("q", "9 Side Rd"))
        .respond_with(ResponseTemplate::new(200).set_body_json(nominatim_hit(12.95, 77.61)))
        .expect(1)
        .mount(&upstreams.nominatim)
        .await;
    // Joe's Cafe carries its own coordinates.
    Mock::given(method("GET"))
        .and(query_param("q", "5 Main St"))
        .respond_with(ResponseTemplate::new(200).set_body_json(nominatim_hit(0.0, 0.0)))
        .expect(0)
        .mount(&upstreams.nominatim)
        .await;

    let outcome = upstreams
        .service()
        .search("  cafes ", "Bangalore")
        .await
        .expect("search should succeed");

    assert_eq!(outcome.query, "cafes");
    assert_eq!(outcome.location, "Bangalore");
    assert_eq!(outcome.center, Coordinates::new(12.9, 77.6).unwrap());
    assert_eq!(outcome.records.len(), 2);
    assert_eq!(outcome.marker_count, 2);
    assert!(outcome.warnings.is_empty());

    let joe = &outcome.records[0];
    assert_eq!(joe.record.name, "Joe's Cafe");
    assert_eq!(joe.position_source, PositionSource::Embedded);
    assert_eq!(joe.position, Coordinates::new(12.97, 77.59));

    let bean = &outcome.records[1];
    assert_eq!(bean.record.name, "Bean There");
    assert!(bean.record.coordinates.is_none());
    assert_eq!(bean.position_source, PositionSource::Primary);

    let avg = outcome.average_rating.expect("both ratings parse");
    assert!((avg - 4.0).abs() < 1e-9);
}

#[tokio::test]
async fn refusal_yields_extraction_empty_and_no_record_geocoding() {
    let upstreams = Upstreams::start().await;
    upstreams.reply_with("Sorry, I can't help with that.").await;

    // Only the center lookup reaches the providers.
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&upstreams.nominatim)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&upstreams.arcgis)
        .await;

    let outcome = upstreams
        .service()
        .search("cafes", "Atlantis")
        .await
        .expect("an empty extraction is not an error");

    assert!(outcome.records.is_empty());
    assert_eq!(outcome.marker_count, 0);
    assert_eq!(outcome.center, DEFAULT_CENTER);
    assert_eq!(outcome.warnings, vec![SearchWarning::ExtractionEmpty]);
    assert!(outcome.average_rating.is_none());
}

#[tokio::test]
async fn unplaceable_records_yield_no_markers_warning() {
    let upstreams = Upstreams::start().await;
    upstreams
        .reply_with("1. Ghost Diner\nType: Diner\nLocation: 404 Nowhere Ln\nRating: great\n")
        .await;
    upstreams.geocoders_fail().await;

    let outcome = upstreams
        .service()
        .search("diners", "Bangalore")
        .await
        .expect("search should succeed");

    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].position_source, PositionSource::Unresolved);
    assert_eq!(outcome.marker_count, 0);
    assert_eq!(outcome.warnings, vec![SearchWarning::NoMarkers]);
    // "great" is not a number.
    assert!(outcome.average_rating.is_none());
}

#[test]
fn average_rating_skips_unparseable_ratings() {
    let rated = |rating: &str| {
        let mut record = bizfinder_core::BusinessRecord::named("Shop");
        record.location = "Somewhere".to_owned();
        record.rating = rating.to_owned();
        ResolvedRecord::unresolved(record)
    };
    let records = vec![rated("4.0/5"), rated("N/A"), rated("3.0/5"), rated(""), rated("7/10")];
    let avg = average_rating(&records).expect("two ratings parse");
    assert!((avg - 3.5).abs() < 1e-9);
}

#[test]
fn warnings_serialize_in_snake_case() {
    let json = serde_json::to_string(&[SearchWarning::ExtractionEmpty, SearchWarning::NoMarkers])
        .expect("serialize");
    assert_eq!(json, r#"["extraction_empty","no_markers"]"#);
}

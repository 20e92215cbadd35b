//! Integration tests for `OverpassClient` using wiremock HTTP mocks.

use petrol_map::domain::{Coordinate, FuelType, Geometry};
use petrol_map::overpass::{
    FindError, OverpassClient, OverpassConfig, OverpassError, SearchQuery, find_stations,
};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> OverpassClient {
    let config = OverpassConfig::default().with_base_url(format!("{}/api/interpreter", server.uri()));
    OverpassClient::new(config).expect("client construction should not fail")
}

fn archway() -> Coordinate {
    Coordinate::new(-0.1339, 51.5653).expect("valid coordinate")
}

fn stations_body() -> serde_json::Value {
    serde_json::json!({
        "version": 0.6,
        "generator": "Overpass API",
        "elements": [
            {
                "type": "node",
                "id": 101,
                "lat": 51.566,
                "lon": -0.130,
                "tags": { "amenity": "fuel", "name": "Shell Archway", "fuel:diesel": "yes" }
            },
            {
                "type": "way",
                "id": 202,
                "bounds": { "minlat": 51.570, "minlon": -0.120, "maxlat": 51.572, "maxlon": -0.118 },
                "geometry": [
                    { "lat": 51.570, "lon": -0.120 },
                    { "lat": 51.570, "lon": -0.118 },
                    { "lat": 51.572, "lon": -0.118 },
                    { "lat": 51.572, "lon": -0.120 },
                    { "lat": 51.570, "lon": -0.120 }
                ],
                "tags": { "amenity": "fuel", "operator": "Tesco" }
            }
        ]
    })
}

#[tokio::test]
async fn fetch_stations_posts_query_and_parses_elements() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/interpreter"))
        .and(body_string_contains("data="))
        .and(body_string_contains("fuel%3Adiesel"))
        .and(body_string_contains("around%3A3000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stations_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let query = SearchQuery::new(archway(), 3000, FuelType::Diesel).expect("valid query");
    let features = client.fetch_stations(&query).await.expect("should parse");

    assert_eq!(features.len(), 2);
    assert_eq!(features[0].tag("name"), Some("Shell Archway"));
    assert!(matches!(features[0].geometry, Some(Geometry::Point(_))));
    assert_eq!(features[1].tag("operator"), Some("Tesco"));
    assert!(matches!(features[1].geometry, Some(Geometry::Polygon(ref ring)) if ring.len() == 5));
}

#[tokio::test]
async fn empty_result_is_nothing_found() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/interpreter"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "elements": [] })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let result = find_stations(&client, archway(), 3000, FuelType::Lh2).await;

    assert!(matches!(result, Err(FindError::NothingFound)), "got: {result:?}");
}

#[tokio::test]
async fn runtime_remark_is_an_error() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "elements": [],
        "remark": "runtime error: Query timed out in \"query\" at line 1 after 26 seconds."
    });
    Mock::given(method("POST"))
        .and(path("/api/interpreter"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let query = SearchQuery::new(archway(), 3000, FuelType::E10).expect("valid query");
    let result = client.fetch_stations(&query).await;

    assert!(
        matches!(result, Err(OverpassError::Remark(ref r)) if r.contains("timed out")),
        "got: {result:?}"
    );
}

#[tokio::test]
async fn too_many_requests_is_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/interpreter"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let result = find_stations(&client, archway(), 3000, FuelType::Lpg).await;

    assert!(
        matches!(result, Err(FindError::Unavailable(OverpassError::RateLimited))),
        "got: {result:?}"
    );
}

#[tokio::test]
async fn gateway_timeout_is_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/interpreter"))
        .respond_with(ResponseTemplate::new(504).set_body_string("Gateway Timeout"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let query = SearchQuery::new(archway(), 3000, FuelType::Octane95).expect("valid query");
    let result = client.fetch_stations(&query).await;

    assert!(
        matches!(result, Err(OverpassError::Api { status: 504, .. })),
        "got: {result:?}"
    );
}

#[tokio::test]
async fn zero_radius_never_reaches_server() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stations_body()))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let result = find_stations(&client, archway(), 0, FuelType::Diesel).await;

    assert!(matches!(result, Err(FindError::InvalidQuery(_))), "got: {result:?}");
}

// SPDX-License-Identifier: Apache-2.0

//! Endpoint contract tests: flat JSON arrays, permissive parameters,
//! ETag revalidation, structured errors.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tonight_model::{Category, Coordinates, Rating, Venue};
use tonight_query::{run_query, CatalogQuery};
use tonight_server::{build_router, AppState};
use tonight_store::{FixtureStore, RecordStore, StaticStore};
use tower::ServiceExt;

fn fixture_router() -> Router {
    let store = FixtureStore::load().expect("fixtures load");
    build_router(AppState::new(Arc::new(store)))
}

async fn get_response(app: &Router, uri: &str) -> axum::response::Response {
    app.clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response")
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = get_response(app, uri).await;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, value)
}

fn titles(body: &Value) -> Vec<&str> {
    body.as_array()
        .expect("array body")
        .iter()
        .map(|item| item["title"].as_str().expect("title"))
        .collect()
}

fn ids(body: &Value) -> Vec<u64> {
    body.as_array()
        .expect("array body")
        .iter()
        .map(|item| item["id"].as_u64().expect("id"))
        .collect()
}

#[tokio::test]
async fn healthz_is_alive() {
    let app = fixture_router();
    let response = get_response(&app, "/healthz").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn collections_are_flat_arrays_without_an_envelope() {
    let app = fixture_router();
    for uri in ["/events", "/venues", "/guestlists"] {
        let (status, body) = get_json(&app, uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().expect("flat array").len(), 6);
    }
}

#[tokio::test]
async fn featured_events_match_the_fixture_scenario() {
    let app = fixture_router();
    let (status, body) = get_json(&app, "/events?featured=true").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body), vec!["Saturday Night Live DJ", "DJ Tiesto Live"]);
}

#[tokio::test]
async fn nightclub_venues_keep_original_relative_order() {
    let app = fixture_router();
    let (status, body) = get_json(&app, "/venues?type=Nightclub").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![1, 3, 4]);
}

#[tokio::test]
async fn server_side_filtering_equals_engine_side_filtering() {
    let app = fixture_router();
    let (_, filtered) = get_json(&app, "/venues?type=Nightclub").await;

    let store = FixtureStore::load().expect("fixtures load");
    let venues = store.venues().await.expect("venues");
    let query = CatalogQuery {
        category: Some("Nightclub".to_string()),
        ..CatalogQuery::default()
    };
    let engine_ids: Vec<u64> = run_query(&venues, &query)
        .iter()
        .map(|venue| u64::from(venue.id))
        .collect();
    assert_eq!(ids(&filtered), engine_ids);
}

#[tokio::test]
async fn guestlists_filter_by_venue_substring_and_date() {
    let app = fixture_router();
    let (_, by_venue) = get_json(&app, "/guestlists?venue=rebel").await;
    assert_eq!(ids(&by_venue), vec![4]);

    let (_, by_date) = get_json(&app, "/guestlists?date=May%2020,%202023").await;
    assert_eq!(ids(&by_date), vec![2, 4]);
}

#[tokio::test]
async fn unrecognized_values_match_nothing_with_status_200() {
    let app = fixture_router();
    let (status, body) = get_json(&app, "/venues?type=Stadium").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().expect("array").len(), 0);
}

#[tokio::test]
async fn unknown_parameters_return_the_full_collection() {
    let app = fixture_router();
    let (status, body) = get_json(&app, "/events?page=2&per_page=10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().expect("array").len(), 6);
}

#[tokio::test]
async fn events_sort_by_price_puts_cheapest_first() {
    let app = fixture_router();
    let (_, body) = get_json(&app, "/events?sort=price").await;
    let prices: Vec<&str> = body
        .as_array()
        .expect("array")
        .iter()
        .map(|item| item["price"].as_str().expect("price"))
        .collect();
    assert_eq!(prices, vec!["15", "20", "30", "35", "40", "45"]);
}

#[tokio::test]
async fn detail_routes_return_the_record_or_a_structured_404() {
    let app = fixture_router();
    let (status, body) = get_json(&app, "/events/4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "DJ Tiesto Live");

    let (status, body) = get_json(&app, "/events/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "not_found");
    assert_eq!(body["error"]["details"]["id"], 999);
}

#[tokio::test]
async fn collection_etag_revalidates_with_304() {
    let app = fixture_router();
    let first = get_response(&app, "/venues").await;
    assert_eq!(first.status(), StatusCode::OK);
    let etag = first
        .headers()
        .get("etag")
        .expect("etag header")
        .to_str()
        .expect("ascii etag")
        .to_string();
    assert!(first.headers().contains_key("cache-control"));

    let revalidation = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/venues")
                .header("if-none-match", &etag)
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(revalidation.status(), StatusCode::NOT_MODIFIED);
    let bytes = to_bytes(revalidation.into_body(), usize::MAX)
        .await
        .expect("body");
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn different_filters_produce_different_etags() {
    let app = fixture_router();
    let all = get_response(&app, "/venues").await;
    let filtered = get_response(&app, "/venues?type=Bar").await;
    assert_ne!(
        all.headers().get("etag").expect("etag"),
        filtered.headers().get("etag").expect("etag")
    );
}

fn pin_venue(id: u32, name: &str, coordinates: Option<Coordinates>) -> Venue {
    Venue {
        id,
        name: name.to_string(),
        image: String::new(),
        location: "King St W, Toronto".to_string(),
        venue_type: Category::parse("Nightclub").expect("type"),
        rating: Rating::parse(4.2).expect("rating"),
        music_type: "House".to_string(),
        description: String::new(),
        is_open: true,
        trending: false,
        tags: Vec::new(),
        hours: BTreeMap::new(),
        coordinates,
    }
}

#[tokio::test]
async fn map_pins_skip_broken_coordinates_and_mark_the_active_venue() {
    let store = StaticStore::with_venues(vec![
        pin_venue(1, "Rebel Nightclub", Some(Coordinates { lat: 43.64, lng: -79.36 })),
        pin_venue(2, "No Fix", None),
        pin_venue(3, "CODA", Some(Coordinates { lat: 43.67, lng: -79.41 })),
    ]);
    let app = build_router(AppState::new(Arc::new(store)));

    let (status, body) = get_json(&app, "/map/pins?active=3").await;
    assert_eq!(status, StatusCode::OK);
    let pins = body["pins"].as_array().expect("pins");
    assert_eq!(pins.len(), 2);
    assert_eq!(pins[0]["id"], 3);
    assert_eq!(pins[0]["active"], true);
    assert_eq!(pins[1]["active"], false);
    assert_eq!(body["center"]["lat"], pins[0]["coordinates"]["lat"]);
}

#[tokio::test]
async fn map_pins_center_on_the_city_when_nothing_is_active() {
    let app = fixture_router();
    let (_, body) = get_json(&app, "/map/pins").await;
    assert_eq!(body["pins"].as_array().expect("pins").len(), 6);
    assert_eq!(body["center"]["lat"], 43.6532);
}

#[tokio::test]
async fn store_failure_surfaces_as_a_structured_500() {
    let store = StaticStore {
        unavailable: true,
        ..StaticStore::default()
    };
    let app = build_router(AppState::new(Arc::new(store)));
    let (status, body) = get_json(&app, "/events").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "dependency_failure");
}

// SPDX-License-Identifier: Apache-2.0

//! The concrete catalog scenarios the listing pages are built around,
//! exercised against the embedded fixture data.

use tonight_query::{run_query, CatalogQuery, Flag, FlagFilter, SortKey};
use tonight_store::{FixtureStore, RecordStore};

#[tokio::test]
async fn nightclub_filter_returns_the_three_nightclubs_in_order() {
    let store = FixtureStore::load().expect("fixtures load");
    let venues = store.venues().await.expect("venues");
    let query = CatalogQuery {
        category: Some("Nightclub".to_string()),
        ..CatalogQuery::default()
    };
    let hits = run_query(&venues, &query);
    let ids: Vec<u32> = hits.iter().map(|v| v.id).collect();
    assert_eq!(ids, vec![1, 3, 4]);
    let names: Vec<&str> = hits.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["Rebel Nightclub", "CODA", "Toybox Nightclub"]);
}

#[tokio::test]
async fn featured_filter_returns_the_two_featured_events() {
    let store = FixtureStore::load().expect("fixtures load");
    let events = store.events().await.expect("events");
    let query = CatalogQuery {
        flag: Some(FlagFilter {
            flag: Flag::Featured,
            value: true,
        }),
        ..CatalogQuery::default()
    };
    let titles: Vec<String> = run_query(&events, &query)
        .into_iter()
        .map(|event| event.title)
        .collect();
    assert_eq!(titles, vec!["Saturday Night Live DJ", "DJ Tiesto Live"]);
}

#[tokio::test]
async fn guestlist_venue_substring_matches_case_insensitively() {
    let store = FixtureStore::load().expect("fixtures load");
    let guestlists = store.guestlists().await.expect("guestlists");
    let query = CatalogQuery {
        venue: Some("coda".to_string()),
        ..CatalogQuery::default()
    };
    let hits = run_query(&guestlists, &query);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 5);
}

#[tokio::test]
async fn guestlist_date_filter_compares_calendar_equality() {
    let store = FixtureStore::load().expect("fixtures load");
    let guestlists = store.guestlists().await.expect("guestlists");
    let query = CatalogQuery {
        date: Some("May 20, 2023".to_string()),
        ..CatalogQuery::default()
    };
    let ids: Vec<u32> = run_query(&guestlists, &query)
        .into_iter()
        .map(|list| list.id)
        .collect();
    assert_eq!(ids, vec![2, 4]);
}

#[tokio::test]
async fn event_date_sort_crosses_month_boundaries_correctly() {
    let store = FixtureStore::load().expect("fixtures load");
    let events = store.events().await.expect("events");
    let query = CatalogQuery {
        sort: Some(SortKey::Date),
        ..CatalogQuery::default()
    };
    let ids: Vec<u32> = run_query(&events, &query)
        .into_iter()
        .map(|event| event.id)
        .collect();
    // The June events land last; raw string comparison would have
    // interleaved them before the May dates.
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
}

#[tokio::test]
async fn every_fixture_venue_carries_mappable_coordinates() {
    let store = FixtureStore::load().expect("fixtures load");
    let venues = store.venues().await.expect("venues");
    assert!(venues.iter().all(|v| v.map_coordinates().is_some()));
}

// SPDX-License-Identifier: Apache-2.0

use crate::{RecordStore, StoreError};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::collections::BTreeSet;
use tonight_model::{Event, Guestlist, Venue};

const EVENTS_JSON: &str = include_str!("../fixtures/events.json");
const VENUES_JSON: &str = include_str!("../fixtures/venues.json");
const GUESTLISTS_JSON: &str = include_str!("../fixtures/guestlists.json");

/// The static catalog, embedded at compile time.
///
/// `load` is where every ingestion invariant is enforced: dates and
/// prices must parse, ratings must be in range (the model's serde does
/// this), and ids must be unique within a collection. A fixture that
/// violates any of these never becomes a store.
#[derive(Debug, Clone)]
pub struct FixtureStore {
    events: Vec<Event>,
    venues: Vec<Venue>,
    guestlists: Vec<Guestlist>,
}

impl FixtureStore {
    pub fn load() -> Result<Self, StoreError> {
        Ok(Self {
            events: decode_collection("events", EVENTS_JSON)?,
            venues: decode_collection("venues", VENUES_JSON)?,
            guestlists: decode_collection("guestlists", GUESTLISTS_JSON)?,
        })
    }

    #[must_use]
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn venue_count(&self) -> usize {
        self.venues.len()
    }

    #[must_use]
    pub fn guestlist_count(&self) -> usize {
        self.guestlists.len()
    }
}

#[async_trait]
impl RecordStore for FixtureStore {
    async fn events(&self) -> Result<Vec<Event>, StoreError> {
        Ok(self.events.clone())
    }

    async fn venues(&self) -> Result<Vec<Venue>, StoreError> {
        Ok(self.venues.clone())
    }

    async fn guestlists(&self) -> Result<Vec<Guestlist>, StoreError> {
        Ok(self.guestlists.clone())
    }
}

trait HasId {
    fn record_id(&self) -> u32;
}

impl HasId for Event {
    fn record_id(&self) -> u32 {
        self.id
    }
}

impl HasId for Venue {
    fn record_id(&self) -> u32 {
        self.id
    }
}

impl HasId for Guestlist {
    fn record_id(&self) -> u32 {
        self.id
    }
}

fn decode_collection<T: DeserializeOwned + HasId>(
    collection: &'static str,
    raw: &str,
) -> Result<Vec<T>, StoreError> {
    let records: Vec<T> = serde_json::from_str(raw).map_err(|e| StoreError::Decode {
        collection,
        message: e.to_string(),
    })?;
    let mut seen = BTreeSet::new();
    for record in &records {
        if !seen.insert(record.record_id()) {
            return Err(StoreError::DuplicateId {
                collection,
                id: record.record_id(),
            });
        }
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_fixtures_load_and_validate() {
        let store = FixtureStore::load().expect("fixtures load");
        assert_eq!(store.event_count(), 6);
        assert_eq!(store.venue_count(), 6);
        assert_eq!(store.guestlist_count(), 6);
    }

    #[test]
    fn duplicate_ids_are_a_load_error() {
        let raw = r#"[
            {"id": 1, "title": "A", "image": "/a.jpg", "date": "May 19, 2023",
             "venue": "CODA", "perks": "Free entry", "spots": 10,
             "description": "", "requirements": "", "contact": "a@b.c"},
            {"id": 1, "title": "B", "image": "/b.jpg", "date": "May 20, 2023",
             "venue": "Rebel Nightclub", "perks": "Priority entry", "spots": 12,
             "description": "", "requirements": "", "contact": "a@b.c"}
        ]"#;
        let err = decode_collection::<Guestlist>("guestlists", raw).unwrap_err();
        assert_eq!(
            err,
            StoreError::DuplicateId {
                collection: "guestlists",
                id: 1
            }
        );
    }

    #[test]
    fn malformed_date_is_a_load_error() {
        let raw = r#"[
            {"id": 1, "title": "A", "image": "/a.jpg", "date": "sometime soon",
             "venue": "CODA", "perks": "Free entry", "spots": 10,
             "description": "", "requirements": "", "contact": "a@b.c"}
        ]"#;
        let err = decode_collection::<Guestlist>("guestlists", raw).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Decode {
                collection: "guestlists",
                ..
            }
        ));
    }

    #[test]
    fn out_of_range_rating_is_a_load_error() {
        let raw = r#"[
            {"id": 1, "name": "A", "image": "/a.jpg", "location": "x",
             "type": "Bar", "rating": 5.5, "musicType": "House",
             "description": "", "isOpen": true, "trending": false,
             "tags": [], "hours": {}, "coordinates": {"lat": 43.6, "lng": -79.4}}
        ]"#;
        let err = decode_collection::<Venue>("venues", raw).unwrap_err();
        assert!(matches!(err, StoreError::Decode { .. }));
    }

    #[tokio::test]
    async fn snapshots_are_owned_copies() {
        let store = FixtureStore::load().expect("fixtures load");
        let mut first = store.events().await.expect("events");
        first.clear();
        let second = store.events().await.expect("events");
        assert_eq!(second.len(), 6);
    }
}

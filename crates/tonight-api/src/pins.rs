// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use tonight_model::{Coordinates, Venue};

/// Default map center when no pin is active: downtown Toronto.
pub const CITY_CENTER: Coordinates = Coordinates {
    lat: 43.6532,
    lng: -79.3832,
};

/// One plottable venue. Only venues with valid coordinates become
/// pins; the rest stay listable but drop off the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VenuePin {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub venue_type: String,
    pub address: String,
    pub coordinates: Coordinates,
    pub active: bool,
}

/// The map feed: a center to frame the view plus the pins to draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MapPins {
    pub center: Coordinates,
    pub pins: Vec<VenuePin>,
}

/// Projects venues onto map pins.
///
/// Invalid or missing coordinates are silently skipped. When `active`
/// names a plotted venue, its pin is marked and moved to the front and
/// the view centers on it; otherwise the city center frames the map.
#[must_use]
pub fn venue_pins(venues: &[Venue], active: Option<u32>) -> MapPins {
    let mut pins: Vec<VenuePin> = venues
        .iter()
        .filter_map(|venue| {
            let coordinates = venue.map_coordinates()?;
            Some(VenuePin {
                id: venue.id,
                name: venue.name.clone(),
                venue_type: venue.venue_type.as_str().to_string(),
                address: venue.location.clone(),
                coordinates,
                active: active == Some(venue.id),
            })
        })
        .collect();

    let mut center = CITY_CENTER;
    if let Some(index) = pins.iter().position(|pin| pin.active) {
        let pin = pins.remove(index);
        center = pin.coordinates;
        pins.insert(0, pin);
    }
    MapPins { center, pins }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tonight_model::{Category, Rating};

    fn venue(id: u32, name: &str, coordinates: Option<Coordinates>) -> Venue {
        Venue {
            id,
            name: name.to_string(),
            image: String::new(),
            location: "King St W, Toronto".to_string(),
            venue_type: Category::parse("Nightclub").expect("test type"),
            rating: Rating::parse(4.0).expect("test rating"),
            music_type: "House".to_string(),
            description: String::new(),
            is_open: true,
            trending: false,
            tags: Vec::new(),
            hours: BTreeMap::new(),
            coordinates,
        }
    }

    #[test]
    fn invalid_and_missing_coordinates_are_skipped() {
        let venues = vec![
            venue(1, "Rebel Nightclub", Some(Coordinates { lat: 43.64, lng: -79.36 })),
            venue(2, "No Fix", None),
            venue(3, "Null Island", Some(Coordinates { lat: 0.0, lng: 0.0 })),
            venue(4, "Off The Charts", Some(Coordinates { lat: 120.0, lng: -79.4 })),
        ];
        let feed = venue_pins(&venues, None);
        let ids: Vec<u32> = feed.pins.iter().map(|pin| pin.id).collect();
        assert_eq!(ids, vec![1]);
        assert_eq!(feed.center, CITY_CENTER);
    }

    #[test]
    fn active_pin_is_marked_first_and_recenters_the_view() {
        let venues = vec![
            venue(1, "Rebel Nightclub", Some(Coordinates { lat: 43.64, lng: -79.36 })),
            venue(3, "CODA", Some(Coordinates { lat: 43.67, lng: -79.41 })),
        ];
        let feed = venue_pins(&venues, Some(3));
        assert_eq!(feed.pins[0].id, 3);
        assert!(feed.pins[0].active);
        assert!(!feed.pins[1].active);
        assert_eq!(feed.center, feed.pins[0].coordinates);
    }

    #[test]
    fn active_id_without_a_pin_falls_back_to_city_center() {
        let venues = vec![venue(2, "No Fix", None)];
        let feed = venue_pins(&venues, Some(2));
        assert!(feed.pins.is_empty());
        assert_eq!(feed.center, CITY_CENTER);
    }
}

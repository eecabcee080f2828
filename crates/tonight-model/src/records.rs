// SPDX-License-Identifier: Apache-2.0

use crate::values::{Category, Coordinates, EventDate, Price, Rating};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One night on the calendar: a party, a DJ set, a takeover.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Event {
    pub id: u32,
    pub title: String,
    pub image: String,
    pub date: EventDate,
    /// Denormalized display name; not a key into the venue collection.
    #[serde(rename = "venue")]
    pub venue_name: String,
    /// Display range, e.g. `"10:00 PM - 3:00 AM"`.
    pub time: String,
    pub price: Price,
    pub category: Category,
    pub featured: bool,
    pub description: String,
    pub location: EventLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventLocation {
    pub address: String,
    pub lat: f64,
    pub lng: f64,
}

impl EventLocation {
    #[must_use]
    pub fn coordinates(&self) -> Option<Coordinates> {
        let coords = Coordinates {
            lat: self.lat,
            lng: self.lng,
        };
        coords.is_valid().then_some(coords)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Venue {
    pub id: u32,
    pub name: String,
    pub image: String,
    /// Free-form address text.
    pub location: String,
    #[serde(rename = "type")]
    pub venue_type: Category,
    pub rating: Rating,
    /// Comma-separated genres, e.g. `"Techno, House"`.
    #[serde(rename = "musicType")]
    pub music_type: String,
    pub description: String,
    #[serde(rename = "isOpen")]
    pub is_open: bool,
    pub trending: bool,
    pub tags: Vec<String>,
    pub hours: BTreeMap<String, String>,
    pub coordinates: Option<Coordinates>,
}

impl Venue {
    #[must_use]
    pub fn music_types(&self) -> Vec<String> {
        tonight_core::split_comma_list(&self.music_type)
    }

    /// Coordinates fit for a map pin, or `None` when absent or broken.
    #[must_use]
    pub fn map_coordinates(&self) -> Option<Coordinates> {
        self.coordinates.filter(|coords| coords.is_valid())
    }
}

/// A signup promotion for one night at one venue. `spots` is display
/// capacity only; nothing decrements it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Guestlist {
    pub id: u32,
    pub title: String,
    pub image: String,
    pub date: EventDate,
    #[serde(rename = "venue")]
    pub venue_name: String,
    /// Comma-separated perks, split for display.
    pub perks: String,
    pub spots: u32,
    pub description: String,
    pub requirements: String,
    pub contact: String,
}

impl Guestlist {
    #[must_use]
    pub fn perk_list(&self) -> Vec<String> {
        tonight_core::split_comma_list(&self.perks)
    }
}

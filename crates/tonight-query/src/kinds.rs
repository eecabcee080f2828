// SPDX-License-Identifier: Apache-2.0

use crate::engine::CatalogRecord;
use crate::query::Flag;
use tonight_model::{Category, Event, EventDate, Guestlist, Price, Rating, Venue};

impl CatalogRecord for Event {
    fn id(&self) -> u32 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.venue_name, self.category.as_str()]
    }

    fn category(&self) -> Option<&Category> {
        Some(&self.category)
    }

    fn flag(&self, flag: Flag) -> Option<bool> {
        match flag {
            Flag::Featured => Some(self.featured),
            Flag::Trending | Flag::Open => None,
        }
    }

    fn venue_name(&self) -> Option<&str> {
        Some(&self.venue_name)
    }

    fn date(&self) -> Option<EventDate> {
        Some(self.date)
    }

    fn price(&self) -> Option<Price> {
        Some(self.price)
    }

    fn rating(&self) -> Option<Rating> {
        None
    }

    fn display_name(&self) -> &str {
        &self.title
    }
}

impl CatalogRecord for Venue {
    fn id(&self) -> u32 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.location, &self.music_type]
    }

    fn category(&self) -> Option<&Category> {
        Some(&self.venue_type)
    }

    fn flag(&self, flag: Flag) -> Option<bool> {
        match flag {
            Flag::Trending => Some(self.trending),
            Flag::Open => Some(self.is_open),
            Flag::Featured => None,
        }
    }

    fn venue_name(&self) -> Option<&str> {
        None
    }

    fn date(&self) -> Option<EventDate> {
        None
    }

    fn price(&self) -> Option<Price> {
        None
    }

    fn rating(&self) -> Option<Rating> {
        Some(self.rating)
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

impl CatalogRecord for Guestlist {
    fn id(&self) -> u32 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.venue_name]
    }

    fn category(&self) -> Option<&Category> {
        None
    }

    fn flag(&self, _flag: Flag) -> Option<bool> {
        None
    }

    fn venue_name(&self) -> Option<&str> {
        Some(&self.venue_name)
    }

    fn date(&self) -> Option<EventDate> {
        Some(self.date)
    }

    fn price(&self) -> Option<Price> {
        None
    }

    fn rating(&self) -> Option<Rating> {
        None
    }

    fn display_name(&self) -> &str {
        &self.title
    }
}

// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;
use tonight_query::{CatalogQuery, Flag, FlagFilter, SortKey};

/// `true/1` and `false/0`, any ASCII case. Anything else is `None` and
/// the flag filter is dropped, never an error.
#[must_use]
pub fn parse_bool_param(raw: &str) -> Option<bool> {
    let token = raw.trim();
    if token == "1" || token.eq_ignore_ascii_case("true") {
        Some(true)
    } else if token == "0" || token.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn nonempty(query: &BTreeMap<String, String>, name: &str) -> Option<String> {
    query
        .get(name)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn bool_param(query: &BTreeMap<String, String>, name: &str) -> Option<bool> {
    query.get(name).and_then(|raw| parse_bool_param(raw))
}

fn sort_param(query: &BTreeMap<String, String>) -> Option<SortKey> {
    query.get("sort").and_then(|raw| SortKey::parse(raw))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListEventsParams {
    pub category: Option<String>,
    pub featured: Option<bool>,
    pub search: Option<String>,
    pub venue: Option<String>,
    pub date: Option<String>,
    pub sort: Option<SortKey>,
}

#[must_use]
pub fn parse_list_events_params(query: &BTreeMap<String, String>) -> ListEventsParams {
    ListEventsParams {
        category: nonempty(query, "category"),
        featured: bool_param(query, "featured"),
        search: nonempty(query, "search"),
        venue: nonempty(query, "venue"),
        date: nonempty(query, "date"),
        sort: sort_param(query),
    }
}

impl ListEventsParams {
    #[must_use]
    pub fn to_query(&self) -> CatalogQuery {
        CatalogQuery {
            search: self.search.clone(),
            category: self.category.clone(),
            flag: self.featured.map(|value| FlagFilter {
                flag: Flag::Featured,
                value,
            }),
            venue: self.venue.clone(),
            date: self.date.clone(),
            sort: self.sort,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListVenuesParams {
    pub venue_type: Option<String>,
    pub trending: Option<bool>,
    pub open: Option<bool>,
    pub search: Option<String>,
    pub sort: Option<SortKey>,
}

#[must_use]
pub fn parse_list_venues_params(query: &BTreeMap<String, String>) -> ListVenuesParams {
    ListVenuesParams {
        venue_type: nonempty(query, "type"),
        trending: bool_param(query, "trending"),
        open: bool_param(query, "open"),
        search: nonempty(query, "search"),
        sort: sort_param(query),
    }
}

impl ListVenuesParams {
    #[must_use]
    pub fn to_query(&self) -> CatalogQuery {
        // `trending` wins when both boolean filters are present; the
        // endpoint documents one flag per request.
        let flag = self
            .trending
            .map(|value| FlagFilter {
                flag: Flag::Trending,
                value,
            })
            .or_else(|| {
                self.open.map(|value| FlagFilter {
                    flag: Flag::Open,
                    value,
                })
            });
        CatalogQuery {
            search: self.search.clone(),
            category: self.venue_type.clone(),
            flag,
            venue: None,
            date: None,
            sort: self.sort,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListGuestlistsParams {
    pub venue: Option<String>,
    pub date: Option<String>,
    pub search: Option<String>,
    pub sort: Option<SortKey>,
}

#[must_use]
pub fn parse_list_guestlists_params(query: &BTreeMap<String, String>) -> ListGuestlistsParams {
    ListGuestlistsParams {
        venue: nonempty(query, "venue"),
        date: nonempty(query, "date"),
        search: nonempty(query, "search"),
        sort: sort_param(query),
    }
}

impl ListGuestlistsParams {
    #[must_use]
    pub fn to_query(&self) -> CatalogQuery {
        CatalogQuery {
            search: self.search.clone(),
            category: None,
            flag: None,
            venue: self.venue.clone(),
            date: self.date.clone(),
            sort: self.sort,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapPinsParams {
    pub venue_type: Option<String>,
    pub trending: Option<bool>,
    pub open: Option<bool>,
    pub search: Option<String>,
    /// Venue id whose pin is highlighted. A non-numeric value is
    /// ignored, matching the permissive list-parameter policy.
    pub active: Option<u32>,
}

#[must_use]
pub fn parse_map_pins_params(query: &BTreeMap<String, String>) -> MapPinsParams {
    MapPinsParams {
        venue_type: nonempty(query, "type"),
        trending: bool_param(query, "trending"),
        open: bool_param(query, "open"),
        search: nonempty(query, "search"),
        active: query.get("active").and_then(|raw| raw.trim().parse().ok()),
    }
}

impl MapPinsParams {
    #[must_use]
    pub fn to_query(&self) -> CatalogQuery {
        ListVenuesParams {
            venue_type: self.venue_type.clone(),
            trending: self.trending,
            open: self.open,
            search: self.search.clone(),
            sort: None,
        }
        .to_query()
    }
}

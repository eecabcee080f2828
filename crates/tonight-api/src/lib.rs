#![forbid(unsafe_code)]
//! HTTP contract layer for the tonight catalog.
//!
//! Query strings parse permissively into typed per-kind parameter
//! structs: an unknown parameter is ignored, an unrecognized value
//! drops its filter or matches nothing, and nothing here produces a
//! 4xx for a bad list query. [`ApiError`] is reserved for not-found
//! and internal faults.

mod errors;
mod params;
mod pins;

pub use errors::{ApiError, ApiErrorCode};
pub use params::{
    parse_bool_param, parse_list_events_params, parse_list_guestlists_params,
    parse_list_venues_params, parse_map_pins_params, ListEventsParams, ListGuestlistsParams,
    ListVenuesParams, MapPinsParams,
};
pub use pins::{venue_pins, MapPins, VenuePin, CITY_CENTER};

pub const CRATE_NAME: &str = "tonight-api";

#![forbid(unsafe_code)]
//! Record model SSOT for the tonight catalog.
//!
//! Records are immutable catalog entries: parsed once at load, never
//! mutated at runtime. Value types carry their invariants (`Price`
//! keeps the `"Free"` sentinel sortable, `EventDate` is a calendar
//! date, never a display string) so the query and HTTP layers cannot
//! reintroduce stringly-typed comparisons.

mod records;
mod values;

pub use records::{Event, EventLocation, Guestlist, Venue};
pub use values::{
    Category, Coordinates, EventDate, ParseError, Price, Rating, CATEGORY_MAX_LEN,
};

pub const CRATE_NAME: &str = "tonight-model";

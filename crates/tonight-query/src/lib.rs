#![forbid(unsafe_code)]
//! Catalog query engine.
//!
//! Every listing surface (events, venues, guestlists, the map list
//! view) filters and sorts through [`run_query`], so server-side and
//! client-side behavior cannot drift apart. The engine is pure: it
//! never mutates its input, performs no I/O, and degrades silently on
//! queries that do not apply to a record kind.

mod engine;
mod kinds;
mod query;

pub use engine::{run_query, CatalogRecord};
pub use query::{CatalogQuery, Flag, FlagFilter, SortKey};

pub const CRATE_NAME: &str = "tonight-query";

#![forbid(unsafe_code)]
//! Record store for the tonight catalog.
//!
//! The catalog is a static fixture: records are parsed and validated
//! once at load and never change afterwards. The [`RecordStore`] trait
//! keeps the store behind an async seam so a database-backed
//! implementation can replace [`FixtureStore`] without touching the
//! query or HTTP layers.

use async_trait::async_trait;
use std::fmt::{Display, Formatter};
use tonight_model::{Event, Guestlist, Venue};

mod fake;
mod fixture;

pub use fake::StaticStore;
pub use fixture::FixtureStore;

pub const CRATE_NAME: &str = "tonight-store";

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreError {
    Decode {
        collection: &'static str,
        message: String,
    },
    DuplicateId {
        collection: &'static str,
        id: u32,
    },
    Unavailable {
        collection: &'static str,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decode {
                collection,
                message,
            } => write!(f, "{collection} fixture failed to decode: {message}"),
            Self::DuplicateId { collection, id } => {
                write!(f, "{collection} fixture repeats id {id}")
            }
            Self::Unavailable { collection } => {
                write!(f, "{collection} collection unavailable")
            }
        }
    }
}

impl std::error::Error for StoreError {}

/// Read-only source of record snapshots.
///
/// Implementations return owned copies; callers filter and sort their
/// copy locally and discard it, so no locking is needed over the
/// immutable catalog.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn events(&self) -> Result<Vec<Event>, StoreError>;
    async fn venues(&self) -> Result<Vec<Venue>, StoreError>;
    async fn guestlists(&self) -> Result<Vec<Guestlist>, StoreError>;
}

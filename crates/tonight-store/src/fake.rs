// SPDX-License-Identifier: Apache-2.0

use crate::{RecordStore, StoreError};
use async_trait::async_trait;
use tonight_model::{Event, Guestlist, Venue};

/// In-memory store double for tests.
///
/// Holds whatever records a test puts in it; `unavailable` makes every
/// read fail, for exercising the dependency-failure path.
#[derive(Debug, Clone, Default)]
pub struct StaticStore {
    pub events: Vec<Event>,
    pub venues: Vec<Venue>,
    pub guestlists: Vec<Guestlist>,
    pub unavailable: bool,
}

impl StaticStore {
    #[must_use]
    pub fn with_venues(venues: Vec<Venue>) -> Self {
        Self {
            venues,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            events,
            ..Self::default()
        }
    }
}

#[async_trait]
impl RecordStore for StaticStore {
    async fn events(&self) -> Result<Vec<Event>, StoreError> {
        if self.unavailable {
            return Err(StoreError::Unavailable {
                collection: "events",
            });
        }
        Ok(self.events.clone())
    }

    async fn venues(&self) -> Result<Vec<Venue>, StoreError> {
        if self.unavailable {
            return Err(StoreError::Unavailable {
                collection: "venues",
            });
        }
        Ok(self.venues.clone())
    }

    async fn guestlists(&self) -> Result<Vec<Guestlist>, StoreError> {
        if self.unavailable {
            return Err(StoreError::Unavailable {
                collection: "guestlists",
            });
        }
        Ok(self.guestlists.clone())
    }
}

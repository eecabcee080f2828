#![forbid(unsafe_code)]
//! HTTP service for the tonight catalog.
//!
//! Three collection endpoints, their by-id detail routes, and the map
//! pin feed, all reading immutable snapshots from the record store and
//! filtering through the catalog query engine. Collection responses
//! carry an ETag and honor `If-None-Match`.

mod api_config;
mod http;

pub use api_config::ApiConfig;

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tonight_store::RecordStore;

pub const CRATE_NAME: &str = "tonight-server";

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    pub api: ApiConfig,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self::with_config(store, ApiConfig::default())
    }

    #[must_use]
    pub fn with_config(store: Arc<dyn RecordStore>, api: ApiConfig) -> Self {
        Self { store, api }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(http::healthz_handler))
        .route("/events", get(http::events_handler))
        .route("/events/:id", get(http::event_detail_handler))
        .route("/venues", get(http::venues_handler))
        .route("/venues/:id", get(http::venue_detail_handler))
        .route("/guestlists", get(http::guestlists_handler))
        .route("/guestlists/:id", get(http::guestlist_detail_handler))
        .route("/map/pins", get(http::map_pins_handler))
        .layer(DefaultBodyLimit::max(state.api.max_body_bytes))
        .with_state(state)
}

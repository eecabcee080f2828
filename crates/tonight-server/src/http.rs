// SPDX-License-Identifier: Apache-2.0

use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use serde_json::json;
use std::collections::BTreeMap;
use std::time::Duration;
use tonight_api::{
    parse_list_events_params, parse_list_guestlists_params, parse_list_venues_params,
    parse_map_pins_params, venue_pins, ApiError,
};
use tonight_core::sha256_hex;
use tonight_query::run_query;
use tonight_store::StoreError;
use tracing::{error, info};

pub(crate) fn api_error_response(status: StatusCode, err: ApiError) -> Response {
    (status, Json(json!({"error": err}))).into_response()
}

fn store_error_response(route: &'static str, err: &StoreError) -> Response {
    error!(route, error = %err, "record store read failed");
    api_error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        ApiError::dependency_failure(err.to_string()),
    )
}

pub(crate) fn if_none_match(headers: &HeaderMap) -> Option<String> {
    headers
        .get("if-none-match")
        .and_then(|v| v.to_str().ok())
        .map(std::string::ToString::to_string)
}

pub(crate) fn put_cache_headers(headers: &mut HeaderMap, ttl: Duration, etag: &str) {
    if let Ok(value) = HeaderValue::from_str(&format!("public, max-age={}", ttl.as_secs())) {
        headers.insert("cache-control", value);
    }
    if let Ok(value) = HeaderValue::from_str(etag) {
        headers.insert("etag", value);
    }
}

fn collection_response<T: Serialize>(state: &AppState, headers: &HeaderMap, payload: &T) -> Response {
    let body = match serde_json::to_vec(payload) {
        Ok(body) => body,
        Err(err) => {
            error!(error = %err, "response serialization failed");
            return api_error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::internal(err.to_string()),
            );
        }
    };
    let etag = format!("\"{}\"", sha256_hex(&body));
    if if_none_match(headers).as_deref() == Some(etag.as_str()) {
        let mut resp = StatusCode::NOT_MODIFIED.into_response();
        put_cache_headers(resp.headers_mut(), state.api.cache_ttl, &etag);
        return resp;
    }
    let mut resp = (StatusCode::OK, body).into_response();
    resp.headers_mut().insert(
        "content-type",
        HeaderValue::from_static("application/json"),
    );
    put_cache_headers(resp.headers_mut(), state.api.cache_ttl, &etag);
    resp
}

pub(crate) async fn events_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(raw): Query<BTreeMap<String, String>>,
) -> Response {
    let records = match state.store.events().await {
        Ok(records) => records,
        Err(err) => return store_error_response("/events", &err),
    };
    let rows = run_query(&records, &parse_list_events_params(&raw).to_query());
    info!(route = "/events", returned = rows.len(), "catalog query");
    collection_response(&state, &headers, &rows)
}

pub(crate) async fn venues_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(raw): Query<BTreeMap<String, String>>,
) -> Response {
    let records = match state.store.venues().await {
        Ok(records) => records,
        Err(err) => return store_error_response("/venues", &err),
    };
    let rows = run_query(&records, &parse_list_venues_params(&raw).to_query());
    info!(route = "/venues", returned = rows.len(), "catalog query");
    collection_response(&state, &headers, &rows)
}

pub(crate) async fn guestlists_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(raw): Query<BTreeMap<String, String>>,
) -> Response {
    let records = match state.store.guestlists().await {
        Ok(records) => records,
        Err(err) => return store_error_response("/guestlists", &err),
    };
    let rows = run_query(&records, &parse_list_guestlists_params(&raw).to_query());
    info!(route = "/guestlists", returned = rows.len(), "catalog query");
    collection_response(&state, &headers, &rows)
}

pub(crate) async fn map_pins_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(raw): Query<BTreeMap<String, String>>,
) -> Response {
    let records = match state.store.venues().await {
        Ok(records) => records,
        Err(err) => return store_error_response("/map/pins", &err),
    };
    let params = parse_map_pins_params(&raw);
    let rows = run_query(&records, &params.to_query());
    let feed = venue_pins(&rows, params.active);
    info!(route = "/map/pins", returned = feed.pins.len(), "map pin feed");
    collection_response(&state, &headers, &feed)
}

pub(crate) async fn event_detail_handler(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Response {
    let records = match state.store.events().await {
        Ok(records) => records,
        Err(err) => return store_error_response("/events/{id}", &err),
    };
    match records.into_iter().find(|event| event.id == id) {
        Some(event) => Json(event).into_response(),
        None => api_error_response(StatusCode::NOT_FOUND, ApiError::not_found("event", id)),
    }
}

pub(crate) async fn venue_detail_handler(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Response {
    let records = match state.store.venues().await {
        Ok(records) => records,
        Err(err) => return store_error_response("/venues/{id}", &err),
    };
    match records.into_iter().find(|venue| venue.id == id) {
        Some(venue) => Json(venue).into_response(),
        None => api_error_response(StatusCode::NOT_FOUND, ApiError::not_found("venue", id)),
    }
}

pub(crate) async fn guestlist_detail_handler(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Response {
    let records = match state.store.guestlists().await {
        Ok(records) => records,
        Err(err) => return store_error_response("/guestlists/{id}", &err),
    };
    match records.into_iter().find(|list| list.id == id) {
        Some(list) => Json(list).into_response(),
        None => api_error_response(StatusCode::NOT_FOUND, ApiError::not_found("guestlist", id)),
    }
}

pub(crate) async fn healthz_handler() -> Response {
    (StatusCode::OK, "ok").into_response()
}

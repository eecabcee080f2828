// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ApiErrorCode {
    NotFound,
    DependencyFailure,
    Internal,
}

/// Structured error body: serialized as `{"error": {code, message, details}}`
/// by the server layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiError {
    pub code: ApiErrorCode,
    pub message: String,
    pub details: Value,
}

impl ApiError {
    #[must_use]
    pub fn new(code: ApiErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
        }
    }

    #[must_use]
    pub fn not_found(kind: &str, id: u32) -> Self {
        Self::new(
            ApiErrorCode::NotFound,
            format!("{kind} not found"),
            json!({"kind": kind, "id": id}),
        )
    }

    #[must_use]
    pub fn dependency_failure(message: impl Into<String>) -> Self {
        Self::new(
            ApiErrorCode::DependencyFailure,
            "record store unavailable",
            json!({"message": message.into()}),
        )
    }

    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(
            ApiErrorCode::Internal,
            "internal error",
            json!({"message": message.into()}),
        )
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ApiError {}

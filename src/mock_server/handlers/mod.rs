//! HTTP request handlers for the mock server.

pub mod bibles;
pub mod books;
pub mod content;
pub mod search;
pub mod sections;

pub use bibles::*;
pub use books::*;
pub use content::*;
pub use search::*;
pub use sections::*;

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    http::{HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tokio::sync::RwLock;

use crate::mock_server::state::{MockState, RecordedRequest};
use crate::transport::API_KEY_HEADER;

/// State shared by all handlers.
pub type SharedState = Arc<RwLock<MockState>>;

/// Raw query parameters.
pub type Params = HashMap<String, String>;

/// Record the request and check its API key.
pub async fn admit(state: &SharedState, headers: &HeaderMap, uri: &Uri) -> Result<(), Response> {
    let api_key = headers
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let mut state = state.write().await;
    state.requests.push(RecordedRequest {
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        api_key: api_key.clone(),
    });

    match &state.required_api_key {
        Some(required) if api_key.as_deref() != Some(required.as_str()) => {
            Err(error_response(StatusCode::UNAUTHORIZED, "Invalid API key"))
        }
        _ => Ok(()),
    }
}

/// Error body in the API's format.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(serde_json::json!({
            "statusCode": status.as_u16(),
            "error": status.canonical_reason().unwrap_or("Error"),
            "message": message.into(),
        })),
    )
        .into_response()
}

/// 404 with a message.
pub fn not_found(message: impl Into<String>) -> Response {
    error_response(StatusCode::NOT_FOUND, message)
}

/// Successful response wrapped in `{"data": ...}`.
pub fn data<T: Serialize>(value: T) -> Response {
    (StatusCode::OK, Json(serde_json::json!({ "data": value }))).into_response()
}

/// True if the query carries `key=true`.
pub fn flag(params: &Params, key: &str) -> bool {
    params.get(key).is_some_and(|v| v == "true")
}

/// Non-empty query value.
pub fn param<'a>(params: &'a Params, key: &str) -> Option<&'a str> {
    params.get(key).map(String::as_str).filter(|v| !v.is_empty())
}

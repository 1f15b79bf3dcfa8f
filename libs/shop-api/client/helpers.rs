//! Shared HTTP helper functions for the resource clients
//!
//! Provides common patterns for response validation and
//! request body construction.

use serde_json::{Map, Value};
use tracing::warn;

use super::error::{ApiError, Result};

/// Turn a non-success response into an error carrying its status and body
pub async fn extract_api_error(response: reqwest::Response, context: &str) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    warn!("{} ({}): {}", context, status, body);
    ApiError::Status { status, body }
}

/// Check if response is successful, returning the response or an error
pub async fn require_success(
    response: reqwest::Response,
    context: &str,
) -> Result<reqwest::Response> {
    if !response.status().is_success() {
        return Err(extract_api_error(response, context).await);
    }
    Ok(response)
}

/// Body sent by action endpoints that take no payload
pub fn empty_body() -> Value {
    Value::Object(Map::new())
}

/// Join a collection path and a resource id into a detail path
///
/// `collection` must end with a slash, e.g. `/addresses/`.
pub fn detail_path(collection: &str, id: impl std::fmt::Display) -> String {
    format!("{}{}/", collection, id)
}

/// Detail path followed by an action segment, e.g. `/addresses/7/set-default/`
pub fn action_path(collection: &str, id: impl std::fmt::Display, action: &str) -> String {
    format!("{}{}/{}/", collection, id, action)
}

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// The message sent to the client when a transaction ID does not match a transaction.
pub const TRANSACTION_NOT_FOUND: &str = "Transaction not found";

/// The fallback route handler for paths that do not match any route.
pub async fn get_404_not_found() -> Response {
    get_404_not_found_response("Not found")
}

pub fn get_404_not_found_response(message: &str) -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": message }))).into_response()
}

//! Defines the endpoint for deleting a transaction.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{
    Error,
    database_id::TransactionId,
    transaction::{TransactionStore, form::parse_transaction_id},
};

/// A route handler for permanently deleting a transaction.
///
/// Responds with 404 if the transaction does not exist or was already deleted.
pub async fn delete_transaction_endpoint(
    State(store): State<TransactionStore>,
    path: Result<Path<TransactionId>, PathRejection>,
) -> Response {
    let transaction_id = match parse_transaction_id(path) {
        Ok(transaction_id) => transaction_id,
        Err(error) => return error.into_response(),
    };

    match store.delete_by_id(transaction_id) {
        Ok(()) => Json(json!({ "message": "Transaction deleted successfully" })).into_response(),
        Err(Error::NotFound) => Error::NotFound.into_response(),
        Err(error) => {
            tracing::error!("Could not delete transaction {transaction_id}: {error}");
            error.into_response()
        }
    }
}

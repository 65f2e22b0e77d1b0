//! Defines the endpoint for replacing the fields of an existing transaction.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{
    Error,
    database_id::TransactionId,
    transaction::{
        TransactionStore,
        form::{TransactionForm, parse_transaction_form, parse_transaction_id},
    },
};

/// A route handler for updating a transaction.
///
/// Responds with 404 if the transaction does not exist, in which case nothing is created.
pub async fn edit_transaction_endpoint(
    State(store): State<TransactionStore>,
    path: Result<Path<TransactionId>, PathRejection>,
    payload: Result<Json<TransactionForm>, JsonRejection>,
) -> Response {
    let transaction_id = match parse_transaction_id(path) {
        Ok(transaction_id) => transaction_id,
        Err(error) => return error.into_response(),
    };

    let transaction = match parse_transaction_form(payload) {
        Ok(transaction) => transaction,
        Err(error) => return error.into_response(),
    };

    match store.update_by_id(transaction_id, &transaction) {
        Ok(()) => Json(json!({ "message": "Transaction updated successfully" })).into_response(),
        Err(Error::NotFound) => {
            tracing::debug!(
                "Could not update transaction {transaction_id}: update returned zero rows affected"
            );
            Error::NotFound.into_response()
        }
        Err(error) => {
            tracing::error!("Could not update transaction {transaction_id}: {error}");
            error.into_response()
        }
    }
}

//! Defines the endpoints for reading transactions.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    database_id::TransactionId,
    transaction::{TransactionStore, form::parse_transaction_id},
};

/// A route handler for getting every transaction as a JSON array.
pub async fn get_transactions_endpoint(State(store): State<TransactionStore>) -> Response {
    match store.list_all() {
        Ok(transactions) => Json(transactions).into_response(),
        Err(error) => {
            tracing::error!("Could not get transactions: {error}");
            error.into_response()
        }
    }
}

/// A route handler for getting a transaction by its database ID.
///
/// This function will return the status code 404 if the requested resource does not exist (e.g., not created yet).
pub async fn get_transaction_endpoint(
    State(store): State<TransactionStore>,
    path: Result<Path<TransactionId>, PathRejection>,
) -> Response {
    let transaction_id = match parse_transaction_id(path) {
        Ok(transaction_id) => transaction_id,
        Err(error) => return error.into_response(),
    };

    match store.get_by_id(transaction_id) {
        Ok(transaction) => Json(transaction).into_response(),
        Err(Error::NotFound) => Error::NotFound.into_response(),
        Err(error) => {
            tracing::error!("Could not get transaction {transaction_id}: {error}");
            error.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        extract::{Path, State},
        http::StatusCode,
    };
    use serde_json::json;

    use crate::{
        test_utils::{FailingStorage, assert_status, must_create_test_storage, parse_json_body},
        transaction::{Transaction, TransactionStore, TransactionType},
    };

    use super::{get_transaction_endpoint, get_transactions_endpoint};

    fn must_create_store_with_salary() -> TransactionStore {
        let store = TransactionStore::new(must_create_test_storage());
        store
            .create(&Transaction::build(
                TransactionType::Income,
                "salary",
                1000.0,
                "2024-01-01",
            ))
            .expect("could not create test transaction");

        store
    }

    #[tokio::test]
    async fn gets_transaction_by_id() {
        let store = must_create_store_with_salary();

        let response = get_transaction_endpoint(State(store), Ok(Path(1))).await;

        assert_status(&response, StatusCode::OK);
        assert_eq!(
            parse_json_body(response).await,
            json!({
                "id": 1,
                "type": "income",
                "category": "salary",
                "amount": 1000.0,
                "date": "2024-01-01",
                "description": null,
            })
        );
    }

    #[tokio::test]
    async fn missing_transaction_is_not_found() {
        let store = must_create_store_with_salary();

        let response = get_transaction_endpoint(State(store), Ok(Path(2))).await;

        assert_status(&response, StatusCode::NOT_FOUND);
        assert_eq!(
            parse_json_body(response).await,
            json!({ "error": "Transaction not found" })
        );
    }

    #[tokio::test]
    async fn lists_transactions() {
        let store = must_create_store_with_salary();

        let response = get_transactions_endpoint(State(store)).await;

        assert_status(&response, StatusCode::OK);
        let body = parse_json_body(response).await;
        assert_eq!(body.as_array().map(Vec::len), Some(1));
        assert_eq!(body[0]["category"], "salary");
    }

    #[tokio::test]
    async fn lists_empty_array_when_there_are_no_transactions() {
        let store = TransactionStore::new(must_create_test_storage());

        let response = get_transactions_endpoint(State(store)).await;

        assert_eq!(parse_json_body(response).await, json!([]));
    }

    #[tokio::test]
    async fn list_storage_failure_is_internal_server_error() {
        let store = TransactionStore::new(Arc::new(FailingStorage));

        let response = get_transactions_endpoint(State(store)).await;

        assert_status(&response, StatusCode::INTERNAL_SERVER_ERROR);
    }
}

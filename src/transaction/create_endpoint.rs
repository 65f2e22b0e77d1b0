//! Defines the endpoint for creating a new transaction.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{
    endpoints::{self, format_endpoint},
    transaction::{
        TransactionStore,
        form::{TransactionForm, parse_transaction_form},
    },
};

/// A route handler for creating a new transaction.
///
/// Responds with 201 Created, the ID of the new transaction in the body, and
/// the URI of the new transaction in the `Location` header.
pub async fn create_transaction_endpoint(
    State(store): State<TransactionStore>,
    payload: Result<Json<TransactionForm>, JsonRejection>,
) -> Response {
    let transaction = match parse_transaction_form(payload) {
        Ok(transaction) => transaction,
        Err(error) => return error.into_response(),
    };

    match store.create(&transaction) {
        Ok(id) => {
            tracing::debug!("Created transaction {id}");
            (
                StatusCode::CREATED,
                [(LOCATION, format_endpoint(endpoints::TRANSACTION, id))],
                Json(json!({ "id": id })),
            )
                .into_response()
        }
        Err(error) => {
            tracing::error!("Could not create transaction: {error}");
            error.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{Json, extract::State, http::StatusCode};
    use serde_json::json;

    use crate::{
        test_utils::{
            ErrorLogCount, FailingStorage, assert_content_type, assert_status,
            must_create_test_storage, parse_json_body,
        },
        transaction::{
            Transaction, TransactionStore, TransactionType, form::TransactionForm,
        },
    };

    use super::create_transaction_endpoint;

    fn rent_form() -> TransactionForm {
        TransactionForm {
            transaction_type: TransactionType::Expense,
            category: "rent".to_owned(),
            amount: 400.0,
            date: "2024-01-05".to_owned(),
            description: Some("January rent".to_owned()),
        }
    }

    #[tokio::test]
    async fn creates_transaction() {
        let store = TransactionStore::new(must_create_test_storage());

        let response = create_transaction_endpoint(State(store.clone()), Ok(Json(rent_form()))).await;

        assert_status(&response, StatusCode::CREATED);
        assert_content_type(&response, "application/json");
        assert_eq!(
            response.headers().get("location").map(|value| value.as_bytes()),
            Some("/transactions/1".as_bytes())
        );
        assert_eq!(parse_json_body(response).await, json!({ "id": 1 }));
        assert_eq!(
            store.get_by_id(1),
            Ok(
                Transaction::build(TransactionType::Expense, "rent", 400.0, "2024-01-05")
                    .description(Some("January rent"))
                    .finalize(1)
            )
        );
    }

    #[tokio::test]
    async fn negative_amount_is_bad_request() {
        let store = TransactionStore::new(must_create_test_storage());
        let form = TransactionForm {
            amount: -1.0,
            ..rent_form()
        };

        let response = create_transaction_endpoint(State(store.clone()), Ok(Json(form))).await;

        assert_status(&response, StatusCode::BAD_REQUEST);
        assert_eq!(store.count(), Ok(0));
    }

    #[tokio::test]
    async fn storage_failure_is_internal_server_error() {
        let store = TransactionStore::new(Arc::new(FailingStorage));
        let error_logs = ErrorLogCount::start();

        let response = create_transaction_endpoint(State(store), Ok(Json(rent_form()))).await;

        assert_status(&response, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error_logs.get(), 1);
        assert_eq!(
            parse_json_body(response).await,
            json!({ "error": "database is locked" })
        );
    }
}

//! Ledger is a web service for recording personal income and expenses.
//!
//! This library provides a JSON REST API for creating, reading, updating and
//! deleting transactions, plus a summary of total income, total expense and
//! balance that can be filtered by date range and category.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde_json::json;
use tokio::signal;

mod app_state;
mod database_id;
mod db;
mod endpoints;
mod logging;
mod not_found;
mod routing;
mod storage;
#[cfg(test)]
mod test_utils;
mod transaction;

pub use app_state::AppState;
pub use database_id::{DatabaseId, TransactionId};
pub use db::initialize as initialize_db;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use storage::{Execution, SqliteStorage, Storage, StoredRow};
pub use transaction::{
    CompiledQuery, NewTransaction, Summary, SummaryFilter, SummaryQuery, Transaction,
    TransactionForm, TransactionStore, TransactionType, compile_summary_query, get_summary,
};

use crate::not_found::get_404_not_found_response;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The requested transaction was not found.
    ///
    /// For HTTP request handlers, the client should check that the ID is
    /// correct and that the transaction has been created.
    ///
    /// Internally, this error occurs when a query returns no rows or when an
    /// update or delete affects zero rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// Any failure that originated in the storage layer, e.g. a malformed
    /// statement, a constraint violation or a lost connection.
    ///
    /// Holds the message of the underlying error.
    #[error("{0}")]
    StorageError(String),

    /// The request could not be turned into a valid input, e.g. a required
    /// field was missing from the body or the ID was not a number.
    #[error("{0}")]
    ValidationError(String),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => Error::StorageError(error.to_string()),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => get_404_not_found_response(not_found::TRANSACTION_NOT_FOUND),
            Error::ValidationError(message) => {
                tracing::debug!("Rejected invalid request: {message}");
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            Error::StorageError(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": message })),
            )
                .into_response(),
        }
    }
}

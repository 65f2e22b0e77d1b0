//! Turns request bodies and paths into validated transaction inputs.

use axum::{
    Json,
    extract::{
        Path,
        rejection::{JsonRejection, PathRejection},
    },
};
use serde::Deserialize;

use crate::{
    Error,
    database_id::TransactionId,
    transaction::core::{NewTransaction, TransactionType},
};

/// The JSON body for creating or updating a transaction.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionForm {
    /// Either "income" or "expense".
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// A free-form label such as "salary" or "rent".
    pub category: String,
    /// The non-negative amount of money spent or earned.
    pub amount: f64,
    /// When the transaction happened as an ISO-8601 date string.
    pub date: String,
    /// Text detailing the transaction.
    pub description: Option<String>,
}

impl TryFrom<TransactionForm> for NewTransaction {
    type Error = Error;

    fn try_from(form: TransactionForm) -> Result<Self, Self::Error> {
        if !form.amount.is_finite() || form.amount < 0.0 {
            return Err(Error::ValidationError(format!(
                "amount must be a non-negative number, got {}",
                form.amount
            )));
        }

        Ok(NewTransaction {
            transaction_type: form.transaction_type,
            category: form.category,
            amount: form.amount,
            date: form.date,
            description: form.description,
        })
    }
}

/// Validate the result of extracting a [TransactionForm] from a JSON body.
///
/// # Errors
/// Returns an [Error::ValidationError] if the body was not valid JSON, was
/// missing a required field, had a field of the wrong type, or had a negative or non-finite amount.
pub(crate) fn parse_transaction_form(
    payload: Result<Json<TransactionForm>, JsonRejection>,
) -> Result<NewTransaction, Error> {
    let Json(form) = payload.map_err(|rejection| Error::ValidationError(rejection.body_text()))?;

    form.try_into()
}

/// Validate the result of extracting a transaction ID from the request path.
///
/// # Errors
/// Returns an [Error::ValidationError] if the ID is not an integer.
pub(crate) fn parse_transaction_id(
    path: Result<Path<TransactionId>, PathRejection>,
) -> Result<TransactionId, Error> {
    path.map(|Path(id)| id)
        .map_err(|rejection| Error::ValidationError(rejection.body_text()))
}

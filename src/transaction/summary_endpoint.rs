//! Defines the endpoint for the income, expense and balance summary.

use std::sync::Arc;

use axum::{
    Json,
    extract::{FromRef, Query, State, rejection::QueryRejection},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::{
    AppState, Error,
    storage::Storage,
    transaction::summary::{SummaryFilter, get_summary},
};

/// The state needed to calculate the summary.
#[derive(Debug, Clone)]
pub struct SummaryState {
    /// The storage the summary query runs against.
    pub storage: Arc<dyn Storage>,
}

impl FromRef<AppState> for SummaryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            storage: state.storage.clone(),
        }
    }
}

/// The query string parameters for the summary endpoint.
///
/// An empty value, e.g. `?category=`, is treated the same as a missing parameter.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryQuery {
    /// Only include transactions on or after this date.
    pub start_date: Option<String>,
    /// Only include transactions on or before this date.
    pub end_date: Option<String>,
    /// Only include transactions in this category.
    pub category: Option<String>,
}

impl From<SummaryQuery> for SummaryFilter {
    fn from(query: SummaryQuery) -> Self {
        let non_empty = |value: Option<String>| value.filter(|value| !value.is_empty());

        SummaryFilter {
            start_date: non_empty(query.start_date),
            end_date: non_empty(query.end_date),
            category: non_empty(query.category),
        }
    }
}

/// A route handler for getting the total income, total expense and balance of
/// the transactions that match the query parameters.
pub async fn get_summary_endpoint(
    State(state): State<SummaryState>,
    query: Result<Query<SummaryQuery>, QueryRejection>,
) -> Response {
    let filter: SummaryFilter = match query {
        Ok(Query(query)) => query.into(),
        Err(rejection) => return Error::ValidationError(rejection.body_text()).into_response(),
    };

    match get_summary(&filter, state.storage.as_ref()) {
        Ok(summary) => Json(summary).into_response(),
        Err(error) => {
            tracing::error!("Could not get summary for {filter:?}: {error}");
            error.into_response()
        }
    }
}

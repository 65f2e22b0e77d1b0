//! Builds and runs the aggregate query behind the transaction summary.

use rusqlite::types::Value;
use serde::Serialize;

use crate::{Error, storage::Storage};

/// Restricts which transactions are included in a [Summary].
///
/// Each filter is independent. A filter set to `None` adds no condition to the
/// query at all, and present filters are combined with `AND`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryFilter {
    /// Include transactions dated on or after this date.
    pub start_date: Option<String>,
    /// Include transactions dated on or before this date.
    pub end_date: Option<String>,
    /// Include transactions with exactly this category.
    pub category: Option<String>,
}

/// The total income, total expense and balance of a set of transactions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    /// The sum of the amounts of income transactions.
    pub total_income: f64,
    /// The sum of the amounts of expense transactions.
    pub total_expense: f64,
    /// `total_income - total_expense`.
    pub balance: f64,
}

impl Summary {
    /// Create a summary from its totals, deriving the balance.
    pub fn new(total_income: f64, total_expense: f64) -> Self {
        Self {
            total_income,
            total_expense,
            balance: total_income - total_expense,
        }
    }
}

/// A SQL statement with the values for its `?N` placeholders.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledQuery {
    /// The statement text.
    pub sql: String,
    /// The bound parameters, where `params[i]` binds to `?{i + 1}`.
    pub params: Vec<Value>,
}

const SUMMARY_QUERY: &str = "SELECT \
    SUM(CASE WHEN type = 'income' THEN amount ELSE 0 END) AS total_income, \
    SUM(CASE WHEN type = 'expense' THEN amount ELSE 0 END) AS total_expense \
    FROM transactions";

/// Build the aggregate query for `filter`.
///
/// The query always produces exactly one row. Filter values are bound as
/// parameters in the order start date, end date, category.
pub fn compile_summary_query(filter: &SummaryFilter) -> CompiledQuery {
    let mut where_clause_parts = vec![];
    let mut params = vec![];

    let conditions = [
        ("date >=", &filter.start_date),
        ("date <=", &filter.end_date),
        ("category =", &filter.category),
    ];

    for (condition, value) in conditions {
        if let Some(value) = value {
            params.push(Value::Text(value.clone()));
            where_clause_parts.push(format!("{condition} ?{}", params.len()));
        }
    }

    let sql = if where_clause_parts.is_empty() {
        SUMMARY_QUERY.to_owned()
    } else {
        format!(
            "{SUMMARY_QUERY} WHERE {}",
            where_clause_parts.join(" AND ")
        )
    };

    CompiledQuery { sql, params }
}

/// Calculate the [Summary] of the transactions that match `filter`.
///
/// Totals are zero when no transactions match. Dates are compared by the
/// storage as strings, so malformed dates are not rejected here.
///
/// # Errors
/// Returns an [Error::StorageError] if the query fails.
pub fn get_summary(filter: &SummaryFilter, storage: &dyn Storage) -> Result<Summary, Error> {
    let query = compile_summary_query(filter);

    let (total_income, total_expense) = match storage.query_row(&query.sql, &query.params)? {
        // SUM over zero rows is NULL.
        Some(row) => (
            row.get::<Option<f64>>(0)?.unwrap_or(0.0),
            row.get::<Option<f64>>(1)?.unwrap_or(0.0),
        ),
        None => (0.0, 0.0),
    };

    Ok(Summary::new(total_income, total_expense))
}

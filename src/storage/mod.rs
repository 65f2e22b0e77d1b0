//! Defines the interface between the transaction components and the database.
//!
//! A [Storage] takes a statement template with its bound parameters and hands
//! back raw rows or an [Execution]. Callers own the SQL and the mapping from
//! rows to domain types.

mod sqlite;

pub use sqlite::SqliteStorage;

use std::fmt::Debug;

use rusqlite::types::{FromSql, Value, ValueRef};

use crate::{Error, database_id::DatabaseId};

/// Executes parametrized statements against a relational store.
///
/// Parameters are bound positionally to the `?N` placeholders in `sql` and are
/// never interpolated into the statement text.
pub trait Storage: Debug + Send + Sync {
    /// Run a query and return its first row, or `None` if no rows matched.
    ///
    /// # Errors
    /// Returns [Error::StorageError] if the statement could not be prepared or run.
    fn query_row(&self, sql: &str, params: &[Value]) -> Result<Option<StoredRow>, Error>;

    /// Run a query and return every row it produced, in the order the store
    /// returned them.
    ///
    /// # Errors
    /// Returns [Error::StorageError] if the statement could not be prepared or run.
    fn query_rows(&self, sql: &str, params: &[Value]) -> Result<Vec<StoredRow>, Error>;

    /// Run a mutating statement, e.g. `INSERT`, `UPDATE` or `DELETE`.
    ///
    /// # Errors
    /// Returns [Error::StorageError] if the statement could not be prepared or run.
    fn execute(&self, sql: &str, params: &[Value]) -> Result<Execution, Error>;
}

/// The outcome of a mutating statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Execution {
    /// The number of rows the statement inserted, changed or deleted.
    pub rows_affected: usize,
    /// The ID of the most recently inserted row on the connection.
    ///
    /// Only meaningful after an `INSERT`.
    pub last_insert_id: DatabaseId,
}

/// A single result row with its column values in select order.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredRow {
    values: Vec<Value>,
}

impl StoredRow {
    /// Create a row from column values in select order.
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    /// Get the value of the column at `index` converted to `T`.
    ///
    /// # Errors
    /// Returns [Error::StorageError] if `index` is out of range or the value
    /// cannot be converted to `T`.
    pub fn get<T: FromSql>(&self, index: usize) -> Result<T, Error> {
        let value = self.values.get(index).ok_or_else(|| {
            Error::StorageError(format!(
                "column index {index} out of range for a row with {} columns",
                self.values.len()
            ))
        })?;

        T::column_result(ValueRef::from(value))
            .map_err(|error| Error::StorageError(format!("could not read column {index}: {error}")))
    }
}

//! Creates, reads, updates and deletes transactions by their ID.

use std::sync::Arc;

use axum::extract::FromRef;
use rusqlite::types::Value;

use crate::{
    AppState, Error,
    database_id::TransactionId,
    storage::Storage,
    transaction::core::{NewTransaction, TRANSACTION_COLUMNS, Transaction, map_transaction_row},
};

/// Manages the transactions collection.
///
/// Each method runs exactly one statement against the storage. Updates and
/// deletes detect a missing transaction from the number of affected rows
/// rather than reading it first.
#[derive(Debug, Clone)]
pub struct TransactionStore {
    storage: Arc<dyn Storage>,
}

impl FromRef<AppState> for TransactionStore {
    fn from_ref(state: &AppState) -> Self {
        Self::new(state.storage.clone())
    }
}

impl TransactionStore {
    /// Create a store that runs its statements against `storage`.
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Create a new transaction and return the ID the storage assigned to it.
    ///
    /// # Errors
    /// This function will return an [Error::StorageError] if the insert fails.
    pub fn create(&self, transaction: &NewTransaction) -> Result<TransactionId, Error> {
        let execution = self.storage.execute(
            "INSERT INTO transactions (type, category, amount, date, description) \
            VALUES (?1, ?2, ?3, ?4, ?5)",
            &transaction.to_params(),
        )?;

        Ok(execution.last_insert_id)
    }

    /// Retrieve every transaction, ordered by ID.
    ///
    /// # Errors
    /// This function will return an [Error::StorageError] if the query fails.
    pub fn list_all(&self) -> Result<Vec<Transaction>, Error> {
        self.storage
            .query_rows(
                &format!("SELECT {TRANSACTION_COLUMNS} FROM transactions ORDER BY id ASC"),
                &[],
            )?
            .iter()
            .map(map_transaction_row)
            .collect()
    }

    /// Retrieve a transaction by its `id`.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NotFound] if `id` does not refer to a valid transaction,
    /// - or [Error::StorageError] if there is some other storage error.
    pub fn get_by_id(&self, id: TransactionId) -> Result<Transaction, Error> {
        let row = self
            .storage
            .query_row(
                &format!("SELECT {TRANSACTION_COLUMNS} FROM transactions WHERE id = ?1"),
                &[Value::Integer(id)],
            )?
            .ok_or(Error::NotFound)?;

        map_transaction_row(&row)
    }

    /// Replace every field except the ID of the transaction `id` with the
    /// fields of `transaction`.
    ///
    /// Never creates a transaction.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NotFound] if `id` does not refer to a valid transaction,
    /// - or [Error::StorageError] if there is some other storage error.
    pub fn update_by_id(
        &self,
        id: TransactionId,
        transaction: &NewTransaction,
    ) -> Result<(), Error> {
        let mut params = transaction.to_params();
        params.push(Value::Integer(id));

        let execution = self.storage.execute(
            "UPDATE transactions \
            SET type = ?1, category = ?2, amount = ?3, date = ?4, description = ?5 \
            WHERE id = ?6",
            &params,
        )?;

        match execution.rows_affected {
            0 => Err(Error::NotFound),
            _ => Ok(()),
        }
    }

    /// Permanently delete the transaction `id`.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NotFound] if `id` does not refer to a valid transaction,
    /// - or [Error::StorageError] if there is some other storage error.
    pub fn delete_by_id(&self, id: TransactionId) -> Result<(), Error> {
        let execution = self.storage.execute(
            "DELETE FROM transactions WHERE id = ?1",
            &[Value::Integer(id)],
        )?;

        match execution.rows_affected {
            0 => Err(Error::NotFound),
            _ => Ok(()),
        }
    }

    /// Get the total number of transactions.
    #[cfg(test)]
    pub fn count(&self) -> Result<i64, Error> {
        self.storage
            .query_row("SELECT COUNT(id) FROM transactions", &[])?
            .ok_or(Error::NotFound)?
            .get(0)
    }
}

use std::sync::Arc;

use rusqlite::types::Value;

use crate::{
    Error,
    storage::{Execution, SqliteStorage, Storage, StoredRow},
};

/// The message every [FailingStorage] operation fails with.
pub(crate) const STORAGE_FAILURE_MESSAGE: &str = "database is locked";

/// A storage where every statement fails, for testing error paths.
#[derive(Debug, Default)]
pub(crate) struct FailingStorage;

impl Storage for FailingStorage {
    fn query_row(&self, _sql: &str, _params: &[Value]) -> Result<Option<StoredRow>, Error> {
        Err(Error::StorageError(STORAGE_FAILURE_MESSAGE.to_owned()))
    }

    fn query_rows(&self, _sql: &str, _params: &[Value]) -> Result<Vec<StoredRow>, Error> {
        Err(Error::StorageError(STORAGE_FAILURE_MESSAGE.to_owned()))
    }

    fn execute(&self, _sql: &str, _params: &[Value]) -> Result<Execution, Error> {
        Err(Error::StorageError(STORAGE_FAILURE_MESSAGE.to_owned()))
    }
}

pub(crate) fn must_create_test_storage() -> Arc<dyn Storage> {
    Arc::new(SqliteStorage::open_in_memory().expect("could not create in-memory storage"))
}

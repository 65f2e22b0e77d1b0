//! Implements a SQLite backed [Storage].

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::{Connection, Row, params_from_iter, types::Value};

use crate::{
    Error,
    db::initialize,
    storage::{Execution, Storage, StoredRow},
};

/// Runs statements against a SQLite database.
///
/// The connection is shared behind a mutex, so each statement, and the
/// `last_insert_rowid` read that follows an insert, runs while no other
/// statement holds the connection.
#[derive(Debug, Clone)]
pub struct SqliteStorage {
    connection: Arc<Mutex<Connection>>,
}

impl SqliteStorage {
    /// Create a storage for `connection`.
    ///
    /// This function will initialize the database by adding the tables for the
    /// domain models if they do not already exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized.
    pub fn new(connection: Connection) -> Result<Self, Error> {
        initialize(&connection)?;

        Ok(Self {
            connection: Arc::new(Mutex::new(connection)),
        })
    }

    /// Create a storage for an in-memory database.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or initialized.
    pub fn open_in_memory() -> Result<Self, Error> {
        Self::new(Connection::open_in_memory()?)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.connection
            .lock()
            .map_err(|_| Error::StorageError("could not acquire the database lock".to_owned()))
    }
}

impl Storage for SqliteStorage {
    fn query_row(&self, sql: &str, params: &[Value]) -> Result<Option<StoredRow>, Error> {
        let connection = self.lock()?;
        let mut statement = connection.prepare(sql)?;
        let column_count = statement.column_count();
        let mut rows = statement.query(params_from_iter(params.iter()))?;

        match rows.next()? {
            Some(row) => Ok(Some(map_stored_row(row, column_count)?)),
            None => Ok(None),
        }
    }

    fn query_rows(&self, sql: &str, params: &[Value]) -> Result<Vec<StoredRow>, Error> {
        let connection = self.lock()?;
        let mut statement = connection.prepare(sql)?;
        let column_count = statement.column_count();

        statement
            .query_map(params_from_iter(params.iter()), |row| {
                map_stored_row(row, column_count)
            })?
            .map(|maybe_row| maybe_row.map_err(Error::from))
            .collect()
    }

    fn execute(&self, sql: &str, params: &[Value]) -> Result<Execution, Error> {
        let connection = self.lock()?;
        let rows_affected = connection.execute(sql, params_from_iter(params.iter()))?;

        Ok(Execution {
            rows_affected,
            last_insert_id: connection.last_insert_rowid(),
        })
    }
}

fn map_stored_row(row: &Row, column_count: usize) -> Result<StoredRow, rusqlite::Error> {
    let values = (0..column_count)
        .map(|index| row.get::<usize, Value>(index))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(StoredRow::new(values))
}

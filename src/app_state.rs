//! Implements a struct that holds the state of the REST server.

use std::sync::Arc;

use crate::storage::Storage;

/// The state of the REST server.
///
/// Route handlers get the parts they need through `FromRef` implementations,
/// e.g. [TransactionStore](crate::TransactionStore).
#[derive(Debug, Clone)]
pub struct AppState {
    /// The storage that every transaction statement runs against.
    pub storage: Arc<dyn Storage>,
}

impl AppState {
    /// Create a new [AppState] that hands `storage` to each route handler.
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }
}

//! Transaction management for the ledger.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and `NewTransaction` for creating and updating transactions
//! - The `TransactionStore` for creating, reading, updating and deleting transactions by ID
//! - The summary query that totals income and expenses under optional filters
//! - Route handlers for the transaction API

mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod form;
mod get_endpoint;
mod store;
mod summary;
mod summary_endpoint;

pub use core::{NewTransaction, Transaction, TransactionType, create_transaction_table};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use edit_endpoint::edit_transaction_endpoint;
pub use form::TransactionForm;
pub use get_endpoint::{get_transaction_endpoint, get_transactions_endpoint};
pub use store::TransactionStore;
pub use summary::{CompiledQuery, Summary, SummaryFilter, compile_summary_query, get_summary};
pub use summary_endpoint::{SummaryQuery, get_summary_endpoint};

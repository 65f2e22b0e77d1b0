//! Defines the core data models and the table schema for transactions.

use std::fmt::Display;

use rusqlite::{
    Connection,
    types::{FromSql, FromSqlError, FromSqlResult, Value, ValueRef},
};
use serde::{Deserialize, Serialize};

use crate::{Error, database_id::TransactionId, storage::StoredRow};

// ============================================================================
// MODELS
// ============================================================================

/// Whether money was earned or spent.
///
/// The type decides which total of a [Summary](super::Summary) a transaction
/// contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money that was earned, e.g. a salary payment.
    Income,
    /// Money that was spent, e.g. rent.
    Expense,
}

impl TransactionType {
    /// The text stored in the database and sent over the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromSql for TransactionType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value.as_str()? {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            other => Err(FromSqlError::Other(
                format!("invalid transaction type \"{other}\"").into(),
            )),
        }
    }
}

impl From<TransactionType> for Value {
    fn from(value: TransactionType) -> Self {
        Value::Text(value.as_str().to_owned())
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// To create a new `Transaction`, use [Transaction::build].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// Whether the transaction is income or an expense.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// A free-form label such as "salary" or "rent".
    pub category: String,
    /// The amount of money spent or earned in this transaction.
    ///
    /// This is a magnitude; the sign comes from `transaction_type`.
    pub amount: f64,
    /// When the transaction happened as an ISO-8601 date string, e.g. "2024-01-31".
    pub date: String,
    /// A text description of what the transaction was for.
    pub description: Option<String>,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [NewTransaction] for discoverability.
    pub fn build(
        transaction_type: TransactionType,
        category: &str,
        amount: f64,
        date: &str,
    ) -> NewTransaction {
        NewTransaction {
            transaction_type,
            category: category.to_owned(),
            amount,
            date: date.to_owned(),
            description: None,
        }
    }
}

/// The fields of a [Transaction] that the client supplies.
///
/// Used both to create a transaction and to replace the fields of an existing one.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    /// Whether the transaction is income or an expense.
    pub transaction_type: TransactionType,
    /// A free-form label such as "salary" or "rent".
    pub category: String,
    /// The non-negative amount of money spent or earned.
    pub amount: f64,
    /// When the transaction happened as an ISO-8601 date string.
    pub date: String,
    /// An optional text description.
    pub description: Option<String>,
}

impl NewTransaction {
    /// Set the description for the transaction.
    pub fn description(mut self, description: Option<&str>) -> Self {
        self.description = description.map(str::to_owned);
        self
    }

    /// Attach the store-assigned `id` to produce a full [Transaction].
    pub fn finalize(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            transaction_type: self.transaction_type,
            category: self.category,
            amount: self.amount,
            date: self.date,
            description: self.description,
        }
    }

    /// The bound parameters for the type, category, amount, date and
    /// description columns, in that order.
    pub(crate) fn to_params(&self) -> Vec<Value> {
        vec![
            self.transaction_type.into(),
            Value::Text(self.category.clone()),
            Value::Real(self.amount),
            Value::Text(self.date.clone()),
            self.description.clone().map_or(Value::Null, Value::Text),
        ]
    }
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// The columns of the transactions table in the order [map_transaction_row] expects.
pub(crate) const TRANSACTION_COLUMNS: &str = "id, type, category, amount, date, description";

/// Create the transaction table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS transactions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                type TEXT NOT NULL CHECK (type IN ('income', 'expense')),
                category TEXT NOT NULL,
                amount REAL NOT NULL,
                date TEXT NOT NULL,
                description TEXT
                )",
        (),
    )?;

    // Add composite index used by the summary query.
    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_transactions_date_category ON transactions(date, category);",
        (),
    )?;

    Ok(())
}

/// Map a database row selected with [TRANSACTION_COLUMNS] to a Transaction.
///
/// # Errors
/// Returns an [Error::StorageError] if a column is missing or has the wrong type.
pub(crate) fn map_transaction_row(row: &StoredRow) -> Result<Transaction, Error> {
    let id = row.get(0)?;
    let transaction_type = row.get(1)?;
    let category = row.get(2)?;
    let amount = row.get(3)?;
    let date = row.get(4)?;
    let description = row.get(5)?;

    Ok(Transaction {
        id,
        transaction_type,
        category,
        amount,
        date,
        description,
    })
}

#[cfg(test)]
mod tests {
    use rusqlite::types::Value;
    use serde_json::json;

    use crate::{Error, storage::StoredRow};

    use super::{Transaction, TransactionType, map_transaction_row};

    #[test]
    fn serializes_type_as_lowercase_string() {
        let transaction = Transaction::build(TransactionType::Income, "salary", 1000.0, "2024-01-01")
            .finalize(1);

        let got = serde_json::to_value(&transaction).unwrap();

        assert_eq!(
            got,
            json!({
                "id": 1,
                "type": "income",
                "category": "salary",
                "amount": 1000.0,
                "date": "2024-01-01",
                "description": null,
            })
        );
    }

    #[test]
    fn maps_row_with_null_description() {
        let row = StoredRow::new(vec![
            Value::Integer(3),
            Value::Text("expense".to_owned()),
            Value::Text("rent".to_owned()),
            Value::Real(400.0),
            Value::Text("2024-01-05".to_owned()),
            Value::Null,
        ]);

        let got = map_transaction_row(&row);

        assert_eq!(
            got,
            Ok(Transaction::build(TransactionType::Expense, "rent", 400.0, "2024-01-05").finalize(3))
        );
    }

    #[test]
    fn maps_row_with_integer_amount() {
        let row = StoredRow::new(vec![
            Value::Integer(1),
            Value::Text("income".to_owned()),
            Value::Text("salary".to_owned()),
            Value::Integer(1000),
            Value::Text("2024-01-01".to_owned()),
            Value::Text("January".to_owned()),
        ]);

        let got = map_transaction_row(&row).expect("could not map row");

        assert_eq!(got.amount, 1000.0);
        assert_eq!(got.description.as_deref(), Some("January"));
    }

    #[test]
    fn rejects_unknown_type_in_row() {
        let row = StoredRow::new(vec![
            Value::Integer(1),
            Value::Text("refund".to_owned()),
            Value::Text("salary".to_owned()),
            Value::Real(1.0),
            Value::Text("2024-01-01".to_owned()),
            Value::Null,
        ]);

        assert!(matches!(
            map_transaction_row(&row),
            Err(Error::StorageError(_))
        ));
    }
}

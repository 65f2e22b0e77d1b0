use std::error::Error;
use std::path::Path;
use std::process::exit;
use std::sync::Arc;

use clap::Parser;
use rusqlite::Connection;

use ledger_rs::{SqliteStorage, Transaction, TransactionStore, TransactionType};

/// A utility for creating a test database for the REST API server of ledger_rs.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let storage = SqliteStorage::new(Connection::open(output_path)?)?;
    let store = TransactionStore::new(Arc::new(storage));

    println!("Creating test transactions...");

    let transactions = [
        Transaction::build(TransactionType::Income, "salary", 4200.0, "2024-01-01")
            .description(Some("January salary")),
        Transaction::build(TransactionType::Expense, "rent", 1600.0, "2024-01-03"),
        Transaction::build(TransactionType::Expense, "groceries", 182.4, "2024-01-07")
            .description(Some("Weekly shop")),
        Transaction::build(TransactionType::Expense, "transport", 45.0, "2024-01-12"),
        Transaction::build(TransactionType::Income, "salary", 4200.0, "2024-02-01")
            .description(Some("February salary")),
        Transaction::build(TransactionType::Expense, "rent", 1600.0, "2024-02-03"),
        Transaction::build(TransactionType::Expense, "groceries", 167.9, "2024-02-06"),
        Transaction::build(TransactionType::Income, "interest", 12.35, "2024-02-29"),
    ];

    for transaction in &transactions {
        store.create(transaction)?;
    }

    println!("Created {} transactions.", transactions.len());
    println!("Success!");

    Ok(())
}

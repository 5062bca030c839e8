//! SQLite adapters.
//!
//! Runs generated statements against the target database file with one
//! short-lived connection per query.

pub mod executor;

pub use executor::SqliteExecutor;

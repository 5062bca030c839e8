//! Query execution port.

use crate::domain::{GeneratedSql, ResultSet};
use crate::error::Result;

/// Runs one statement and returns every row it produces.
///
/// Implementations are blocking; async callers move the call onto a
/// blocking thread. Each call owns its connection for its whole duration.
pub trait QueryExecutor: Send + Sync {
    /// Execute `sql` and fetch all rows.
    ///
    /// # Errors
    ///
    /// Returns an execution error when the database cannot be opened, the
    /// statement does not compile, or stepping it fails. Never returns a
    /// partial result.
    fn execute(&self, sql: &GeneratedSql) -> Result<ResultSet>;
}

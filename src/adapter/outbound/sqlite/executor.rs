//! [`QueryExecutor`] backed by a SQLite file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags};
use tracing::{debug, warn};

use crate::domain::{GeneratedSql, ResultSet, Value};
use crate::error::{ExecutionError, Result, ValidationError};
use crate::port::outbound::executor::QueryExecutor;

/// How long a connection waits on a locked database before failing.
const BUSY_TIMEOUT: Duration = Duration::from_millis(5000);

/// Executes statements against a database file that must already exist.
///
/// The file is never created. With writes disallowed (the default) it is
/// opened read-only and any statement SQLite does not consider read-only is
/// rejected before it is stepped.
#[derive(Debug, Clone)]
pub struct SqliteExecutor {
    path: PathBuf,
    allow_writes: bool,
}

impl SqliteExecutor {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            allow_writes: false,
        }
    }

    /// Let mutating statements run and auto-commit.
    #[must_use]
    pub fn with_writes(mut self, allow_writes: bool) -> Self {
        self.allow_writes = allow_writes;
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(&self) -> Result<Connection> {
        let access = if self.allow_writes {
            OpenFlags::SQLITE_OPEN_READ_WRITE
        } else {
            OpenFlags::SQLITE_OPEN_READ_ONLY
        };
        let flags = access | OpenFlags::SQLITE_OPEN_NO_MUTEX | OpenFlags::SQLITE_OPEN_URI;

        let conn = Connection::open_with_flags(&self.path, flags).map_err(|source| {
            ExecutionError::Open {
                path: self.path.clone(),
                source,
            }
        })?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(conn)
    }
}

impl QueryExecutor for SqliteExecutor {
    fn execute(&self, sql: &GeneratedSql) -> Result<ResultSet> {
        let conn = self.open()?;
        let result = fetch_all(&conn, sql, self.allow_writes);

        if let Err((_, e)) = conn.close() {
            warn!(path = %self.path.display(), error = %e, "failed to close database");
        }

        if let Ok(rows) = &result {
            debug!(
                columns = rows.columns.len(),
                rows = rows.row_count(),
                "statement executed"
            );
        }
        result
    }
}

fn fetch_all(conn: &Connection, sql: &GeneratedSql, allow_writes: bool) -> Result<ResultSet> {
    let mut stmt = conn.prepare(sql.as_str())?;

    if !allow_writes && !stmt.readonly() {
        return Err(ValidationError::NotReadOnly {
            keyword: sql.leading_keyword(),
        }
        .into());
    }

    let columns: Vec<String> = stmt
        .column_names()
        .into_iter()
        .map(String::from)
        .collect();
    let width = columns.len();

    let mut rows = stmt.query([])?;
    let mut out = Vec::new();
    while let Some(row) = rows.next()? {
        let mut values = Vec::with_capacity(width);
        for i in 0..width {
            values.push(Value::from(row.get_ref(i)?));
        }
        out.push(values);
    }

    Ok(ResultSet::new(columns, out))
}

impl From<ValueRef<'_>> for Value {
    fn from(value: ValueRef<'_>) -> Self {
        match value {
            ValueRef::Null => Value::Null,
            ValueRef::Integer(v) => Value::Integer(v),
            ValueRef::Real(v) => Value::Real(v),
            ValueRef::Text(bytes) => Value::Text(String::from_utf8_lossy(bytes).into_owned()),
            ValueRef::Blob(bytes) => Value::Blob(bytes.to_vec()),
        }
    }
}

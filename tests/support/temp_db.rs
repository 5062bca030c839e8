use std::path::{Path, PathBuf};

use rusqlite::Connection;
use tempfile::TempDir;

/// Temporary database with the Students table the default prompt describes.
pub struct TempDb {
    _dir: TempDir,
    path: PathBuf,
}

impl TempDb {
    /// Students: Alice (90) and Bob (70).
    pub fn students() -> Self {
        Self::with_rows(&[
            ("Alice", "10A", 90, "Acme"),
            ("Bob", "10B", 70, "Globex"),
        ])
    }

    pub fn with_rows(rows: &[(&str, &str, i64, &str)]) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("data.db");

        let conn = Connection::open(&path).expect("create sqlite file");
        conn.execute_batch(
            "CREATE TABLE Students (name TEXT, class TEXT, marks INTEGER, company TEXT);",
        )
        .expect("create Students");
        for (name, class, marks, company) in rows {
            conn.execute(
                "INSERT INTO Students (name, class, marks, company) VALUES (?1, ?2, ?3, ?4)",
                rusqlite::params![name, class, marks, company],
            )
            .expect("insert student");
        }

        Self { _dir: dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn count_students(&self) -> i64 {
        Connection::open(&self.path)
            .expect("open sqlite file")
            .query_row("SELECT COUNT(*) FROM Students", [], |row| row.get(0))
            .expect("count students")
    }
}

//! Unit tests for the database layer.
//!
//! These tests verify schema creation, migration idempotency, and the
//! recorded schema version, using in-memory and temp-file SQLite databases.

use pocketreader::database::Database;

fn table_names(db: &Database) -> Vec<String> {
    let conn = db.connection();
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
        .unwrap();
    stmt.query_map([], |row| row.get(0))
        .unwrap()
        .filter_map(|r| r.ok())
        .collect()
}

/// Opening a fresh database should create the bookmarks and history tables.
#[test]
fn test_open_creates_tables() {
    let db = Database::open_in_memory().expect("Failed to open in-memory database");
    let tables = table_names(&db);
    assert!(tables.contains(&"bookmarks".to_string()));
    assert!(tables.contains(&"history".to_string()));
    assert!(tables.contains(&"schema_version".to_string()));
}

/// The schema version table should record the current version after migration.
#[test]
fn test_schema_version_recorded() {
    let db = Database::open_in_memory().unwrap();
    let version: i64 = db
        .connection()
        .query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, 1);
}

/// Both tables should use autoincrement integer primary keys.
#[test]
fn test_autoincrement_row_ids() {
    let db = Database::open_in_memory().unwrap();
    let conn = db.connection();

    conn.execute(
        "INSERT INTO bookmarks (title, url, date) VALUES ('A', 'https://a.com', 1)",
        [],
    )
    .unwrap();
    let first = conn.last_insert_rowid();
    conn.execute(
        "INSERT INTO bookmarks (title, url, date) VALUES ('B', 'https://b.com', 2)",
        [],
    )
    .unwrap();
    let second = conn.last_insert_rowid();

    assert!(second > first);
}

/// Reopening the same database file should preserve data and not fail
/// re-running migrations.
#[test]
fn test_reopen_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reader.db");

    {
        let db = Database::open(&path).unwrap();
        db.connection()
            .execute(
                "INSERT INTO history (title, url, date) VALUES ('Kept', 'https://kept.com', 7)",
                [],
            )
            .unwrap();
    }

    let db = Database::open(&path).unwrap();
    let count: i64 = db
        .connection()
        .query_row("SELECT COUNT(*) FROM history", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

//! Bookmark and history repository for PocketReader.
//!
//! Implements `RepositoryTrait` — the CRUD façade between the SQLite store
//! and the screen state holders. Reads are also exposed as `tokio::sync::watch`
//! snapshots that are republished after every mutation, so screens can mirror
//! the store reactively without polling.

use std::sync::{Arc, Mutex};

use rusqlite::{params, Connection};
use tokio::sync::watch;

use crate::database::Database;
use crate::types::bookmark::Bookmark;
use crate::types::errors::RepositoryError;
use crate::types::history::HistoryEntry;

/// Trait defining repository operations over bookmarks and history.
pub trait RepositoryTrait {
    fn get_all_bookmarks(&self) -> Result<Vec<Bookmark>, RepositoryError>;
    fn insert_bookmark(&self, title: &str, url: &str, date: i64) -> Result<i64, RepositoryError>;
    fn delete_bookmark(&self, id: i64) -> Result<(), RepositoryError>;
    fn clear_bookmarks(&self) -> Result<(), RepositoryError>;
    fn is_bookmarked(&self, url: &str) -> Result<bool, RepositoryError>;
    fn save_to_history(&self, title: &str, url: &str, date: i64) -> Result<i64, RepositoryError>;
    fn get_history(&self) -> Result<Vec<HistoryEntry>, RepositoryError>;
    fn is_in_history(&self, url: &str) -> Result<bool, RepositoryError>;
    /// Live snapshot of all bookmarks, newest first.
    fn watch_bookmarks(&self) -> watch::Receiver<Vec<Bookmark>>;
    /// Live snapshot of all history entries, newest first.
    fn watch_history(&self) -> watch::Receiver<Vec<HistoryEntry>>;
}

struct RepositoryInner {
    conn: Mutex<Connection>,
    bookmarks_tx: watch::Sender<Vec<Bookmark>>,
    history_tx: watch::Sender<Vec<HistoryEntry>>,
}

/// Cloneable repository handle backed by a single SQLite connection.
///
/// The connection is serialized behind a mutex; no lock is held across an
/// await point, so the handle is safe to share between async tasks.
#[derive(Clone)]
pub struct Repository {
    inner: Arc<RepositoryInner>,
}

impl Repository {
    /// Creates a repository over an opened database, taking ownership of the
    /// connection and publishing the initial snapshots.
    pub fn new(db: Database) -> Result<Self, RepositoryError> {
        let conn = db.into_connection();
        let bookmarks = query_bookmarks(&conn)?;
        let history = query_history(&conn)?;
        let (bookmarks_tx, _) = watch::channel(bookmarks);
        let (history_tx, _) = watch::channel(history);
        Ok(Self {
            inner: Arc::new(RepositoryInner {
                conn: Mutex::new(conn),
                bookmarks_tx,
                history_tx,
            }),
        })
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>, RepositoryError> {
        self.inner
            .conn
            .lock()
            .map_err(|_| RepositoryError::DatabaseError("store mutex poisoned".to_string()))
    }

    /// Re-queries the bookmarks table and publishes the new snapshot.
    fn publish_bookmarks(&self, conn: &Connection) -> Result<(), RepositoryError> {
        let rows = query_bookmarks(conn)?;
        self.inner.bookmarks_tx.send_replace(rows);
        Ok(())
    }

    /// Re-queries the history table and publishes the new snapshot.
    fn publish_history(&self, conn: &Connection) -> Result<(), RepositoryError> {
        let rows = query_history(conn)?;
        self.inner.history_tx.send_replace(rows);
        Ok(())
    }
}

fn row_to_bookmark(row: &rusqlite::Row) -> rusqlite::Result<Bookmark> {
    Ok(Bookmark {
        id: row.get(0)?,
        title: row.get(1)?,
        url: row.get(2)?,
        date: row.get(3)?,
    })
}

fn row_to_history(row: &rusqlite::Row) -> rusqlite::Result<HistoryEntry> {
    Ok(HistoryEntry {
        id: row.get(0)?,
        title: row.get(1)?,
        url: row.get(2)?,
        date: row.get(3)?,
    })
}

fn query_bookmarks(conn: &Connection) -> Result<Vec<Bookmark>, RepositoryError> {
    let mut stmt = conn.prepare("SELECT id, title, url, date FROM bookmarks ORDER BY date DESC")?;
    let rows = stmt.query_map([], row_to_bookmark)?;
    let mut results = Vec::new();
    for row in rows {
        results.push(row?);
    }
    Ok(results)
}

fn query_history(conn: &Connection) -> Result<Vec<HistoryEntry>, RepositoryError> {
    let mut stmt = conn.prepare("SELECT id, title, url, date FROM history ORDER BY date DESC")?;
    let rows = stmt.query_map([], row_to_history)?;
    let mut results = Vec::new();
    for row in rows {
        results.push(row?);
    }
    Ok(results)
}

impl RepositoryTrait for Repository {
    /// Returns all bookmarks ordered by date DESC.
    fn get_all_bookmarks(&self) -> Result<Vec<Bookmark>, RepositoryError> {
        let conn = self.lock()?;
        query_bookmarks(&conn)
    }

    /// Inserts a bookmark and returns the assigned row ID.
    ///
    /// Uniqueness by url is the caller's concern — check `is_bookmarked` first.
    fn insert_bookmark(&self, title: &str, url: &str, date: i64) -> Result<i64, RepositoryError> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT OR REPLACE INTO bookmarks (title, url, date) VALUES (?1, ?2, ?3)",
            params![title, url, date],
        )?;
        let id = conn.last_insert_rowid();
        self.publish_bookmarks(&conn)?;
        Ok(id)
    }

    /// Deletes a bookmark by ID.
    fn delete_bookmark(&self, id: i64) -> Result<(), RepositoryError> {
        let conn = self.lock()?;
        let affected = conn.execute("DELETE FROM bookmarks WHERE id = ?1", params![id])?;
        if affected == 0 {
            return Err(RepositoryError::NotFound(id));
        }
        self.publish_bookmarks(&conn)?;
        Ok(())
    }

    /// Deletes all bookmarks.
    fn clear_bookmarks(&self) -> Result<(), RepositoryError> {
        let conn = self.lock()?;
        conn.execute("DELETE FROM bookmarks", [])?;
        self.publish_bookmarks(&conn)?;
        Ok(())
    }

    /// Returns whether any bookmark row exists for the url.
    fn is_bookmarked(&self, url: &str) -> Result<bool, RepositoryError> {
        let conn = self.lock()?;
        let exists: bool = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM bookmarks WHERE url = ?1 LIMIT 1)",
            params![url],
            |row| row.get(0),
        )?;
        Ok(exists)
    }

    /// Inserts a history entry and returns the assigned row ID.
    ///
    /// Duplicate suppression by url is the caller's concern — check
    /// `is_in_history` first.
    fn save_to_history(&self, title: &str, url: &str, date: i64) -> Result<i64, RepositoryError> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT OR REPLACE INTO history (title, url, date) VALUES (?1, ?2, ?3)",
            params![title, url, date],
        )?;
        let id = conn.last_insert_rowid();
        self.publish_history(&conn)?;
        Ok(id)
    }

    /// Returns all history entries ordered by date DESC.
    fn get_history(&self) -> Result<Vec<HistoryEntry>, RepositoryError> {
        let conn = self.lock()?;
        query_history(&conn)
    }

    /// Returns whether any history row exists for the url.
    fn is_in_history(&self, url: &str) -> Result<bool, RepositoryError> {
        let conn = self.lock()?;
        let exists: bool = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM history WHERE url = ?1 LIMIT 1)",
            params![url],
            |row| row.get(0),
        )?;
        Ok(exists)
    }

    fn watch_bookmarks(&self) -> watch::Receiver<Vec<Bookmark>> {
        self.inner.bookmarks_tx.subscribe()
    }

    fn watch_history(&self) -> watch::Receiver<Vec<HistoryEntry>> {
        self.inner.history_tx.subscribe()
    }
}

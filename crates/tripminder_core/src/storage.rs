//! Key-value state storage contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide a stable read/write API over the persisted state values.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - A missing key reads as `None`; it is a valid initial-state condition,
//!   not an error.
//! - Writes replace the full value for a key atomically.

use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Well-known key holding the encoded todo list.
pub const TODOS_KEY: &str = "tripMateTodos";
/// Well-known key holding the encoded category list.
pub const CATEGORIES_KEY: &str = "tripMateCategories";

pub type StorageResult<T> = Result<T, StorageError>;

/// Storage-transport error for persisted state access.
#[derive(Debug)]
pub enum StorageError {
    Db(DbError),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Storage interface for the persisted state values.
///
/// The store writes through this seam after every mutation; implementations
/// decide where the flat strings actually live.
pub trait StateStorage {
    fn read_value(&self, key: &str) -> StorageResult<Option<String>>;
    fn write_value(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// SQLite-backed state storage over the `app_state` table.
#[derive(Debug)]
pub struct SqliteStateStorage<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStateStorage<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl StateStorage for SqliteStateStorage<'_> {
    fn read_value(&self, key: &str) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM app_state WHERE key = ?1;",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write_value(&self, key: &str, value: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO app_state (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }
}

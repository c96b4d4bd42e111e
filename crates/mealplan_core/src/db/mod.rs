//! SQLite storage bootstrap and schema migration entry points.
//!
//! # Responsibility
//! - Open and configure SQLite connections backing the key-value store.
//! - Apply schema migrations in deterministic order.
//!
//! # Invariants
//! - Migration version is tracked via `PRAGMA user_version`.
//! - Store adapters must not touch a connection before migrations succeed.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Table holding every persisted key-value record.
pub const KV_TABLE: &str = "kv_entries";

/// Failure while opening or migrating the key-value store file.
#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    /// The file was written by a newer binary; it is left untouched.
    StoreSchemaTooNew {
        store_version: u32,
        latest_supported: u32,
    },
    /// `user_version` claims a migrated store but `kv_entries` is absent.
    MissingKvTable { store_version: u32 },
}

impl DbError {
    /// Stable metadata-only code for log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Sqlite(_) => "sqlite_failed",
            Self::StoreSchemaTooNew { .. } => "store_schema_too_new",
            Self::MissingKvTable { .. } => "kv_table_missing",
        }
    }
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "key-value store sqlite error: {err}"),
            Self::StoreSchemaTooNew {
                store_version,
                latest_supported,
            } => write!(
                f,
                "key-value store schema v{store_version} is newer than supported v{latest_supported}"
            ),
            Self::MissingKvTable { store_version } => write!(
                f,
                "key-value store at schema v{store_version} has no `{KV_TABLE}` table"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::StoreSchemaTooNew { .. } | Self::MissingKvTable { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

//! SQLite-backed key-value store for the persisted timer record.
//!
//! One row per key, values encoded as JSON. The async surface serializes
//! every caller through a single connection guarded by a tokio mutex, which
//! is the store-level atomicity the tick controller and concurrent user
//! commands rely on. A tick's state-plus-ledger update commits in one
//! transaction so no partial tick is ever visible.

use rusqlite::{params, Connection};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::Mutex;

use super::data_dir;
use crate::duration::DEFAULT_TIMER_SECONDS;
use crate::error::StorageError;
use crate::ledger::UsageLedger;
use crate::timer::TimerState;

/// Persisted key names. Kept identical to the original product's storage
/// layout so an imported record reads back unchanged.
pub mod keys {
    pub const TIMER: &str = "timer";
    pub const IS_RUNNING: &str = "isRunning";
    pub const CUSTOM_DURATION: &str = "customDuration";
    pub const LIGHT_MODE: &str = "lightMode";
    pub const STATISTICS: &str = "statistics";
}

/// Key-value store holding the timer record, theme preference and
/// usage ledger.
pub struct Store {
    conn: Mutex<Connection>,
}

impl Store {
    /// Open the store at `~/.config/limber/limber.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the data directory or database cannot be
    /// opened or migrated.
    pub fn open() -> Result<Self, crate::error::CoreError> {
        let path = data_dir()?.join("limber.db");
        let conn = Connection::open(&path)
            .map_err(|source| StorageError::OpenFailed { path, source })?;
        migrate(&conn).map_err(StorageError::WriteFailed)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory store (for tests).
    pub fn open_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory().map_err(StorageError::ReadFailed)?;
        migrate(&conn).map_err(StorageError::WriteFailed)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Seed default state on first install.
    ///
    /// Idempotent: if a `timer` key already exists, nothing is written, so
    /// a customized duration survives restarts and re-initialization.
    pub async fn initialize_defaults(&self) -> Result<(), StorageError> {
        let mut conn = self.conn.lock().await;
        if kv_get_raw(&conn, keys::TIMER)?.is_some() {
            return Ok(());
        }
        let tx = conn.transaction().map_err(StorageError::WriteFailed)?;
        kv_set_json(&tx, keys::TIMER, &DEFAULT_TIMER_SECONDS)?;
        kv_set_json(&tx, keys::CUSTOM_DURATION, &DEFAULT_TIMER_SECONDS)?;
        kv_set_json(&tx, keys::IS_RUNNING, &false)?;
        tx.commit().map_err(StorageError::WriteFailed)
    }

    /// Read the full timer record, substituting defaults for absent keys.
    pub async fn timer_state(&self) -> Result<TimerState, StorageError> {
        let conn = self.conn.lock().await;
        let remaining_secs =
            kv_get_json(&conn, keys::TIMER)?.unwrap_or(DEFAULT_TIMER_SECONDS);
        let is_running = kv_get_json(&conn, keys::IS_RUNNING)?.unwrap_or(false);
        let custom_duration_secs =
            kv_get_json(&conn, keys::CUSTOM_DURATION)?.unwrap_or(DEFAULT_TIMER_SECONDS);
        Ok(TimerState {
            remaining_secs,
            is_running,
            custom_duration_secs,
        })
    }

    /// Write the full timer record in one transaction.
    pub async fn set_timer_state(&self, state: &TimerState) -> Result<(), StorageError> {
        let mut conn = self.conn.lock().await;
        let tx = conn.transaction().map_err(StorageError::WriteFailed)?;
        kv_set_json(&tx, keys::TIMER, &state.remaining_secs)?;
        kv_set_json(&tx, keys::IS_RUNNING, &state.is_running)?;
        kv_set_json(&tx, keys::CUSTOM_DURATION, &state.custom_duration_secs)?;
        tx.commit().map_err(StorageError::WriteFailed)
    }

    /// Flip only the run/pause flag.
    pub async fn set_running(&self, is_running: bool) -> Result<(), StorageError> {
        let conn = self.conn.lock().await;
        kv_set_json(&conn, keys::IS_RUNNING, &is_running)
    }

    /// Read the usage ledger, or an empty one if never written.
    pub async fn ledger(&self) -> Result<UsageLedger, StorageError> {
        let conn = self.conn.lock().await;
        Ok(kv_get_json(&conn, keys::STATISTICS)?.unwrap_or_default())
    }

    /// Persist the usage ledger.
    pub async fn save_ledger(&self, ledger: &UsageLedger) -> Result<(), StorageError> {
        let conn = self.conn.lock().await;
        kv_set_json(&conn, keys::STATISTICS, ledger)
    }

    /// Commit one tick's mutation -- updated countdown, run flag and ledger
    /// -- atomically. Either the whole tick lands or none of it does.
    pub async fn commit_tick(
        &self,
        state: &TimerState,
        ledger: &UsageLedger,
    ) -> Result<(), StorageError> {
        let mut conn = self.conn.lock().await;
        let tx = conn.transaction().map_err(StorageError::WriteFailed)?;
        kv_set_json(&tx, keys::TIMER, &state.remaining_secs)?;
        kv_set_json(&tx, keys::IS_RUNNING, &state.is_running)?;
        kv_set_json(&tx, keys::STATISTICS, ledger)?;
        tx.commit().map_err(StorageError::WriteFailed)
    }

    /// Theme preference; defaults to dark (false).
    pub async fn light_mode(&self) -> Result<bool, StorageError> {
        let conn = self.conn.lock().await;
        Ok(kv_get_json(&conn, keys::LIGHT_MODE)?.unwrap_or(false))
    }

    pub async fn set_light_mode(&self, light: bool) -> Result<(), StorageError> {
        let conn = self.conn.lock().await;
        kv_set_json(&conn, keys::LIGHT_MODE, &light)
    }
}

fn migrate(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS kv (
            key   TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );",
    )
}

fn kv_get_raw(conn: &Connection, key: &str) -> Result<Option<String>, StorageError> {
    let mut stmt = conn
        .prepare("SELECT value FROM kv WHERE key = ?1")
        .map_err(StorageError::ReadFailed)?;
    match stmt.query_row(params![key], |row| row.get::<_, String>(0)) {
        Ok(v) => Ok(Some(v)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(StorageError::ReadFailed(e)),
    }
}

fn kv_get_json<T: DeserializeOwned>(
    conn: &Connection,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match kv_get_raw(conn, key)? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StorageError::Corrupt {
                key: key.to_string(),
                source,
            }),
        None => Ok(None),
    }
}

fn kv_set_json<T: Serialize>(
    conn: &Connection,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|source| StorageError::Corrupt {
        key: key.to_string(),
        source,
    })?;
    conn.execute(
        "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
        params![key, raw],
    )
    .map_err(StorageError::WriteFailed)?;
    Ok(())
}

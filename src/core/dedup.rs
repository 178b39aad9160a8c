//! Durable dedup store backed by SQLite
//!
//! Records which event identities have already been turned into commands.
//! Presence of a row means a command was enqueued for that identity; its
//! absence is the sole gate for reprocessing. Rows are never updated or
//! deleted by the bridge.
//!
//! Storage errors always propagate to the caller; none are swallowed.

use std::fs;
use std::path::Path;

use chrono::Utc;
use rusqlite::{params, Connection};

use crate::error::{BridgeError, Result};

pub struct DedupStore {
    conn: Connection,
}

impl DedupStore {
    /// Open (or create) the store at `path`, creating parent directories
    /// and the `processed_events` table if needed.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS processed_events (
                event_id TEXT PRIMARY KEY,
                processed_at TEXT
            );",
        )?;
        Ok(Self { conn })
    }

    /// In-memory store, only reachable from tests.
    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS processed_events (
                event_id TEXT PRIMARY KEY,
                processed_at TEXT
            );",
        )?;
        Ok(Self { conn })
    }

    /// Whether a command has already been enqueued for this identity.
    pub fn has(&self, event_id: &str) -> Result<bool> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT 1 FROM processed_events WHERE event_id = ?1")?;
        stmt.exists(params![event_id]).map_err(BridgeError::from)
    }

    /// Idempotent insert: a single INSERT OR IGNORE statement, with no
    /// read-then-write gap.
    pub fn record(&self, event_id: &str) -> Result<()> {
        let mut stmt = self.conn.prepare_cached(
            "INSERT OR IGNORE INTO processed_events (event_id, processed_at) VALUES (?1, ?2)",
        )?;
        stmt.execute(params![event_id, Utc::now().to_rfc3339()])?;
        Ok(())
    }
}

//! SQLite-backed interaction store implementation.

use super::schema::INTERACTIONS_SCHEMA;
use super::trait_def::InteractionStore;
use crate::catalog::{Interaction, InteractionAction, TrackId};
use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::info;

/// SQLite-backed interaction store.
#[derive(Clone)]
pub struct SqliteInteractionStore {
    read_conn: Arc<Mutex<Connection>>,
    write_conn: Arc<Mutex<Connection>>,
}

impl SqliteInteractionStore {
    /// Create a new SqliteInteractionStore, creating the schema if needed.
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let db_path_ref = db_path.as_ref();

        let write_conn = Connection::open_with_flags(
            db_path_ref,
            rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE
                | rusqlite::OpenFlags::SQLITE_OPEN_CREATE
                | rusqlite::OpenFlags::SQLITE_OPEN_URI
                | rusqlite::OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .context("Failed to open interactions database")?;

        write_conn
            .execute_batch(INTERACTIONS_SCHEMA)
            .context("Failed to create interactions schema")?;

        write_conn
            .pragma_update(None, "journal_mode", "WAL")
            .context("Failed to set WAL mode on interactions write connection")?;

        let read_conn = Connection::open_with_flags(
            db_path_ref,
            rusqlite::OpenFlags::SQLITE_OPEN_READ_ONLY
                | rusqlite::OpenFlags::SQLITE_OPEN_URI
                | rusqlite::OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .context("Failed to open interactions database for reading")?;

        read_conn
            .pragma_update(None, "journal_mode", "WAL")
            .context("Failed to set WAL mode on interactions read connection")?;

        let total: usize =
            read_conn.query_row("SELECT COUNT(*) FROM interactions", [], |r| r.get(0))?;
        info!("Interaction store ready: {} interactions recorded", total);

        Ok(Self {
            read_conn: Arc::new(Mutex::new(read_conn)),
            write_conn: Arc::new(Mutex::new(write_conn)),
        })
    }
}

impl InteractionStore for SqliteInteractionStore {
    fn record(&self, interaction: &Interaction) -> Result<()> {
        let conn = self.write_conn.lock().unwrap();
        conn.execute(
            "INSERT INTO interactions (user_id, track_id, action, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                interaction.user_id,
                interaction.track_id,
                interaction.action.as_str(),
                interaction.created_at,
            ],
        )?;
        Ok(())
    }

    fn recent_liked_track_ids(&self, user_id: i64, limit: usize) -> Result<Vec<TrackId>> {
        let conn = self.read_conn.lock().unwrap();
        let mut stmt = conn.prepare_cached(
            "SELECT track_id FROM interactions
             WHERE user_id = ?1 AND action = ?2
             ORDER BY created_at DESC, id DESC
             LIMIT ?3",
        )?;

        let mut ids: Vec<TrackId> = stmt
            .query_map(
                params![user_id, InteractionAction::Like.as_str(), limit],
                |row| row.get(0),
            )?
            .collect::<rusqlite::Result<_>>()?;

        // Query returns newest first; callers expect most-recent-last.
        ids.reverse();
        Ok(ids)
    }

    fn interaction_count(&self, user_id: i64) -> Result<usize> {
        let conn = self.read_conn.lock().unwrap();
        let count: usize = conn.query_row(
            "SELECT COUNT(*) FROM interactions WHERE user_id = ?1",
            params![user_id],
            |r| r.get(0),
        )?;
        Ok(count)
    }
}

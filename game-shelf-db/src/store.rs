//! Persistence-access object owned by the application's composition root.
//!
//! `Store` replaces the usual "memoized global connection" pattern:
//! it is constructed exactly once at startup (provision, then open)
//! and handed to every screen, so there is no lazy-initialization
//! race to guard against. It lives for the whole process; SQLite
//! cleans up on process exit, so there is no explicit close.
//!
//! Every logical operation runs in its own transaction. A failed
//! statement rolls back when the transaction drops and surfaces as a
//! `StoreError` for the caller to report; it never aborts the process.

use std::path::{Path, PathBuf};

use rusqlite::Connection;
use thiserror::Error;

use game_shelf_model::{GameWithGenre, Genre, NewGame};

use crate::operations::{self, OperationError};
use crate::provision::{self, ProvisionError};
use crate::queries;
use crate::schema::{self, SchemaError};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Provisioning failed: {0}")]
    Provision(#[from] ProvisionError),
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),
    #[error(transparent)]
    Operation(#[from] OperationError),
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Handle to the writable game database.
pub struct Store {
    conn: Connection,
    path: Option<PathBuf>,
}

impl Store {
    /// Open the database at `path`, creating it (with schema) on first run.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        Self::open_with_seed(None, path)
    }

    /// Open the database at `path`, copying `seed` into place first if
    /// no database exists there yet.
    ///
    /// Provisioning failures are fatal: callers must not present any
    /// data screen when this errors.
    pub fn open_with_seed(seed: Option<&Path>, path: &Path) -> Result<Self, StoreError> {
        provision::provision_database(seed, path)?;
        let conn = schema::open_database(path)?;
        Ok(Self {
            conn,
            path: Some(path.to_path_buf()),
        })
    }

    /// In-memory store for tests.
    pub fn open_memory() -> Result<Self, StoreError> {
        Ok(Self {
            conn: schema::open_memory()?,
            path: None,
        })
    }

    /// The file path this store is bound to (`None` for in-memory).
    pub fn db_path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Raw connection access, mainly for assertions in tests.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    // ── Reads ───────────────────────────────────────────────────────────────

    pub fn list_genres(&mut self) -> Result<Vec<Genre>, StoreError> {
        let tx = self.conn.transaction()?;
        let genres = queries::list_genres(&tx)?;
        tx.commit()?;
        Ok(genres)
    }

    pub fn list_games(&mut self, title_filter: &str) -> Result<Vec<GameWithGenre>, StoreError> {
        let tx = self.conn.transaction()?;
        let games = queries::list_games(&tx, title_filter)?;
        tx.commit()?;
        Ok(games)
    }

    pub fn get_game(&mut self, id: i64) -> Result<Option<GameWithGenre>, StoreError> {
        let tx = self.conn.transaction()?;
        let game = queries::get_game_with_genre(&tx, id)?;
        tx.commit()?;
        Ok(game)
    }

    // ── Writes ──────────────────────────────────────────────────────────────

    pub fn add_game(&mut self, game: &NewGame) -> Result<i64, StoreError> {
        let tx = self.conn.transaction()?;
        let id = operations::insert_game(&tx, game)?;
        tx.commit()?;
        Ok(id)
    }

    pub fn update_game(&mut self, id: i64, game: &NewGame) -> Result<(), StoreError> {
        let tx = self.conn.transaction()?;
        operations::update_game(&tx, id, game)?;
        tx.commit()?;
        Ok(())
    }

    pub fn delete_game(&mut self, id: i64) -> Result<usize, StoreError> {
        let tx = self.conn.transaction()?;
        let removed = operations::delete_game(&tx, id)?;
        tx.commit()?;
        Ok(removed)
    }

    pub fn add_genre(&mut self, name: &str, description: Option<&str>) -> Result<i64, StoreError> {
        let tx = self.conn.transaction()?;
        let id = operations::insert_genre(&tx, name, description)?;
        tx.commit()?;
        Ok(id)
    }

    pub fn delete_genre(&mut self, id: i64) -> Result<usize, StoreError> {
        let tx = self.conn.transaction()?;
        let removed = operations::delete_genre(&tx, id)?;
        tx.commit()?;
        Ok(removed)
    }
}

//! Write operations for games and genres.

use game_shelf_model::NewGame;
use rusqlite::{Connection, params};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Game not found: id {0}")]
    GameNotFound(i64),
}

// ── Game Operations ─────────────────────────────────────────────────────────

/// Insert a game. Returns the generated row id.
pub fn insert_game(conn: &Connection, game: &NewGame) -> Result<i64, OperationError> {
    conn.execute(
        "INSERT INTO games (title, description, release_date, price, developer, rating, genre_id)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            game.title,
            game.description,
            game.release_date,
            game.price,
            game.developer,
            game.rating,
            game.genre_id,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Overwrite all fields of an existing game.
pub fn update_game(conn: &Connection, id: i64, game: &NewGame) -> Result<(), OperationError> {
    let changed = conn.execute(
        "UPDATE games SET title = ?2, description = ?3, release_date = ?4, price = ?5,
             developer = ?6, rating = ?7, genre_id = ?8
         WHERE id = ?1",
        params![
            id,
            game.title,
            game.description,
            game.release_date,
            game.price,
            game.developer,
            game.rating,
            game.genre_id,
        ],
    )?;
    if changed == 0 {
        return Err(OperationError::GameNotFound(id));
    }
    Ok(())
}

/// Delete a game by id. Returns the number of rows removed; deleting a
/// nonexistent id is not an error and removes zero rows.
pub fn delete_game(conn: &Connection, id: i64) -> Result<usize, OperationError> {
    let removed = conn.execute("DELETE FROM games WHERE id = ?1", params![id])?;
    Ok(removed)
}

// ── Genre Operations ────────────────────────────────────────────────────────

/// Insert a genre. Returns the generated row id.
pub fn insert_genre(
    conn: &Connection,
    name: &str,
    description: Option<&str>,
) -> Result<i64, OperationError> {
    conn.execute(
        "INSERT INTO genres (name, description) VALUES (?1, ?2)",
        params![name, description],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Delete a genre by id. Games tagged with it are left untouched; their
/// genre reference simply stops resolving.
pub fn delete_genre(conn: &Connection, id: i64) -> Result<usize, OperationError> {
    let removed = conn.execute("DELETE FROM genres WHERE id = ?1", params![id])?;
    Ok(removed)
}

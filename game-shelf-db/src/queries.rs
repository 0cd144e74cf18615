//! Read queries for the game database.

use game_shelf_model::{Game, GameWithGenre, Genre};
use rusqlite::{Connection, params};

use crate::operations::OperationError;

// ── Genre Queries ───────────────────────────────────────────────────────────

/// List all genres in id order.
pub fn list_genres(conn: &Connection) -> Result<Vec<Genre>, OperationError> {
    let mut stmt = conn.prepare("SELECT id, name, description FROM genres ORDER BY id")?;
    let rows = stmt.query_map([], row_to_genre)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

// ── Game Queries ────────────────────────────────────────────────────────────

/// List games whose title contains `title_filter` (case-insensitive).
/// An empty filter matches every row.
pub fn list_games(
    conn: &Connection,
    title_filter: &str,
) -> Result<Vec<GameWithGenre>, OperationError> {
    let pattern = format!("%{}%", title_filter);
    let mut stmt = conn.prepare(
        "SELECT games.id, games.title, games.description, games.release_date,
                games.price, games.developer, games.rating, games.genre_id,
                genres.name AS genre_name
         FROM games LEFT JOIN genres ON games.genre_id = genres.id
         WHERE games.title LIKE ?1
         ORDER BY games.title",
    )?;
    let rows = stmt.query_map(params![pattern], row_to_game_with_genre)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Fetch one game joined with its genre name.
///
/// `genre_name` comes back `None` when the game has no genre or the
/// referenced genre was deleted.
pub fn get_game_with_genre(
    conn: &Connection,
    id: i64,
) -> Result<Option<GameWithGenre>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT games.id, games.title, games.description, games.release_date,
                games.price, games.developer, games.rating, games.genre_id,
                genres.name AS genre_name
         FROM games LEFT JOIN genres ON games.genre_id = genres.id
         WHERE games.id = ?1",
    )?;
    let result = stmt.query_row(params![id], row_to_game_with_genre);
    match result {
        Ok(g) => Ok(Some(g)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

// ── Row Mapping Helpers ─────────────────────────────────────────────────────

fn row_to_genre(row: &rusqlite::Row<'_>) -> rusqlite::Result<Genre> {
    Ok(Genre {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
    })
}

fn row_to_game_with_genre(row: &rusqlite::Row<'_>) -> rusqlite::Result<GameWithGenre> {
    Ok(GameWithGenre {
        game: Game {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            release_date: row.get(3)?,
            price: row.get(4)?,
            developer: row.get(5)?,
            rating: row.get(6)?,
            genre_id: row.get(7)?,
        },
        genre_name: row.get(8)?,
    })
}

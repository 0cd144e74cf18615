//! Data model types for the game shelf.
//!
//! These types mirror the persistent schema: game entries and the
//! genres they may reference. A game's `genre_id` is an optional,
//! non-enforced reference — the referenced genre can be deleted out
//! from under it, so joins resolve the name as `Option<String>`.

use serde::{Deserialize, Serialize};

/// Lowest rating a form will accept.
pub const RATING_MIN: i64 = 1;
/// Highest rating a form will accept.
pub const RATING_MAX: i64 = 5;
/// Rating pre-selected on an empty form.
pub const RATING_DEFAULT: i64 = 3;

// ── Genre ───────────────────────────────────────────────────────────────────

/// A genre row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Genre {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

// ── Game ────────────────────────────────────────────────────────────────────

/// A game row as stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Free-form date text; no format is enforced.
    #[serde(default)]
    pub release_date: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub developer: Option<String>,
    pub rating: i64,
    /// May point at a genre that no longer exists.
    #[serde(default)]
    pub genre_id: Option<i64>,
}

/// Field set for inserting or updating a game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGame {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub developer: Option<String>,
    pub rating: i64,
    #[serde(default)]
    pub genre_id: Option<i64>,
}

impl Default for NewGame {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: None,
            release_date: None,
            price: 0.0,
            developer: None,
            rating: RATING_DEFAULT,
            genre_id: None,
        }
    }
}

/// A game joined with its genre's name.
///
/// `genre_name` is `None` when the game has no genre or when the
/// referenced genre has been deleted; callers display "unspecified".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameWithGenre {
    pub game: Game,
    #[serde(default)]
    pub genre_name: Option<String>,
}

// ── Field parsing ───────────────────────────────────────────────────────────

/// Parse free-form price input. Unparsable input becomes 0.
pub fn parse_price(input: &str) -> f64 {
    input.trim().parse().unwrap_or(0.0)
}

/// Whether a rating is within the form-accepted 1–5 range.
pub fn rating_in_range(rating: i64) -> bool {
    (RATING_MIN..=RATING_MAX).contains(&rating)
}

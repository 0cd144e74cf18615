//! SQLite persistence layer for the game shelf.
//!
//! Provides first-run provisioning (copy-if-absent of a bundled seed
//! database), idempotent schema initialization, and the query/operation
//! APIs the presentation layer consumes, backed by SQLite (via rusqlite
//! with the bundled feature).

pub mod operations;
pub mod provision;
pub mod queries;
pub mod schema;
pub mod store;

pub use operations::{
    OperationError, delete_game, delete_genre, insert_game, insert_genre, update_game,
};
pub use provision::{DB_FILE_NAME, ProvisionError, default_db_path, provision_database};
pub use queries::{get_game_with_genre, list_games, list_genres};
pub use schema::{SchemaError, open_database, open_memory};
pub use store::{Store, StoreError};

//! game-shelf CLI
//!
//! Command-line catalog of video games backed by a local SQLite
//! database, provisioned from an optional bundled seed on first run.

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use game_shelf_db::Store;

mod commands;
mod error;

pub(crate) use error::CliError;

#[derive(Parser)]
#[command(name = "game-shelf")]
#[command(about = "Browse and manage a local video game catalog", long_about = None)]
struct Cli {
    /// Path to the database file (defaults to the per-user data directory)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Seed database copied into place on first run
    #[arg(long, global = true)]
    seed: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse, search, and edit game entries
    Games {
        #[command(subcommand)]
        action: GamesAction,
    },

    /// Manage genres
    Genres {
        #[command(subcommand)]
        action: GenresAction,
    },

    /// Database utilities
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Optional field flags shared by `games add` and `games edit`.
#[derive(Args, Clone)]
struct GameFieldArgs {
    /// Game title
    #[arg(long)]
    title: Option<String>,

    /// Longer description
    #[arg(long)]
    description: Option<String>,

    /// Release date, free-form (e.g. 2016-04-05)
    #[arg(long)]
    release_date: Option<String>,

    /// Price; unparsable input is stored as 0
    #[arg(long)]
    price: Option<String>,

    /// Developer name
    #[arg(long)]
    developer: Option<String>,

    /// Rating from 1 to 5
    #[arg(long)]
    rating: Option<i64>,

    /// Genre id (see 'genres list'); omit for unspecified
    #[arg(long)]
    genre_id: Option<i64>,
}

#[derive(Subcommand)]
enum GamesAction {
    /// List games, optionally filtered by a title substring
    List {
        /// Case-insensitive substring to match against titles
        filter: Option<String>,
    },

    /// Show one game with its genre
    Show { id: i64 },

    /// Add a game (--title is required)
    Add {
        #[command(flatten)]
        fields: GameFieldArgs,
    },

    /// Edit an existing game; omitted flags keep their current value
    Edit {
        id: i64,

        #[command(flatten)]
        fields: GameFieldArgs,
    },

    /// Delete a game
    Delete { id: i64 },
}

#[derive(Subcommand)]
enum GenresAction {
    /// List all genres
    List,

    /// Add a genre
    Add {
        /// Genre name
        #[arg(long)]
        name: String,

        /// Optional description
        #[arg(long)]
        description: Option<String>,
    },

    /// Delete a genre (games tagged with it are kept)
    Delete { id: i64 },
}

#[derive(Subcommand)]
enum DbAction {
    /// Print the resolved database path
    Path,
}

fn main() {
    init_logger();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        log::error!("{} {}", "\u{2718}".if_supports_color(Stdout, |t| t.red()), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let db_path = match cli.db {
        Some(p) => p,
        None => game_shelf_db::default_db_path()
            .map_err(|e| CliError::database(format!("Cannot resolve database path: {}", e)))?,
    };

    // `db path` must work before any database exists
    if let Commands::Db { action: DbAction::Path } = cli.command {
        log::info!("{}", db_path.display());
        return Ok(());
    }

    // Provisioning failures are fatal; no screen runs without a store.
    let mut store = Store::open_with_seed(cli.seed.as_deref(), &db_path)
        .map_err(|e| CliError::database(format!("Failed to open database: {}", e)))?;

    match cli.command {
        Commands::Games { action } => match action {
            GamesAction::List { filter } => commands::games::run_list(&mut store, filter),
            GamesAction::Show { id } => commands::games::run_show(&mut store, id),
            GamesAction::Add { fields } => commands::games::run_add(&mut store, fields),
            GamesAction::Edit { id, fields } => commands::games::run_edit(&mut store, id, fields),
            GamesAction::Delete { id } => commands::games::run_delete(&mut store, id),
        },
        Commands::Genres { action } => match action {
            GenresAction::List => commands::genres::run_list(&mut store),
            GenresAction::Add { name, description } => {
                commands::genres::run_add(&mut store, name, description)
            }
            GenresAction::Delete { id } => commands::genres::run_delete(&mut store, id),
        },
        Commands::Db { action: DbAction::Path } => unreachable!("handled above"),
    }
}

/// Message-only logger; `RUST_LOG` overrides the default level.
fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();
}

pub(crate) fn log_blank() {
    log::info!("");
}

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use game_shelf_db::Store;
use game_shelf_model::{NewGame, parse_price, rating_in_range};

use crate::{CliError, GameFieldArgs};

use super::{genre_label, stars};

pub(crate) fn run_list(store: &mut Store, filter: Option<String>) -> Result<(), CliError> {
    let filter = filter.unwrap_or_default();
    let games = store
        .list_games(&filter)
        .map_err(|e| CliError::database(format!("Failed to list games: {}", e)))?;

    if games.is_empty() {
        log::info!(
            "{}",
            "No games found.".if_supports_color(Stdout, |t| t.dimmed()),
        );
        return Ok(());
    }

    for entry in &games {
        log::info!(
            "  {:>4}  {}  {}",
            entry.game.id,
            entry.game.title.if_supports_color(Stdout, |t| t.bold()),
            format!(
                "[{}] {}",
                genre_label(entry.genre_name.as_deref()),
                stars(entry.game.rating),
            )
            .if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    crate::log_blank();
    log::info!("{} games", games.len());
    Ok(())
}

pub(crate) fn run_show(store: &mut Store, id: i64) -> Result<(), CliError> {
    let entry = store
        .get_game(id)
        .map_err(|e| CliError::database(format!("Failed to load game: {}", e)))?
        .ok_or_else(|| CliError::not_found(format!("no game with id {}", id)))?;

    let game = &entry.game;
    log::info!("{}", game.title.if_supports_color(Stdout, |t| t.bold()));
    log::info!(
        "  {}  {}",
        "Developer:".if_supports_color(Stdout, |t| t.cyan()),
        game.developer.as_deref().unwrap_or("unknown"),
    );
    log::info!(
        "  {}   {}",
        "Released:".if_supports_color(Stdout, |t| t.cyan()),
        game.release_date.as_deref().unwrap_or("unknown"),
    );
    log::info!(
        "  {}      {}",
        "Genre:".if_supports_color(Stdout, |t| t.cyan()),
        genre_label(entry.genre_name.as_deref()),
    );
    log::info!(
        "  {}      ${:.2}",
        "Price:".if_supports_color(Stdout, |t| t.cyan()),
        game.price,
    );
    log::info!(
        "  {}     {}",
        "Rating:".if_supports_color(Stdout, |t| t.cyan()),
        stars(game.rating),
    );
    if let Some(ref description) = game.description {
        crate::log_blank();
        log::info!("  {}", description);
    }
    Ok(())
}

pub(crate) fn run_add(store: &mut Store, fields: GameFieldArgs) -> Result<(), CliError> {
    let title = match fields.title {
        Some(ref t) if !t.trim().is_empty() => t.trim().to_string(),
        _ => return Err(CliError::invalid_input("Game title is required (--title)")),
    };

    let mut game = NewGame {
        title,
        description: fields.description.clone(),
        release_date: fields.release_date.clone(),
        developer: fields.developer.clone(),
        genre_id: fields.genre_id,
        ..Default::default()
    };
    if let Some(ref price) = fields.price {
        game.price = parse_price(price);
    }
    if let Some(rating) = fields.rating {
        game.rating = checked_rating(rating)?;
    }

    let id = store
        .add_game(&game)
        .map_err(|e| CliError::database(format!("Failed to add game: {}", e)))?;

    log::info!(
        "{} Added \"{}\" (id {})",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        game.title,
        id,
    );
    Ok(())
}

pub(crate) fn run_edit(store: &mut Store, id: i64, fields: GameFieldArgs) -> Result<(), CliError> {
    // Pre-populate from the existing row, like the edit form does
    let existing = store
        .get_game(id)
        .map_err(|e| CliError::database(format!("Failed to load game: {}", e)))?
        .ok_or_else(|| CliError::not_found(format!("no game with id {}", id)))?
        .game;

    let mut game = NewGame {
        title: existing.title,
        description: existing.description,
        release_date: existing.release_date,
        price: existing.price,
        developer: existing.developer,
        rating: existing.rating,
        genre_id: existing.genre_id,
    };

    if let Some(title) = fields.title {
        if title.trim().is_empty() {
            return Err(CliError::invalid_input("Game title cannot be empty"));
        }
        game.title = title.trim().to_string();
    }
    if let Some(description) = fields.description {
        game.description = Some(description);
    }
    if let Some(release_date) = fields.release_date {
        game.release_date = Some(release_date);
    }
    if let Some(ref price) = fields.price {
        game.price = parse_price(price);
    }
    if let Some(developer) = fields.developer {
        game.developer = Some(developer);
    }
    if let Some(rating) = fields.rating {
        game.rating = checked_rating(rating)?;
    }
    if let Some(genre_id) = fields.genre_id {
        game.genre_id = Some(genre_id);
    }

    store
        .update_game(id, &game)
        .map_err(|e| CliError::database(format!("Failed to update game: {}", e)))?;

    log::info!(
        "{} Updated \"{}\" (id {})",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        game.title,
        id,
    );
    Ok(())
}

pub(crate) fn run_delete(store: &mut Store, id: i64) -> Result<(), CliError> {
    let removed = store
        .delete_game(id)
        .map_err(|e| CliError::database(format!("Failed to delete game: {}", e)))?;

    if removed == 0 {
        log::info!(
            "{}",
            format!("No game with id {}", id).if_supports_color(Stdout, |t| t.dimmed()),
        );
    } else {
        log::info!(
            "{} Deleted game {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            id,
        );
    }
    Ok(())
}

/// The 1–5 range lives in this layer, not the schema.
fn checked_rating(rating: i64) -> Result<i64, CliError> {
    if rating_in_range(rating) {
        Ok(rating)
    } else {
        Err(CliError::invalid_input(format!(
            "Rating must be between 1 and 5, got {}",
            rating,
        )))
    }
}

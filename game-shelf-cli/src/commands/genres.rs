use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use game_shelf_db::Store;

use crate::CliError;

pub(crate) fn run_list(store: &mut Store) -> Result<(), CliError> {
    let genres = store
        .list_genres()
        .map_err(|e| CliError::database(format!("Failed to list genres: {}", e)))?;

    if genres.is_empty() {
        log::info!(
            "{}",
            "No genres yet. Add one with 'genres add --name <NAME>'."
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
        return Ok(());
    }

    for genre in &genres {
        log::info!(
            "  {:>4}  {}{}",
            genre.id,
            genre.name.if_supports_color(Stdout, |t| t.bold()),
            match genre.description {
                Some(ref d) => format!("  {}", d.if_supports_color(Stdout, |t| t.dimmed())),
                None => String::new(),
            },
        );
    }
    Ok(())
}

pub(crate) fn run_add(
    store: &mut Store,
    name: String,
    description: Option<String>,
) -> Result<(), CliError> {
    if name.trim().is_empty() {
        return Err(CliError::invalid_input("Genre name is required"));
    }

    let id = store
        .add_genre(name.trim(), description.as_deref())
        .map_err(|e| CliError::database(format!("Failed to add genre: {}", e)))?;

    log::info!(
        "{} Added genre \"{}\" (id {})",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        name.trim(),
        id,
    );
    Ok(())
}

pub(crate) fn run_delete(store: &mut Store, id: i64) -> Result<(), CliError> {
    let removed = store
        .delete_genre(id)
        .map_err(|e| CliError::database(format!("Failed to delete genre: {}", e)))?;

    if removed == 0 {
        log::info!(
            "{}",
            format!("No genre with id {}", id).if_supports_color(Stdout, |t| t.dimmed()),
        );
    } else {
        log::info!(
            "{} Deleted genre {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            id,
        );
        log::info!(
            "{}",
            "Games tagged with this genre were kept; they now show an unspecified genre."
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    Ok(())
}

use game_shelf_db::*;
use game_shelf_model::NewGame;

fn titled(title: &str) -> NewGame {
    NewGame {
        title: title.to_string(),
        ..Default::default()
    }
}

#[test]
fn search_is_case_insensitive_substring() {
    let conn = open_memory().unwrap();
    insert_game(&conn, &titled("Quantum Break")).unwrap();

    let hits = list_games(&conn, "quantum").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].game.title, "Quantum Break");

    let hits = list_games(&conn, "BREAK").unwrap();
    assert_eq!(hits.len(), 1);

    assert!(list_games(&conn, "zzz").unwrap().is_empty());
}

#[test]
fn empty_filter_returns_all_rows() {
    let conn = open_memory().unwrap();
    insert_game(&conn, &titled("Alpha")).unwrap();
    insert_game(&conn, &titled("Beta")).unwrap();
    insert_game(&conn, &titled("Gamma")).unwrap();

    assert_eq!(list_games(&conn, "").unwrap().len(), 3);
}

#[test]
fn listing_is_title_ordered() {
    let conn = open_memory().unwrap();
    insert_game(&conn, &titled("Zork")).unwrap();
    insert_game(&conn, &titled("Axiom Verge")).unwrap();
    insert_game(&conn, &titled("Myst")).unwrap();

    let titles: Vec<_> = list_games(&conn, "")
        .unwrap()
        .into_iter()
        .map(|g| g.game.title)
        .collect();
    assert_eq!(titles, vec!["Axiom Verge", "Myst", "Zork"]);
}

#[test]
fn listing_joins_genre_names() {
    let conn = open_memory().unwrap();
    let genre_id = insert_genre(&conn, "Adventure", None).unwrap();
    insert_game(
        &conn,
        &NewGame {
            title: "Grim Fandango".to_string(),
            genre_id: Some(genre_id),
            ..Default::default()
        },
    )
    .unwrap();
    insert_game(&conn, &titled("Tetris")).unwrap();

    let games = list_games(&conn, "").unwrap();
    let grim = games.iter().find(|g| g.game.title == "Grim Fandango").unwrap();
    let tetris = games.iter().find(|g| g.game.title == "Tetris").unwrap();
    assert_eq!(grim.genre_name.as_deref(), Some("Adventure"));
    assert_eq!(tetris.genre_name, None);
}

#[test]
fn get_missing_game_returns_none() {
    let conn = open_memory().unwrap();
    assert!(get_game_with_genre(&conn, 7).unwrap().is_none());
}

#[test]
fn list_genres_in_id_order() {
    let conn = open_memory().unwrap();
    insert_genre(&conn, "Strategy", None).unwrap();
    insert_genre(&conn, "Arcade", None).unwrap();

    let names: Vec<_> = list_genres(&conn).unwrap().into_iter().map(|g| g.name).collect();
    assert_eq!(names, vec!["Strategy", "Arcade"]);
}

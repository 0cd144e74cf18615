use game_shelf_db::*;
use game_shelf_model::{NewGame, parse_price};

fn sample_game() -> NewGame {
    NewGame {
        title: "X".to_string(),
        description: None,
        release_date: None,
        price: parse_price("19.99"),
        developer: None,
        rating: 4,
        genre_id: None,
    }
}

#[test]
fn insert_and_fetch_round_trip() {
    let conn = open_memory().unwrap();
    let id = insert_game(&conn, &sample_game()).unwrap();

    let fetched = get_game_with_genre(&conn, id).unwrap().unwrap();
    assert_eq!(fetched.game.title, "X");
    assert_eq!(fetched.game.price, 19.99);
    assert_eq!(fetched.game.rating, 4);
    assert_eq!(fetched.game.genre_id, None);
    assert_eq!(fetched.genre_name, None);
}

#[test]
fn ratings_survive_round_trip() {
    let conn = open_memory().unwrap();
    for rating in 1..=5 {
        let id = insert_game(
            &conn,
            &NewGame {
                title: format!("Game {rating}"),
                rating,
                ..Default::default()
            },
        )
        .unwrap();
        let fetched = get_game_with_genre(&conn, id).unwrap().unwrap();
        assert_eq!(fetched.game.rating, rating);
    }
}

#[test]
fn update_then_fetch() {
    let conn = open_memory().unwrap();
    let id = insert_game(&conn, &sample_game()).unwrap();

    let mut updated = sample_game();
    updated.title = "Y".to_string();
    update_game(&conn, id, &updated).unwrap();

    let fetched = get_game_with_genre(&conn, id).unwrap().unwrap();
    assert_eq!(fetched.game.title, "Y");
    // Everything else unchanged
    assert_eq!(fetched.game.price, 19.99);
    assert_eq!(fetched.game.rating, 4);
    assert_eq!(fetched.game.developer, None);
}

#[test]
fn update_missing_game_errors() {
    let conn = open_memory().unwrap();
    let result = update_game(&conn, 999, &sample_game());
    assert!(matches!(result, Err(OperationError::GameNotFound(999))));
}

#[test]
fn delete_game_removes_row() {
    let conn = open_memory().unwrap();
    let id = insert_game(&conn, &sample_game()).unwrap();

    assert_eq!(delete_game(&conn, id).unwrap(), 1);
    assert!(get_game_with_genre(&conn, id).unwrap().is_none());
}

#[test]
fn delete_nonexistent_game_is_not_an_error() {
    let conn = open_memory().unwrap();
    assert_eq!(delete_game(&conn, 424242).unwrap(), 0);
}

#[test]
fn insert_genre_and_list() {
    let conn = open_memory().unwrap();
    let id = insert_genre(&conn, "RPG", Some("Role-playing")).unwrap();
    assert!(id > 0);

    let genres = list_genres(&conn).unwrap();
    assert_eq!(genres.len(), 1);
    assert_eq!(genres[0].name, "RPG");
    assert_eq!(genres[0].description.as_deref(), Some("Role-playing"));
}

#[test]
fn deleted_genre_leaves_games_intact() {
    let conn = open_memory().unwrap();
    let genre_id = insert_genre(&conn, "Shooter", None).unwrap();
    let game_id = insert_game(
        &conn,
        &NewGame {
            title: "Doom".to_string(),
            genre_id: Some(genre_id),
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(delete_genre(&conn, genre_id).unwrap(), 1);

    // The game survives, keeps its now-dangling genre_id, and the join
    // resolves to "unspecified" (no name) rather than an error.
    let fetched = get_game_with_genre(&conn, game_id).unwrap().unwrap();
    assert_eq!(fetched.game.title, "Doom");
    assert_eq!(fetched.game.genre_id, Some(genre_id));
    assert_eq!(fetched.genre_name, None);
}

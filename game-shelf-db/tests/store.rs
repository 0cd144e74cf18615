use game_shelf_db::{Store, StoreError};
use game_shelf_model::NewGame;

#[test]
fn store_crud_cycle() {
    let mut store = Store::open_memory().unwrap();
    assert!(store.db_path().is_none());

    let genre_id = store.add_genre("Platformer", None).unwrap();
    let game_id = store
        .add_game(&NewGame {
            title: "Celeste".to_string(),
            price: 19.99,
            rating: 5,
            genre_id: Some(genre_id),
            ..Default::default()
        })
        .unwrap();

    let fetched = store.get_game(game_id).unwrap().unwrap();
    assert_eq!(fetched.genre_name.as_deref(), Some("Platformer"));

    let mut updated = NewGame {
        title: "Celeste".to_string(),
        price: 9.99,
        rating: 5,
        genre_id: Some(genre_id),
        ..Default::default()
    };
    updated.developer = Some("Extremely OK Games".to_string());
    store.update_game(game_id, &updated).unwrap();

    let fetched = store.get_game(game_id).unwrap().unwrap();
    assert_eq!(fetched.game.price, 9.99);
    assert_eq!(fetched.game.developer.as_deref(), Some("Extremely OK Games"));

    assert_eq!(store.delete_game(game_id).unwrap(), 1);
    assert!(store.get_game(game_id).unwrap().is_none());
}

#[test]
fn failed_statement_reports_and_leaves_store_usable() {
    let mut store = Store::open_memory().unwrap();
    let result = store.update_game(1, &NewGame::default());
    assert!(matches!(result, Err(StoreError::Operation(_))));

    // The failure is recovered locally; the store keeps working.
    store
        .add_game(&NewGame {
            title: "Hades".to_string(),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(store.list_games("hades").unwrap().len(), 1);
}

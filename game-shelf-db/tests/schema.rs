use game_shelf_db::open_memory;
use game_shelf_db::schema::{CURRENT_VERSION, create_schema};

#[test]
fn create_schema_in_memory() {
    let conn = open_memory().unwrap();
    let version: i32 = conn
        .query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_version",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(version, CURRENT_VERSION);
}

#[test]
fn schema_is_idempotent() {
    let conn = open_memory().unwrap();
    // Creating again should not error
    create_schema(&conn).unwrap();
}

#[test]
fn all_tables_exist() {
    let conn = open_memory().unwrap();
    let tables = ["schema_version", "genres", "games"];
    for table in tables {
        let exists: bool = conn
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name=?1)",
                [table],
                |row| row.get(0),
            )
            .unwrap();
        assert!(exists, "table '{}' should exist", table);
    }
}

#[test]
fn genre_reference_has_no_foreign_key() {
    // The dangling-reference behavior depends on games.genre_id carrying
    // no FK constraint; a schema change here would silently break it.
    let conn = open_memory().unwrap();
    let fk_count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM pragma_foreign_key_list('games')",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(fk_count, 0);
}

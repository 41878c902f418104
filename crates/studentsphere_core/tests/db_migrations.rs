use rusqlite::Connection;
use studentsphere_core::db::migrations::latest_version;
use studentsphere_core::db::{open_db, open_db_in_memory, DbError};
use studentsphere_core::{SqliteStore, StoreError};

fn user_version(conn: &Connection) -> u32 {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .unwrap()
}

fn kv_columns(conn: &Connection) -> Vec<String> {
    let mut stmt = conn.prepare("PRAGMA table_info(kv_entries);").unwrap();
    let names = stmt
        .query_map([], |row| row.get::<_, String>(1))
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    names
}

#[test]
fn fresh_database_gets_the_key_value_table() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(user_version(&conn), latest_version());
    assert_eq!(kv_columns(&conn), ["key", "value", "updated_at"]);
}

#[test]
fn reopening_a_migrated_file_keeps_its_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("portal.sqlite3");

    let conn = open_db(&path).unwrap();
    conn.execute(
        "INSERT INTO kv_entries (key, value) VALUES ('studentsphere_notes', '[]');",
        [],
    )
    .unwrap();
    drop(conn);

    let conn = open_db(&path).unwrap();
    assert_eq!(user_version(&conn), latest_version());
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM kv_entries;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn updated_at_defaults_to_epoch_millis() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO kv_entries (key, value) VALUES ('k', 'v');",
        [],
    )
    .unwrap();

    let updated_at: i64 = conn
        .query_row("SELECT updated_at FROM kv_entries WHERE key = 'k';", [], |row| {
            row.get(0)
        })
        .unwrap();
    // Any time after 2020-01-01 expressed in milliseconds.
    assert!(updated_at > 1_577_836_800_000);
}

#[test]
fn newer_schema_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");
    let conn = Connection::open(&path).unwrap();
    conn.pragma_update(None, "user_version", 42).unwrap();
    drop(conn);

    match open_db(&path) {
        Err(DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        }) => {
            assert_eq!(db_version, 42);
            assert_eq!(latest_supported, latest_version());
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("future schema should be refused"),
    }

    let store_err = SqliteStore::open(&path).err().unwrap();
    assert!(matches!(
        store_err,
        StoreError::Db(DbError::UnsupportedSchemaVersion { .. })
    ));
}

#[test]
fn adopting_a_bare_connection_migrates_it() {
    let conn = Connection::open_in_memory().unwrap();
    assert_eq!(user_version(&conn), 0);

    let store = SqliteStore::from_connection(conn).unwrap();
    assert_eq!(user_version(store.connection()), latest_version());
}

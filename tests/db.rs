use diesel::prelude::*;
use diesel::sql_types::Text;

use user_directory::db::unicode_lower;
use user_directory::schema::users;

mod common;

#[derive(QueryableByName)]
struct JournalMode {
    #[diesel(sql_type = Text)]
    journal_mode: String,
}

#[test]
fn test_pooled_connections_use_wal() {
    let test_db = common::TestDb::new("test_pooled_connections_use_wal.db");
    let mut conn = test_db.pool().get().expect("connection from pool");

    let mode = diesel::sql_query("PRAGMA journal_mode")
        .get_result::<JournalMode>(&mut conn)
        .expect("journal mode");

    assert_eq!(mode.journal_mode.to_lowercase(), "wal");
}

#[test]
fn test_migrations_create_empty_users_table() {
    let test_db = common::TestDb::new("test_migrations_create_users.db");
    let mut conn = test_db.pool().get().expect("connection from pool");

    let count = users::table
        .count()
        .get_result::<i64>(&mut conn)
        .expect("users table exists");

    assert_eq!(count, 0);
}

#[test]
fn test_pooled_connections_lower_unicode_text() {
    let test_db = common::TestDb::empty("test_pooled_connections_lower_unicode.db");
    let mut conn = test_db.pool().get().expect("connection from pool");

    let lowered = diesel::select(unicode_lower("ÉLODIE Ørsted"))
        .get_result::<String>(&mut conn)
        .expect("unicode_lower is registered");

    assert_eq!(lowered, "élodie ørsted");
}

#![allow(dead_code)]

use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

use user_directory::db::{DbPool, establish_connection_pool};
use user_directory::domain::types::UserId;
use user_directory::domain::user::User;
use user_directory::repository::{DieselRepository, UserWriter};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

/// SQLite database in a temporary directory, removed on drop.
pub struct TestDb {
    _dir: TempDir,
    pool: DbPool,
}

impl TestDb {
    /// Creates a database with all migrations applied.
    pub fn new(name: &str) -> Self {
        let test_db = Self::empty(name);
        let mut pooled = test_db.pool.get().expect("connection from pool");
        let conn: &mut SqliteConnection = &mut pooled;
        conn.run_pending_migrations(MIGRATIONS)
            .expect("migrations should apply");
        drop(pooled);
        test_db
    }

    /// Creates a database without any schema.
    pub fn empty(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("temporary directory");
        let path = dir.path().join(name);
        let pool = establish_connection_pool(path.to_str().expect("utf-8 path"))
            .expect("pool should build");
        Self { _dir: dir, pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool.clone())
    }

    pub fn seed(&self, users: &[User]) {
        let inserted = self.repo().replace_users(users).expect("seed users");
        assert_eq!(inserted, users.len());
    }
}

pub fn user(id: i32, first: &str, last: &str, skill: &str, active: bool) -> User {
    User {
        id: UserId::new(id).expect("valid id"),
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
        avatar: Some(format!("https://avatars.example.com/{id}.png")),
        school: "State University".to_string(),
        title: "Engineer".to_string(),
        main_skill: skill.to_string(),
        secondary_skills: vec!["SQL".to_string()],
        description: None,
        active,
        phone_number: None,
    }
}

/// Three active users with ids 1..=3 and main skills Go, Rust, Go.
pub fn three_users() -> Vec<User> {
    vec![
        user(1, "Ann", "Archer", "Go", true),
        user(2, "Ben", "Baker", "Rust", true),
        user(3, "Cid", "Carter", "Go", true),
    ]
}

//! Replaces the contents of the `users` table with records from a JSON file.
//!
//! Usage: `seed_users [path]`, defaulting to `data/sample_data.json`.

use std::path::{Path, PathBuf};

use dotenvy::dotenv;

use user_directory::db::establish_connection_pool;
use user_directory::domain::user::User;
use user_directory::load_server_config;
use user_directory::repository::{DieselRepository, UserWriter};

const DEFAULT_DATA_PATH: &str = "data/sample_data.json";

#[derive(Debug, thiserror::Error)]
enum SeedError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("duplicate user id {0}")]
    DuplicateId(i32),
    #[error("duplicate email {0}")]
    DuplicateEmail(String),
}

fn load_users(path: &Path) -> Result<Vec<User>, SeedError> {
    let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let users: Vec<User> = serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    check_unique(&users)?;
    Ok(users)
}

fn check_unique(users: &[User]) -> Result<(), SeedError> {
    let mut ids = std::collections::HashSet::new();
    let mut emails = std::collections::HashSet::new();
    for user in users {
        if !ids.insert(user.id) {
            return Err(SeedError::DuplicateId(user.id.get()));
        }
        if !emails.insert(user.email.to_lowercase()) {
            return Err(SeedError::DuplicateEmail(user.email.clone()));
        }
    }
    Ok(())
}

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let server_config = match load_server_config() {
        Ok(server_config) => server_config,
        Err(err) => {
            log::error!("Error loading server config: {err}");
            std::process::exit(1);
        }
    };

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

    let users = match load_users(&path) {
        Ok(users) => users,
        Err(err) => {
            log::error!("Failed to load seed data: {err}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&server_config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    let repo = DieselRepository::new(pool);

    match repo.replace_users(&users) {
        Ok(inserted) => log::info!("Seeded {inserted} users from {}", path.display()),
        Err(e) => {
            log::error!("Error seeding users: {e}");
            std::process::exit(1);
        }
    }
}

//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Settings required to start the HTTP server and the seeding tool.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
}

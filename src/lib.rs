#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};

#[cfg(feature = "server")]
use crate::db::establish_connection_pool;
#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::DieselRepository;

pub mod db;
pub mod domain;
pub mod error_conversions;
pub mod models;
pub mod repository;
pub mod schema;

#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

/// Loads settings from `config/default.yaml`, the optional
/// `config/{APP_ENV}.yaml` profile and `APP_*` environment variables.
#[cfg(feature = "server")]
pub fn load_server_config() -> Result<ServerConfig, config::ConfigError> {
    let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    config::Config::builder()
        .add_source(config::File::with_name("config/default"))
        .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
        .add_source(config::Environment::with_prefix("APP"))
        .build()?
        .try_deserialize::<ServerConfig>()
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    let repo = web::Data::new(DieselRepository::new(pool));

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!(
        "Starting user directory on {}:{}",
        bind_address.0,
        bind_address.1
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .app_data(repo.clone())
            .configure(routes::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}

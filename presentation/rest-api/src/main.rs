use dotenvy::dotenv;

mod api {
    pub mod error;
    pub mod media;
    pub mod repository_error;
    pub mod security;
    pub mod tags;
    pub mod health {
        pub mod routes;
    }
    pub mod index {
        pub mod routes;
    }
    pub mod item {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod wishlist {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
}
mod config {
    pub mod api_key_config;
    pub mod app_config;
    pub mod cors_config;
    pub mod database_config;
    pub mod env;
    pub mod server_config;
}
mod setup {
    pub mod dependency_injection;
    pub mod server;
}
#[cfg(test)]
mod test_support;

use config::{app_config::AppConfig, database_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// Wishlists REST API entry point
///
/// Initializes the application, wires dependencies, and starts the HTTP server.
///
/// - config/: environment configuration (server, CORS, database, API key, feature flags)
/// - setup/: dependency injection and server setup
/// - api/: route handlers, DTOs and error mapping
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Initialize database and apply migrations
    let pool = database_config::init_database(&config.database).await?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(
        pool,
        config.database.retry.clone(),
        config.api_key.clone(),
        config.features,
    );

    // 6. Run server
    Server::run(config, container).await?;

    Ok(())
}

use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use workout_tracker::api::routes::create_routes;
use workout_tracker::auth::JwtService;
use workout_tracker::config::{run_migrations, AppConfig, DatabaseConfig, StorageBackend};
use workout_tracker::repositories::Repositories;
use workout_tracker::services::Services;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if config.is_production() && config.jwt_secret == "your-secret-key-change-in-production" {
        warn!("JWT_SECRET is not set, tokens are signed with the default secret");
    }

    let repositories = match config.storage_backend {
        StorageBackend::Memory => {
            info!("Using in-memory storage");
            Repositories::in_memory()
        }
        StorageBackend::Postgres => {
            let db_config = DatabaseConfig::from_env()?;
            let pool = db_config.create_pool().await?;
            run_migrations(&pool).await?;
            info!("Connected to PostgreSQL and applied migrations");
            Repositories::postgres(pool)
        }
    };

    let services = Services::new(repositories);
    let app = create_routes(services, JwtService::new(&config.jwt_secret));

    let address = config.server_address();
    let listener = TcpListener::bind(&address).await?;
    info!("Workout tracker starting on http://{} ({})", address, config.environment);
    info!("Health check available at http://{}/health", address);

    axum::serve(listener, app).await?;

    Ok(())
}

use roster_api::api::{self, AppState};
use roster_api::config::{Config, StorageBackend};
use roster_api::infrastructure::database;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    let config = Config::from_env().expect("Invalid configuration");

    let state = match config.storage {
        StorageBackend::Postgres => {
            let pool = database::connect(&config.database)
                .await
                .expect("Failed to connect to database");
            database::migrate(&pool)
                .await
                .expect("Failed to apply migrations");
            AppState::postgres(pool, &config.auditor)
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; data is lost on shutdown");
            AppState::in_memory(&config.auditor)
        }
    };

    let app = api::router(state);

    // Start server
    tracing::info!("Server listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .await
        .expect("Server failed");
}

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;
use crate::domain::repositories::RepositoryResult;

/// Opens the PostgreSQL connection pool
pub async fn connect(config: &DatabaseConfig) -> RepositoryResult<PgPool> {
    tracing::info!(
        max_connections = config.max_connections,
        "Connecting to database..."
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await?;

    tracing::info!("Database connected successfully");
    Ok(pool)
}

/// Applies the schema under `migrations/`
pub async fn migrate(pool: &PgPool) -> RepositoryResult<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("Database migrations applied");
    Ok(())
}

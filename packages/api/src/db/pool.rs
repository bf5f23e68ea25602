//! Database connection pool using the OnceCell pattern.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::sync::OnceCell;

use crate::settings::Settings;
use crate::error::ApiError;

static POOL: OnceCell<PgPool> = OnceCell::const_new();

/// Get or initialize the database connection pool.
pub async fn get_pool() -> Result<&'static PgPool, ApiError> {
    POOL.get_or_try_init(|| async {
        let settings = Settings::new()?;

        let pool = PgPoolOptions::new()
            .max_connections(settings.database.connections)
            .connect(&settings.database.url)
            .await?;
        Ok::<_, ApiError>(pool)
    })
    .await
}

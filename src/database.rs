use sqlx::{postgres::PgPoolOptions, PgPool};
use std::sync::OnceLock;

static DB: OnceLock<PgPool> = OnceLock::new();

#[tracing::instrument]
async fn create_pool() -> Result<PgPool, sqlx::Error> {
    let database_url = crate::config::Config::global().database_url.clone();

    let pool = PgPoolOptions::new()
        .max_connections(4)
        .acquire_timeout(std::time::Duration::from_secs(30))
        .connect(&database_url)
        .await?;

    sqlx::migrate!().run(&pool).await?;

    Ok(pool)
}

#[tracing::instrument]
pub async fn init_db() -> Result<(), sqlx::Error> {
    let pool = create_pool().await?;
    DB.set(pool).map_err(|_| {
        sqlx::Error::Configuration("Failed to initialize database pool - already initialized".into())
    })
}

#[tracing::instrument]
pub fn get_db() -> &'static PgPool {
    DB.get()
        .expect("Database not initialized. Call init_db() first")
}

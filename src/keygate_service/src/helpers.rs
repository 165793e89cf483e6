use std::time::Duration;

use sqlx::{PgPool, postgres::PgPoolOptions};

pub async fn get_postgres_pool(url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(5))
        .connect(url)
        .await
}

/// Create the connection pool and bring the schema up to date.
pub async fn configure_postgresql(url: &str) -> Result<PgPool, sqlx::Error> {
    let pg_pool = get_postgres_pool(url).await?;

    sqlx::migrate!("./migrations").run(&pg_pool).await?;

    Ok(pg_pool)
}

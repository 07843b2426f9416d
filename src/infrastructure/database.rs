use sqlx::{PgPool, postgres::PgPoolOptions};

/// Connect to the hosted Postgres instance. The schema is managed outside
/// this service, so no migrations run here.
pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    sqlx::query("SELECT 1").execute(&pool).await?;

    Ok(pool)
}

//! PostgreSQL schema migrations for climateqa storage.

use sqlx::PgPool;

/// Run all PostgreSQL migrations. Idempotent.
pub async fn run_pg_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS climate_records (
            id TEXT PRIMARY KEY,
            region TEXT,
            year INTEGER NOT NULL,
            monthly_anomalies JSONB NOT NULL DEFAULT '[]',
            annual_avg DOUBLE PRECISION NOT NULL,
            summary TEXT NOT NULL,
            vector JSONB NOT NULL DEFAULT '[]'
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_climate_year_region
         ON climate_records (year, region)",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS query_log (
            id TEXT PRIMARY KEY,
            query TEXT NOT NULL,
            region TEXT,
            year INTEGER,
            matched_summary TEXT,
            response TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_query_log_created ON query_log (created_at DESC)")
        .execute(pool)
        .await?;

    tracing::info!("PostgreSQL migrations completed");
    Ok(())
}

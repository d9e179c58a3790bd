//! PostgreSQL storage backend using sqlx.
//!
//! Split into modular files by collection.

mod climate;
mod query_log;

use chrono::{DateTime, Utc};
use climateqa_core::{
    ClimateRecord, QueryLogEntry, Region, PG_POOL_ACQUIRE_TIMEOUT_SECS, PG_POOL_IDLE_TIMEOUT_SECS,
    PG_POOL_MAX_CONNECTIONS,
};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};

use crate::error::StorageError;
use crate::pg_migrations::run_pg_migrations;

#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(PG_POOL_MAX_CONNECTIONS)
            .acquire_timeout(std::time::Duration::from_secs(PG_POOL_ACQUIRE_TIMEOUT_SECS))
            .idle_timeout(std::time::Duration::from_secs(PG_POOL_IDLE_TIMEOUT_SECS))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        run_pg_migrations(&pool).await.map_err(|e| StorageError::Migration(e.to_string()))?;
        tracing::info!("PgStorage initialized");
        Ok(Self { pool })
    }

    pub(crate) fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Parse `Region` from an optional PostgreSQL text column.
/// A corrupt value is logged and treated as absent rather than failing the row.
pub(crate) fn parse_pg_region(s: Option<&str>) -> Option<Region> {
    let s = s?;
    match s.parse::<Region>() {
        Ok(region) => Some(region),
        Err(_) => {
            tracing::warn!(invalid_region = %s, "corrupt region in DB, treating as absent");
            None
        },
    }
}

pub(crate) fn row_to_climate_record(
    row: &sqlx::postgres::PgRow,
) -> Result<ClimateRecord, StorageError> {
    let region = parse_pg_region(row.try_get::<Option<String>, _>("region")?.as_deref());
    let monthly_anomalies: serde_json::Value = row.try_get("monthly_anomalies")?;
    let vector: serde_json::Value = row.try_get("vector")?;
    Ok(ClimateRecord {
        region,
        year: row.try_get("year")?,
        monthly_anomalies: serde_json::from_value(monthly_anomalies)?,
        annual_avg: row.try_get("annual_avg")?,
        summary: row.try_get("summary")?,
        vector: serde_json::from_value(vector)?,
    })
}

pub(crate) fn row_to_log_entry(
    row: &sqlx::postgres::PgRow,
) -> Result<QueryLogEntry, StorageError> {
    let region = parse_pg_region(row.try_get::<Option<String>, _>("region")?.as_deref());
    let created_at: DateTime<Utc> = row.try_get("created_at")?;
    Ok(QueryLogEntry {
        query: row.try_get("query")?,
        region,
        year: row.try_get("year")?,
        matched_summary: row.try_get("matched_summary")?,
        response: row.try_get("response")?,
        timestamp: created_at,
    })
}

pub(crate) const CLIMATE_COLUMNS: &str =
    "region, year, monthly_anomalies, annual_avg, summary, vector";

pub(crate) const QUERY_LOG_COLUMNS: &str =
    "query, region, year, matched_summary, response, created_at";

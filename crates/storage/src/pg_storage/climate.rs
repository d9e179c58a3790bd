//! ClimateStore implementation for PgStorage.

use super::*;

use async_trait::async_trait;
use uuid::Uuid;

use crate::traits::ClimateStore;

#[async_trait]
impl ClimateStore for PgStorage {
    async fn clear(&self) -> Result<(), StorageError> {
        let result = sqlx::query("DELETE FROM climate_records").execute(self.pool()).await?;
        tracing::debug!(removed = result.rows_affected(), "cleared climate records");
        Ok(())
    }

    async fn insert_record(&self, record: &ClimateRecord) -> Result<(), StorageError> {
        sqlx::query(
            r#"INSERT INTO climate_records
               (id, region, year, monthly_anomalies, annual_avg, summary, vector)
               VALUES ($1, $2, $3, $4, $5, $6, $7)"#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(record.region.map(|r| r.as_str()))
        .bind(record.year)
        .bind(serde_json::to_value(&record.monthly_anomalies)?)
        .bind(record.annual_avg)
        .bind(&record.summary)
        .bind(serde_json::to_value(&record.vector)?)
        .execute(self.pool())
        .await?;
        Ok(())
    }

    async fn find_summary(
        &self,
        region: Region,
        year: i32,
    ) -> Result<Option<String>, StorageError> {
        let row = sqlx::query(
            "SELECT summary FROM climate_records WHERE region = $1 AND year = $2",
        )
        .bind(region.as_str())
        .bind(year)
        .fetch_optional(self.pool())
        .await?;
        row.map(|r| r.try_get("summary").map_err(StorageError::from)).transpose()
    }

    async fn list_records(&self) -> Result<Vec<ClimateRecord>, StorageError> {
        let rows =
            sqlx::query(&format!("SELECT {CLIMATE_COLUMNS} FROM climate_records ORDER BY year"))
                .fetch_all(self.pool())
                .await?;
        rows.iter().map(row_to_climate_record).collect()
    }
}

//! QueryLogStore implementation for PgStorage.

use super::*;

use async_trait::async_trait;
use uuid::Uuid;

use crate::traits::QueryLogStore;

#[async_trait]
impl QueryLogStore for PgStorage {
    async fn append(&self, entry: &QueryLogEntry) -> Result<(), StorageError> {
        sqlx::query(
            r#"INSERT INTO query_log
               (id, query, region, year, matched_summary, response, created_at)
               VALUES ($1, $2, $3, $4, $5, $6, $7)"#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(&entry.query)
        .bind(entry.region.map(|r| r.as_str()))
        .bind(entry.year)
        .bind(&entry.matched_summary)
        .bind(&entry.response)
        .bind(entry.timestamp)
        .execute(self.pool())
        .await?;
        Ok(())
    }

    async fn list_entries(&self) -> Result<Vec<QueryLogEntry>, StorageError> {
        let rows = sqlx::query(&format!("SELECT {QUERY_LOG_COLUMNS} FROM query_log"))
            .fetch_all(self.pool())
            .await?;
        rows.iter().map(row_to_log_entry).collect()
    }
}

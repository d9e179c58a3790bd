//! Store traits.
//!
//! Keeping the query service behind these seams allows in-memory fakes in
//! tests instead of a live PostgreSQL instance.

use async_trait::async_trait;

use climateqa_core::{ClimateRecord, QueryLogEntry, Region};

use crate::error::StorageError;

/// Read/write access to the climate record collection.
///
/// `clear` and `insert_record` exist for the loader; the query service only
/// reads.
#[async_trait]
pub trait ClimateStore: Send + Sync {
    /// Remove every record. The loader calls this before a full reload.
    async fn clear(&self) -> Result<(), StorageError>;

    /// Insert one record.
    async fn insert_record(&self, record: &ClimateRecord) -> Result<(), StorageError>;

    /// Exact lookup of a stored summary by region and year.
    async fn find_summary(
        &self,
        region: Region,
        year: i32,
    ) -> Result<Option<String>, StorageError>;

    /// All records, internal ids excluded.
    async fn list_records(&self) -> Result<Vec<ClimateRecord>, StorageError>;
}

/// Append-only query log.
#[async_trait]
pub trait QueryLogStore: Send + Sync {
    /// Append one entry. Entries are never mutated or deleted.
    async fn append(&self, entry: &QueryLogEntry) -> Result<(), StorageError>;

    /// All entries, internal ids excluded. Order is not guaranteed.
    async fn list_entries(&self) -> Result<Vec<QueryLogEntry>, StorageError>;
}

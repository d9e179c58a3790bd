//! Storage layer for climateqa
//!
//! PostgreSQL-backed document storage for climate records and the query log.
//! The climate store is populated once by the loader and read-only afterwards;
//! the query log is append-only.

mod error;
mod pg_migrations;
mod pg_storage;
pub mod traits;

pub use error::StorageError;
pub use pg_storage::PgStorage;
pub use traits::{ClimateStore, QueryLogStore};

//! Shared constants for climateqa.
//!
//! Centralizes values that would otherwise be duplicated across crates.

/// Embedding vector dimension (all-MiniLM-L6-v2: 384d).
pub const EMBEDDING_DIMENSION: usize = 384;

/// Default HTTP listening port.
pub const DEFAULT_PORT: u16 = 5000;

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 10;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// Timeout for a single chat-completion request in seconds.
pub const LLM_REQUEST_TIMEOUT_SECS: u64 = 60;

//! Typed error enum for the service layer.
//!
//! Unifies storage, LLM, and embedding failures into a single error type,
//! enabling callers to match on specific failure modes instead of downcasting
//! opaque boxes.

use climateqa_embeddings::EmbeddingError;
use climateqa_llm::LlmError;
use climateqa_storage::StorageError;
use thiserror::Error;

/// Service-layer error unifying storage, LLM, and embedding failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (DB, not found, duplicate, etc.).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// LLM API call failed (after the fallback model was also tried).
    #[error("llm: {0}")]
    Llm(#[from] LlmError),

    /// Embedding generation failed.
    #[error("embedding: {0}")]
    Embedding(#[from] EmbeddingError),

    /// Loader could not read the source file.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

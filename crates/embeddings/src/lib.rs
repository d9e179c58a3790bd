//! Embedding generation for climate summaries.
//!
//! Wraps fastembed's all-MiniLM-L6-v2 (384 dimensions). The model is not
//! thread-safe and sits behind a mutex.

pub mod error;

use std::sync::Mutex;

use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};

use climateqa_core::EMBEDDING_DIMENSION;
pub use error::EmbeddingError;

/// Generates a fixed-dimension embedding for a piece of text.
pub trait Embedder: Send + Sync {
    /// Embed a single text into a vector of [`EMBEDDING_DIMENSION`] floats.
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;
}

/// fastembed-backed [`Embedder`].
pub struct EmbeddingService {
    model: Mutex<TextEmbedding>,
}

impl EmbeddingService {
    /// Loads the embedding model. Downloads weights on first use.
    ///
    /// # Errors
    /// Returns an error if the model cannot be initialized.
    pub fn new() -> Result<Self, EmbeddingError> {
        let model = TextEmbedding::try_new(InitOptions::new(EmbeddingModel::AllMiniLML6V2))
            .map_err(|e| EmbeddingError::ModelInit(e.to_string()))?;
        tracing::info!("embedding model initialized ({EMBEDDING_DIMENSION} dimensions)");
        Ok(Self { model: Mutex::new(model) })
    }
}

impl Embedder for EmbeddingService {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let mut model = self.model.lock().map_err(|_| EmbeddingError::LockPoisoned)?;
        let mut vectors = model
            .embed(vec![text.to_owned()], None)
            .map_err(|e| EmbeddingError::Generation(e.to_string()))?;
        if vectors.is_empty() {
            return Err(EmbeddingError::EmptyResult);
        }
        Ok(vectors.remove(0))
    }
}

//! Prompt construction and primary/fallback answer generation.

use crate::ai_types::{ChatRequest, Message, ResponseFormat};
use crate::client::LlmClient;
use crate::error::LlmError;

/// Model asked first for every query.
pub const DEFAULT_PRIMARY_MODEL: &str = "gemma-3-12b-it";
/// Model asked with the identical prompt when the primary fails.
pub const DEFAULT_FALLBACK_MODEL: &str = "gemini-pro";

/// Build the prompt sent to the model.
///
/// Exactly one of two templates: enriched (stored summary verbatim, then the
/// query) when a climate record matched, plain otherwise.
#[must_use]
pub fn build_prompt(query: &str, summary: Option<&str>) -> String {
    match summary {
        Some(s) => {
            format!("Based on the following climate data:\n{s}\n\nNow answer this query clearly: {query}\n")
        },
        None => format!("Answer this climate question briefly and clearly: {query}"),
    }
}

/// Generates answers, falling back to a secondary model on primary failure.
#[derive(Debug)]
pub struct AnswerGenerator {
    client: LlmClient,
    primary_model: String,
    fallback_model: String,
}

impl AnswerGenerator {
    #[must_use]
    pub fn new(client: LlmClient, primary_model: String, fallback_model: String) -> Self {
        Self { client, primary_model, fallback_model }
    }

    /// Generate an answer for `query`, optionally enriched with a stored summary.
    ///
    /// The primary model is invoked once. On any failure the fallback model is
    /// invoked with the identical prompt; there is no further retry.
    ///
    /// # Errors
    /// Returns the fallback model's error when both invocations fail.
    pub async fn generate(&self, query: &str, summary: Option<&str>) -> Result<String, LlmError> {
        let prompt = build_prompt(query, summary);
        match self.complete(&self.primary_model, &prompt).await {
            Ok(answer) => Ok(answer),
            Err(e) => {
                tracing::warn!(
                    primary = %self.primary_model,
                    fallback = %self.fallback_model,
                    error = %e,
                    "primary model failed, falling back"
                );
                self.complete(&self.fallback_model, &prompt).await
            },
        }
    }

    async fn complete(&self, model: &str, prompt: &str) -> Result<String, LlmError> {
        let request = ChatRequest {
            model: model.to_owned(),
            messages: vec![Message { role: "user".to_owned(), content: prompt.to_owned() }],
            response_format: ResponseFormat { format_type: "text".to_owned() },
        };
        let content = self.client.chat_completion(&request).await?;
        Ok(content.trim().to_owned())
    }
}

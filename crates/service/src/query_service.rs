use std::sync::Arc;

use chrono::Utc;

use climateqa_core::{extract_context, ClimateRecord, QueryLogEntry};
use climateqa_llm::AnswerGenerator;
use climateqa_storage::{ClimateStore, QueryLogStore};

use crate::error::ServiceError;

/// Orchestrates a query from raw text to logged answer.
///
/// Per request: extract signals → look up a stored summary (only when both
/// region and year were extracted) → generate the answer → append a log
/// entry. Requests are independent; no state is kept between them. The log
/// is written only after a successful generation, so every entry corresponds
/// to a real model answer.
pub struct QueryService {
    climate: Arc<dyn ClimateStore>,
    query_log: Arc<dyn QueryLogStore>,
    generator: Arc<AnswerGenerator>,
}

impl QueryService {
    #[must_use]
    pub fn new(
        climate: Arc<dyn ClimateStore>,
        query_log: Arc<dyn QueryLogStore>,
        generator: Arc<AnswerGenerator>,
    ) -> Self {
        Self { climate, query_log, generator }
    }

    /// Answer a climate question, enriching the prompt when the store has a
    /// matching summary.
    ///
    /// # Errors
    /// Propagates store failures and generation failures (after the fallback
    /// model was also tried). A generation failure leaves no log entry.
    pub async fn ask(&self, query: &str) -> Result<String, ServiceError> {
        tracing::info!(%query, "received query");

        let ctx = extract_context(query);
        tracing::debug!(region = ?ctx.region, year = ?ctx.year, "extracted context");

        let matched_summary = match (ctx.region, ctx.year) {
            (Some(region), Some(year)) => self.climate.find_summary(region, year).await?,
            _ => None,
        };

        let answer = self.generator.generate(query, matched_summary.as_deref()).await?;

        let entry = QueryLogEntry {
            query: query.to_owned(),
            region: ctx.region,
            year: ctx.year,
            matched_summary,
            response: answer.clone(),
            timestamp: Utc::now(),
        };
        self.query_log.append(&entry).await?;

        Ok(answer)
    }

    /// All logged queries, unpaginated.
    pub async fn history(&self) -> Result<Vec<QueryLogEntry>, ServiceError> {
        Ok(self.query_log.list_entries().await?)
    }

    /// All climate records, unpaginated.
    pub async fn climate_data(&self) -> Result<Vec<ClimateRecord>, ServiceError> {
        Ok(self.climate.list_records().await?)
    }
}

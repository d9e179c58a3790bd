use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::region::Region;

/// One year of temperature-anomaly data with its generated summary.
///
/// Produced by the data loader and treated as read-only at request time.
/// `region` is absent for the global GISTEMP dataset; the stored row id is
/// internal and never serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClimateRecord {
    /// Region this record covers, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,
    /// Calendar year, unique within the store.
    pub year: i32,
    /// Twelve monthly anomaly values; `None` where the source marked data missing.
    pub monthly_anomalies: Vec<Option<f64>>,
    /// Mean of the present monthly values only.
    pub annual_avg: f64,
    /// Human-readable summary used for prompt enrichment.
    pub summary: String,
    /// Embedding of `summary`. Written by the loader, currently not queried.
    pub vector: Vec<f32>,
}

/// One logged `/ask` interaction. Append-only; never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryLogEntry {
    /// Raw query text as received.
    pub query: String,
    /// Region extracted from the query, if any.
    pub region: Option<Region>,
    /// Year extracted from the query, if any.
    pub year: Option<i32>,
    /// Summary that enriched the prompt; present iff a climate record matched.
    pub matched_summary: Option<String>,
    /// Answer returned to the caller.
    pub response: String,
    /// When the entry was appended.
    pub timestamp: DateTime<Utc>,
}

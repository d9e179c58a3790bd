//! GISTEMP data loader.
//!
//! Parses the `GLB.Ts+dSST.csv` export, computes one annual summary per year,
//! embeds it, and replaces the climate store contents. Malformed rows are
//! skipped, never partially written.

use std::path::Path;
use std::sync::Arc;

use climateqa_core::ClimateRecord;
use climateqa_embeddings::Embedder;
use climateqa_storage::ClimateStore;

use crate::error::ServiceError;

/// Header/metadata rows before the first data row in the GISTEMP export.
const HEADER_ROWS: usize = 7;
/// Marker used by GISTEMP for months with no measurement.
const MISSING_SENTINEL: &str = "***";
/// Year column plus 12 monthly columns.
const MIN_COLUMNS: usize = 13;

/// One validated CSV row.
#[derive(Debug, PartialEq)]
pub(crate) struct ParsedRow {
    pub(crate) year: i32,
    pub(crate) monthly_anomalies: Vec<Option<f64>>,
    pub(crate) annual_avg: f64,
}

/// Parse a single data row, or `None` when the row must be skipped:
/// too few columns, a non-numeric year, an unparseable monthly value, or no
/// present monthly values at all (the mean would divide by zero).
pub(crate) fn parse_data_row(line: &str) -> Option<ParsedRow> {
    let cols: Vec<&str> = line.split(',').collect();
    if cols.len() < MIN_COLUMNS {
        return None;
    }

    let year_col = cols[0].trim();
    if year_col.is_empty() || !year_col.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year: i32 = year_col.parse().ok()?;

    let mut monthly_anomalies = Vec::with_capacity(12);
    for col in &cols[1..=12] {
        let value = col.trim();
        if value == MISSING_SENTINEL {
            monthly_anomalies.push(None);
        } else {
            monthly_anomalies.push(Some(value.parse::<f64>().ok()?));
        }
    }

    let present: Vec<f64> = monthly_anomalies.iter().flatten().copied().collect();
    if present.is_empty() {
        return None;
    }
    let annual_avg = present.iter().sum::<f64>() / present.len() as f64;

    Some(ParsedRow { year, monthly_anomalies, annual_avg })
}

/// Render the stored summary for one year.
pub(crate) fn summarize(year: i32, annual_avg: f64) -> String {
    format!(
        "In {year}, the global temperature anomaly was approximately {annual_avg:.2}°C \
         relative to 1951–1980 average."
    )
}

/// Offline batch loader for the climate store.
///
/// Not safe to run concurrently with itself: the clear-then-insert sequence
/// is not transactional, and a concurrent reader could observe a partially
/// loaded store. Run to completion before serving queries.
pub struct Loader {
    climate: Arc<dyn ClimateStore>,
    embedder: Arc<dyn Embedder>,
}

impl Loader {
    #[must_use]
    pub fn new(climate: Arc<dyn ClimateStore>, embedder: Arc<dyn Embedder>) -> Self {
        Self { climate, embedder }
    }

    /// Load the CSV at `path`, replacing all existing climate records.
    ///
    /// Returns the number of records written.
    ///
    /// # Errors
    /// Fails on unreadable input, embedding failure, or store write failure.
    /// Row-level problems are skipped instead.
    pub async fn load(&self, path: &Path) -> Result<usize, ServiceError> {
        let contents = tokio::fs::read_to_string(path).await?;
        self.load_rows(&contents).await
    }

    pub(crate) async fn load_rows(&self, contents: &str) -> Result<usize, ServiceError> {
        self.climate.clear().await?;

        let mut loaded = 0usize;
        for line in contents.lines().skip(HEADER_ROWS) {
            let Some(row) = parse_data_row(line) else {
                tracing::debug!(line, "skipping row");
                continue;
            };

            let summary = summarize(row.year, row.annual_avg);
            let vector = self.embedder.embed(&summary)?;
            let record = ClimateRecord {
                region: None,
                year: row.year,
                monthly_anomalies: row.monthly_anomalies,
                annual_avg: row.annual_avg,
                summary,
                vector,
            };
            self.climate.insert_record(&record).await?;
            loaded += 1;
        }

        tracing::info!(records = loaded, "GISTEMP data loaded");
        Ok(loaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_complete_row() {
        let row = parse_data_row("2019,.93,.96,1.18,1.02,.86,.92,.95,.95,.93,1.02,.99,1.09").unwrap();
        assert_eq!(row.year, 2019);
        assert_eq!(row.monthly_anomalies.len(), 12);
        assert_eq!(row.monthly_anomalies[0], Some(0.93));
        assert!((row.annual_avg - 0.9833).abs() < 1e-3);
    }

    #[test]
    fn test_skips_row_with_too_few_columns() {
        assert_eq!(parse_data_row("2019,.93,.96"), None);
    }

    #[test]
    fn test_skips_column_header_row() {
        assert_eq!(
            parse_data_row("Year,Jan,Feb,Mar,Apr,May,Jun,Jul,Aug,Sep,Oct,Nov,Dec"),
            None
        );
    }

    #[test]
    fn test_sentinel_months_are_absent() {
        let row = parse_data_row("2025,.88,.91,***,.79,.85,.90,.87,.89,***,***,***,***").unwrap();
        assert_eq!(row.monthly_anomalies[2], None);
        assert_eq!(row.monthly_anomalies[11], None);
        // Mean over the 7 present values only.
        let expected = (0.88 + 0.91 + 0.79 + 0.85 + 0.90 + 0.87 + 0.89) / 7.0;
        assert!((row.annual_avg - expected).abs() < 1e-9);
    }

    #[test]
    fn test_all_sentinel_row_is_skipped() {
        assert_eq!(
            parse_data_row("1879,***,***,***,***,***,***,***,***,***,***,***,***"),
            None
        );
    }

    #[test]
    fn test_unparseable_value_skips_whole_row() {
        assert_eq!(
            parse_data_row("2019,.93,abc,1.18,1.02,.86,.92,.95,.95,.93,1.02,.99,1.09"),
            None
        );
    }

    #[test]
    fn test_extra_trailing_columns_are_ignored() {
        // The real export carries J-D, D-N and seasonal means after December.
        let row = parse_data_row(
            "1998,.60,.89,.62,.63,.70,.77,.69,.67,.44,.44,.48,.58,.63,.63,.66,.65,.71,.53",
        )
        .unwrap();
        assert_eq!(row.monthly_anomalies.len(), 12);
        assert_eq!(row.monthly_anomalies[11], Some(0.58));
    }

    #[test]
    fn test_summary_rounds_to_two_decimals() {
        assert_eq!(
            summarize(2019, 0.9833333),
            "In 2019, the global temperature anomaly was approximately 0.98°C \
             relative to 1951–1980 average."
        );
        assert_eq!(
            summarize(1904, -0.456),
            "In 1904, the global temperature anomaly was approximately -0.46°C \
             relative to 1951–1980 average."
        );
    }
}

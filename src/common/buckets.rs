//! Bucket table rows and ASCII table formatting
//!
//! This module turns an [`IntervalHistogram`] into display rows and renders
//! them as an ASCII table using the [`tabled`] crate. The static report shows
//! populated buckets only; the dashboard shows the full range.

use crate::analysis::intervals::IntervalHistogram;
use crate::common::format::{format_thousands_f64, format_thousands_u64};
use tabled::{Table, Tabled};

/// One row of the interval breakdown table, fully formatted for display
#[derive(Debug, Clone, Tabled)]
pub struct BucketRow {
    /// Bucket range, e.g. "50,000 - 100,000"
    #[tabled(rename = "Range")]
    pub range: String,
    /// Number of values in the bucket
    #[tabled(rename = "Frequency")]
    pub frequency: String,
    /// Sum of the values in the bucket
    #[tabled(rename = "Amount Sum")]
    pub amount_sum: String,
    /// Share of the sample size
    #[tabled(rename = "Frequency %")]
    pub frequency_pct: String,
    /// Share of the sample total; "n/a" when that total is zero
    #[tabled(rename = "Amount %")]
    pub amount_pct: String,
}

/// Builds display rows from a histogram.
///
/// # Arguments
/// * `histogram` - The computed interval histogram
/// * `include_empty` - Whether buckets with no values get a row
pub fn bucket_rows(histogram: &IntervalHistogram, include_empty: bool) -> Vec<BucketRow> {
    histogram
        .buckets
        .iter()
        .filter(|bucket| include_empty || bucket.count > 0)
        .map(|bucket| BucketRow {
            range: bucket.label(),
            frequency: format_thousands_u64(bucket.count as u64),
            amount_sum: format_thousands_f64(bucket.sum, 2),
            frequency_pct: format!("{:.1}%", bucket.count_pct),
            amount_pct: match bucket.sum_pct {
                Some(pct) => format!("{:.1}%", pct),
                None => "n/a".to_string(),
            },
        })
        .collect()
}

/// Formats bucket rows as an ASCII table.
///
/// # Arguments
/// * `rows` - Rows from [`bucket_rows`]
/// * `title` - Optional title placed above the table
///
/// # Returns
/// A formatted ASCII table as a [`String`]
pub fn format_interval_table(rows: &[BucketRow], title: Option<&str>) -> String {
    if rows.is_empty() {
        return "No data available for bucketing".to_string();
    }

    let table = Table::new(rows).to_string();

    if let Some(title) = title {
        format!("{}\n{}\n{}", title, "=".repeat(title.len()), table)
    } else {
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::data_structures::Sample;

    fn histogram() -> IntervalHistogram {
        let sample = Sample::new(vec![10.0, 60.0, 120.0, 130.0, 500.0]).unwrap();
        IntervalHistogram::compute(&sample, 50.0).unwrap()
    }

    #[test]
    fn test_bucket_rows_skip_empty_when_asked() {
        let histogram = histogram();

        let all = bucket_rows(&histogram, true);
        assert_eq!(all.len(), 11);

        let populated = bucket_rows(&histogram, false);
        assert_eq!(populated.len(), 4);
        assert_eq!(populated[0].range, "0 - 50");
        assert_eq!(populated[0].frequency, "1");
    }

    #[test]
    fn test_row_formatting() {
        let rows = bucket_rows(&histogram(), false);

        // [100, 150): two values summing to 250, 40% of count.
        let row = &rows[2];
        assert_eq!(row.range, "100 - 150");
        assert_eq!(row.frequency, "2");
        assert_eq!(row.amount_sum, "250.00");
        assert_eq!(row.frequency_pct, "40.0%");
    }

    #[test]
    fn test_format_interval_table() {
        let rows = bucket_rows(&histogram(), false);
        let table = format_interval_table(&rows, Some("Breakdown"));

        assert!(table.contains("Breakdown"));
        assert!(table.contains("Range"));
        assert!(table.contains("Frequency"));
        assert!(table.contains("Amount Sum"));
        assert!(table.contains("0 - 50"));

        let table_no_title = format_interval_table(&rows, None);
        assert!(!table_no_title.contains("Breakdown"));
        assert!(table_no_title.contains("Range"));
    }

    #[test]
    fn test_empty_rows_message() {
        assert_eq!(
            format_interval_table(&[], None),
            "No data available for bucketing"
        );
    }
}

//! Descriptive statistics over the loaded column.

use crate::common::data_structures::Sample;
use crate::common::format::{format_thousands_f64, format_thousands_u64};

/// Descriptive statistics of a [`Sample`].
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStats {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    /// Most frequent value; the smallest one when several tie.
    pub mode: f64,
    /// Sample standard deviation (n - 1); 0.0 for a single-value sample.
    pub std_dev: f64,
    /// `std_dev / mean × 100`, [`None`] when the mean is zero
    pub coefficient_of_variation: Option<f64>,
    /// `max - min`
    pub range: f64,
}

impl SummaryStats {
    /// Computes all summary fields in one pass over a sorted copy.
    pub fn compute(sample: &Sample) -> Self {
        let count = sample.len();
        let min = sample.min();
        let max = sample.max();
        let mean = sample.sum() / count as f64;

        let mut sorted = sample.values().to_vec();
        // Values are finite by construction, so total ordering holds.
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(core::cmp::Ordering::Equal));

        let median = if count % 2 == 0 {
            (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
        } else {
            sorted[count / 2]
        };

        let variance = if count > 1 {
            sorted.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / (count - 1) as f64
        } else {
            0.0
        };
        let std_dev = variance.sqrt();

        let coefficient_of_variation = if mean == 0.0 {
            None
        } else {
            Some(std_dev / mean * 100.0)
        };

        Self {
            count,
            min,
            max,
            mean,
            median,
            mode: mode_of_sorted(&sorted),
            std_dev,
            coefficient_of_variation,
            range: max - min,
        }
    }
}

/// Longest run of equal values in a sorted slice; ties resolve to the run
/// that sorts first, i.e. the smallest mode.
fn mode_of_sorted(sorted: &[f64]) -> f64 {
    let mut best_value = sorted[0];
    let mut best_len = 0usize;
    let mut run_value = sorted[0];
    let mut run_len = 0usize;

    for &value in sorted {
        if value == run_value {
            run_len += 1;
        } else {
            run_value = value;
            run_len = 1;
        }

        if run_len > best_len {
            best_value = run_value;
            best_len = run_len;
        }
    }

    best_value
}

/// Renders the statistics block shown by both binaries.
pub fn format_summary(stats: &SummaryStats) -> String {
    let cov = match stats.coefficient_of_variation {
        Some(value) => format!("{}%", format_thousands_f64(value, 2)),
        None => "n/a".to_string(),
    };

    let mut output = String::new();
    output.push_str("Summary Statistics\n");
    output.push_str(&"=".repeat(18));
    output.push('\n');
    output.push_str(&format!(
        "{:<26}{}\n",
        "Values:",
        format_thousands_u64(stats.count as u64)
    ));
    output.push_str(&format!(
        "{:<26}{}\n",
        "Minimum:",
        format_thousands_f64(stats.min, 2)
    ));
    output.push_str(&format!(
        "{:<26}{}\n",
        "Maximum:",
        format_thousands_f64(stats.max, 2)
    ));
    output.push_str(&format!(
        "{:<26}{}\n",
        "Mean:",
        format_thousands_f64(stats.mean, 2)
    ));
    output.push_str(&format!(
        "{:<26}{}\n",
        "Median:",
        format_thousands_f64(stats.median, 2)
    ));
    output.push_str(&format!(
        "{:<26}{}\n",
        "Mode:",
        format_thousands_f64(stats.mode, 2)
    ));
    output.push_str(&format!(
        "{:<26}{}\n",
        "Std deviation:",
        format_thousands_f64(stats.std_dev, 2)
    ));
    output.push_str(&format!("{:<26}{}\n", "Coefficient of variation:", cov));
    output.push_str(&format!(
        "{:<26}{}",
        "Range:",
        format_thousands_f64(stats.range, 2)
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(values: &[f64]) -> Sample {
        Sample::new(values.to_vec()).unwrap()
    }

    #[test]
    fn test_summary_of_known_values() {
        let stats = SummaryStats::compute(&sample(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]));

        assert_eq!(stats.count, 8);
        assert_eq!(stats.min, 2.0);
        assert_eq!(stats.max, 9.0);
        assert_eq!(stats.mean, 5.0);
        assert_eq!(stats.median, 4.5);
        assert_eq!(stats.mode, 4.0);
        assert_eq!(stats.range, 7.0);
        // Sample variance: sum of squares 32 over n - 1 = 7.
        assert!((stats.std_dev - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
        let cov = stats.coefficient_of_variation.unwrap();
        assert!((cov - (32.0f64 / 7.0).sqrt() / 5.0 * 100.0).abs() < 1e-12);
    }

    #[test]
    fn test_median_of_odd_count() {
        let stats = SummaryStats::compute(&sample(&[9.0, 1.0, 5.0]));
        assert_eq!(stats.median, 5.0);
    }

    #[test]
    fn test_mode_tie_resolves_to_smallest() {
        let stats = SummaryStats::compute(&sample(&[7.0, 3.0, 7.0, 3.0, 10.0]));
        assert_eq!(stats.mode, 3.0);
    }

    #[test]
    fn test_single_value_has_zero_std_dev() {
        let stats = SummaryStats::compute(&sample(&[42.0]));
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.median, 42.0);
        assert_eq!(stats.mode, 42.0);
        assert_eq!(stats.coefficient_of_variation, Some(0.0));
    }

    #[test]
    fn test_identical_values_have_zero_variation() {
        let stats = SummaryStats::compute(&sample(&[250.0; 6]));
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.coefficient_of_variation, Some(0.0));
        assert_eq!(stats.range, 0.0);
    }

    #[test]
    fn test_zero_mean_flags_variation() {
        let stats = SummaryStats::compute(&sample(&[-10.0, 10.0]));
        assert_eq!(stats.mean, 0.0);
        assert_eq!(stats.coefficient_of_variation, None);
    }

    #[test]
    fn test_format_summary_contents() {
        let stats = SummaryStats::compute(&sample(&[1_000_000.0, 2_000_000.0]));
        let block = format_summary(&stats);

        assert!(block.starts_with("Summary Statistics\n=================="));
        assert!(block.contains("1,500,000.00"));
        assert!(block.contains("Coefficient of variation:"));

        let zero_mean = SummaryStats::compute(&sample(&[-10.0, 10.0]));
        assert!(format_summary(&zero_mean).contains("n/a"));
    }
}

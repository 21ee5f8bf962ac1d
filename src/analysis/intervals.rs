//! Interval binning with per-bucket aggregates
//!
//! This module holds the core computation shared by both binaries: bucket
//! boundary derivation, per-bucket count and sum, and the percentage fields
//! used by the table, chart and CSV renderers.

use crate::common::data_structures::Sample;
use crate::common::format::format_thousands_f64;
use thiserror::Error;

/// Errors that can occur during interval computation
#[derive(Error, Debug)]
pub enum IntervalError {
    #[error("Interval width must be a positive finite number, got {0}")]
    InvalidWidth(f64),
}

type Result<T> = core::result::Result<T, IntervalError>;

/// A single fixed-width interval with its aggregates.
///
/// Interior buckets are half-open `[lower, upper)`; the final bucket of a
/// histogram also includes its upper edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket {
    /// Inclusive lower edge
    pub lower: f64,
    /// Upper edge, one width above `lower`
    pub upper: f64,
    /// Number of sample values in this bucket
    pub count: usize,
    /// Sum of the sample values in this bucket
    pub sum: f64,
    /// `count` as a percentage of the sample size
    pub count_pct: f64,
    /// `sum` as a percentage of the sample total, [`None`] when that total is zero
    pub sum_pct: Option<f64>,
}

impl Bucket {
    /// Human-readable range label, e.g. "50,000 - 100,000"
    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            format_thousands_f64(self.lower, 0),
            format_thousands_f64(self.upper, 0)
        )
    }
}

/// Ordered sequence of buckets covering the whole sample, with the totals
/// used for percentage normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalHistogram {
    /// Width every bucket was built with
    pub width: f64,
    /// Buckets ascending by lower edge, gap-free and non-overlapping
    pub buckets: Vec<Bucket>,
    /// Number of values in the sample
    pub total_count: usize,
    /// Sum of all values in the sample
    pub total_sum: f64,
}

impl IntervalHistogram {
    /// Bins the sample into fixed-width intervals.
    ///
    /// Bucket edges are the arithmetic sequence from
    /// `floor(min/width) * width` to `(floor(max/width) + 1) * width`, so the
    /// edges are aligned to multiples of the width and the sample minimum and
    /// maximum are always covered. Recomputing with the same inputs yields an
    /// equal histogram.
    ///
    /// # Arguments
    /// * `sample` - The loaded column
    /// * `width` - Bucket width; any positive finite number
    ///
    /// # Returns
    /// * `Ok(IntervalHistogram)` - Buckets with all derived fields populated
    /// * `Err(IntervalError)` - If the width is not a positive finite number
    pub fn compute(sample: &Sample, width: f64) -> Result<Self> {
        if !width.is_finite() || width <= 0.0 {
            return Err(IntervalError::InvalidWidth(width));
        }

        // Edge alignment: k_min/k_max are the edge indices of the buckets
        // holding the sample minimum and maximum.
        let k_min = (sample.min() / width).floor();
        let k_max = (sample.max() / width).floor();
        let lower_bound = k_min * width;
        let bucket_count = (k_max - k_min) as usize + 1;

        let mut counts = vec![0usize; bucket_count];
        let mut sums = vec![0.0f64; bucket_count];
        for &value in sample.values() {
            let index = bucket_index(value, lower_bound, width, bucket_count);
            counts[index] += 1;
            sums[index] += value;
        }

        let total_count = sample.len();
        let total_sum = sample.sum();

        let buckets = (0..bucket_count)
            .map(|i| {
                let lower = lower_bound + i as f64 * width;
                let sum_pct = if total_sum == 0.0 {
                    None
                } else {
                    Some(sums[i] / total_sum * 100.0)
                };

                Bucket {
                    lower,
                    upper: lower + width,
                    count: counts[i],
                    sum: sums[i],
                    count_pct: counts[i] as f64 / total_count as f64 * 100.0,
                    sum_pct,
                }
            })
            .collect();

        Ok(Self {
            width,
            buckets,
            total_count,
            total_sum,
        })
    }
}

/// Maps a value onto its bucket.
///
/// The boundary contract: interior buckets take `lower <= v < upper`, the
/// final bucket also takes a value exactly on its upper edge. The index is
/// clamped on both sides so floating-point wobble at the outer edges cannot
/// land a value outside `[0, bucket_count)`.
fn bucket_index(value: f64, lower_bound: f64, width: f64, bucket_count: usize) -> usize {
    let raw = ((value - lower_bound) / width).floor();
    if raw <= 0.0 {
        return 0;
    }

    (raw as usize).min(bucket_count - 1)
}

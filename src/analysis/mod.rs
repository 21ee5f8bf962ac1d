//! Analysis logic for the loaded column
//!
//! This module contains the pure computation consumed by both binaries:
//! - Summary statistics over the whole sample
//! - Interval binning with per-bucket count, sum and percentages

pub mod constants;
pub mod intervals;
pub mod summary;

// Re-export analysis items for convenience
pub use intervals::{Bucket, IntervalError, IntervalHistogram};
pub use summary::{format_summary, SummaryStats};

//! Interval distribution analysis for a single numeric spreadsheet column.
//!
//! The library holds the shared computation consumed by the two binaries:
//! - [`loading`] reads the column from a spreadsheet into a [`Sample`]
//! - [`analysis`] computes summary statistics and the interval histogram
//! - [`common`] provides table, chart, export and number formatting helpers

pub mod analysis;
pub mod common;
pub mod loading;

// Re-export the items both binaries consume.
pub use analysis::intervals::{Bucket, IntervalError, IntervalHistogram};
pub use analysis::summary::{format_summary, SummaryStats};
pub use common::data_structures::Sample;
pub use common::plots::PlotError;
pub use loading::{load_column, LoadError};

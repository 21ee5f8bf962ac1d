//! Spreadsheet loading for the analyzed column
//!
//! This module handles opening the input workbook and extracting the named
//! numeric column from its first worksheet.

use crate::common::data_structures::Sample;
use calamine::{open_workbook_auto, Data, DataType, Range, Reader};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading the column
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read spreadsheet: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("Spreadsheet has no worksheets")]
    NoWorksheet,

    #[error("Column '{0}' not found in the header row")]
    MissingColumn(String),

    #[error("Column '{column}' has a non-numeric value at row {row}")]
    NonNumeric { column: String, row: usize },

    #[error("Column '{0}' contains no numeric values")]
    EmptyColumn(String),
}

type Result<T> = core::result::Result<T, LoadError>;

/// Loads the named column from the first worksheet of a spreadsheet.
///
/// This function:
/// - Opens the workbook, auto-detecting the format from the file
/// - Locates the column by exact header match in the first row
/// - Collects the numeric cells below it into a [`Sample`]
///
/// # Arguments
/// * `path` - Path to the spreadsheet file
/// * `column` - Header name of the column to load
///
/// # Returns
/// * `Ok(Sample)` - The loaded column, non-empty
/// * `Err(LoadError)` - If the file, worksheet or column is unavailable, or
///   the column holds anything other than numbers and blanks
pub fn load_column(path: &Path, column: &str) -> Result<Sample> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(LoadError::NoWorksheet)??;

    sample_from_range(&range, column)
}

/// Extracts the named column from a worksheet range.
///
/// The first row is the header. Blank cells below it are skipped; any other
/// non-numeric cell is an error naming the offending row.
fn sample_from_range(range: &Range<Data>, column: &str) -> Result<Sample> {
    let mut rows = range.rows();
    let header = rows
        .next()
        .ok_or_else(|| LoadError::MissingColumn(column.to_string()))?;
    let index = header
        .iter()
        .position(|cell| cell.get_string() == Some(column))
        .ok_or_else(|| LoadError::MissingColumn(column.to_string()))?;

    let mut values = Vec::new();
    for (offset, row) in rows.enumerate() {
        let cell = match row.get(index) {
            None => continue,
            Some(cell) if cell.is_empty() => continue,
            Some(cell) => cell,
        };

        // The header is row 1, so the first data row is row 2.
        let value = cell
            .as_f64()
            .filter(|v| v.is_finite())
            .ok_or_else(|| LoadError::NonNumeric {
                column: column.to_string(),
                row: offset + 2,
            })?;
        values.push(value);
    }

    Sample::new(values).ok_or_else(|| LoadError::EmptyColumn(column.to_string()))
}

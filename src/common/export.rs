//! CSV export of the interval breakdown
//!
//! Writes the dashboard's downloadable artifact: one row per bucket with the
//! fixed header `Rango,Frecuencia,Suma_Importes,Porcentaje_Frecuencia,
//! Porcentaje_Importes`. Range fields use plain digits so no field ever needs
//! CSV quoting.

use crate::analysis::intervals::IntervalHistogram;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during CSV export
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write CSV file: {0}")]
    FileWrite(#[from] std::io::Error),
}

/// Fixed header row of the exported breakdown.
const CSV_HEADER: &str = "Rango,Frecuencia,Suma_Importes,Porcentaje_Frecuencia,Porcentaje_Importes";

/// Writes the bucket table as `analisis_intervalo_{width}.csv`.
///
/// An undefined percentage-of-sum (sample total of zero) is written as `NaN`.
///
/// # Arguments
/// * `histogram` - The computed interval histogram
/// * `output_dir` - Directory where the CSV file should be saved
///
/// # Returns
/// * `Ok(PathBuf)` - Path of the written file
/// * `Err(ExportError)` - If the file could not be written
pub fn write_interval_csv(
    histogram: &IntervalHistogram,
    output_dir: &Path,
) -> Result<PathBuf, ExportError> {
    let mut output = String::from(CSV_HEADER);
    output.push('\n');

    for bucket in &histogram.buckets {
        let sum_pct = match bucket.sum_pct {
            Some(pct) => format!("{:.2}", pct),
            None => "NaN".to_string(),
        };
        output.push_str(&format!(
            "{:.0} - {:.0},{},{:.2},{:.2},{}\n",
            bucket.lower, bucket.upper, bucket.count, bucket.sum, bucket.count_pct, sum_pct
        ));
    }

    let output_path = output_dir.join(format!("analisis_intervalo_{:.0}.csv", histogram.width));
    fs::write(&output_path, output)?;

    Ok(output_path)
}

//! Bar chart rendering for the interval histogram
//!
//! Draws the frequency-per-bucket bar chart using the [`plotters`] crate and
//! saves it as a PNG file with fixed 1200x800 resolution. Uses the bitmap
//! backend's font rendering so charts also work in headless environments.

use crate::analysis::intervals::IntervalHistogram;
use crate::common::format::{format_thousands_f64, format_thousands_u64};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during plot generation
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

type Result<T> = core::result::Result<T, PlotError>;

/// Creates the frequency bar chart for a histogram and saves it as a PNG file.
///
/// One bar per bucket, labeled with its range on the x-axis; bars holding at
/// least one value get their count drawn above them. The file is named
/// `distribution_{width}.png` so charts for different widths live side by
/// side, and rendering the same histogram twice produces the same file.
///
/// # Arguments
/// * `histogram` - The computed interval histogram
/// * `output_dir` - Directory where the PNG file should be saved
///
/// # Returns
/// * `Ok(PathBuf)` - Path of the written PNG
/// * `Err(PlotError)` - If chart generation failed
///
/// # Chart Properties
/// * Resolution: 1200x800 pixels
/// * Format: PNG
/// * Y-axis: frequency, from zero with headroom for the bar labels
/// * X-axis: one segment per bucket, labeled with the bucket range
pub fn create_distribution_plot(
    histogram: &IntervalHistogram,
    output_dir: &Path,
) -> Result<PathBuf> {
    if histogram.buckets.is_empty() {
        return Err(PlotError::InvalidData(
            "Histogram has no buckets".to_string(),
        ));
    }

    let output_path = output_dir.join(format!("distribution_{:.0}.png", histogram.width));
    let bucket_count = histogram.buckets.len() as u32;
    let labels: Vec<String> = histogram.buckets.iter().map(|b| b.label()).collect();

    // Headroom above the tallest bar keeps its count label inside the plot.
    let max_count = histogram
        .buckets
        .iter()
        .map(|b| b.count as u32)
        .max()
        .unwrap_or(0);
    let y_max = max_count + (max_count / 10).max(1);

    let root = BitMapBackend::new(&output_path, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let title = format!(
        "Distribution by Intervals of {}",
        format_thousands_f64(histogram.width, 0)
    );

    let mut chart_context = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(85)
        .build_cartesian_2d((0u32..bucket_count).into_segmented(), 0u32..y_max)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart_context
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Value Range")
        .x_label_style(("sans-serif", 16))
        .y_desc("Frequency")
        .y_label_style(("sans-serif", 25))
        .label_style(("sans-serif", 16))
        .x_labels(bucket_count as usize)
        .x_label_formatter(&|segment| match segment {
            SegmentValue::CenterOf(index) => labels
                .get(*index as usize)
                .cloned()
                .unwrap_or_default(),
            _ => String::new(),
        })
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    // Bars, with a small horizontal gap between neighbours.
    chart_context
        .draw_series(histogram.buckets.iter().enumerate().map(|(index, bucket)| {
            let mut bar = Rectangle::new(
                [
                    (SegmentValue::Exact(index as u32), 0u32),
                    (SegmentValue::Exact(index as u32 + 1), bucket.count as u32),
                ],
                BLUE.mix(0.5).filled(),
            );
            bar.set_margin(0, 0, 3, 3);
            bar
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    // Count labels above populated bars only.
    let label_style = TextStyle::from(("sans-serif", 18).into_font())
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    chart_context
        .draw_series(
            histogram
                .buckets
                .iter()
                .enumerate()
                .filter(|(_, bucket)| bucket.count > 0)
                .map(|(index, bucket)| {
                    Text::new(
                        format_thousands_u64(bucket.count as u64),
                        (
                            SegmentValue::CenterOf(index as u32),
                            bucket.count as u32,
                        ),
                        label_style.clone(),
                    )
                }),
        )
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    drop(chart_context);
    drop(root);

    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::data_structures::Sample;

    fn histogram(width: f64) -> IntervalHistogram {
        let sample = Sample::new(vec![10.0, 60.0, 120.0, 130.0, 500.0]).unwrap();
        IntervalHistogram::compute(&sample, width).unwrap()
    }

    #[test]
    fn test_empty_histogram_is_rejected() {
        let empty = IntervalHistogram {
            width: 50.0,
            buckets: Vec::new(),
            total_count: 0,
            total_sum: 0.0,
        };

        let result = create_distribution_plot(&empty, Path::new("."));
        assert!(matches!(result, Err(PlotError::InvalidData(_))));
    }

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn test_create_distribution_plot_writes_png() {
        let temp_dir = tempfile::tempdir().unwrap();

        let path = create_distribution_plot(&histogram(50.0), temp_dir.path()).unwrap();
        assert!(path.exists());
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "distribution_50.png"
        );

        // Re-rendering the same histogram overwrites the same file.
        let again = create_distribution_plot(&histogram(50.0), temp_dir.path()).unwrap();
        assert_eq!(path, again);
    }
}

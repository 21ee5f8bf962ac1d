//! Static distribution report: statistics block, interval breakdown table and
//! a bar chart PNG, computed once for a fixed width.

use argh::FromArgs;
use distribution_stats::analysis::constants::{DEFAULT_COLUMN, DEFAULT_INPUT_FILE, DEFAULT_WIDTH};
use distribution_stats::common::buckets::{bucket_rows, format_interval_table};
use distribution_stats::common::format::format_thousands_f64;
use distribution_stats::common::plots::create_distribution_plot;
use distribution_stats::{
    format_summary, IntervalError, IntervalHistogram, PlotError, SummaryStats,
};
use std::path::PathBuf;
use thiserror::Error;

/// Distribution report for a numeric spreadsheet column
#[derive(FromArgs, Debug)]
struct Args {
    /// input spreadsheet to analyze (default: DATA.xlsx)
    #[argh(option, short = 'i', default = "PathBuf::from(DEFAULT_INPUT_FILE)")]
    input: PathBuf,

    /// header name of the column to analyze (default: datos)
    #[argh(option, short = 'c', default = "DEFAULT_COLUMN.to_string()")]
    column: String,

    /// interval width for the breakdown (default: 50000)
    #[argh(option, short = 'w', default = "DEFAULT_WIDTH")]
    width: f64,

    /// directory where the chart is saved (default: current directory)
    #[argh(option, short = 'o', default = "PathBuf::from(\".\")")]
    output_dir: PathBuf,
}

/// Errors that can occur while building the report
#[derive(Error, Debug)]
enum ReportError {
    #[error("Interval computation error: {0}")]
    Interval(#[from] IntervalError),

    #[error("Plot generation error: {0}")]
    Plot(#[from] PlotError),
}

fn main() -> Result<(), ReportError> {
    let args: Args = argh::from_env();

    if !args.input.exists() {
        eprintln!("Error: Input file does not exist: {}", args.input.display());
        std::process::exit(1);
    }

    let sample = match distribution_stats::load_column(&args.input, &args.column) {
        Ok(sample) => sample,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!(
                "Make sure the file '{}' exists and contains a column named '{}'.",
                args.input.display(),
                args.column
            );
            std::process::exit(1);
        }
    };

    let stats = SummaryStats::compute(&sample);
    println!("{}", format_summary(&stats));

    let histogram = IntervalHistogram::compute(&sample, args.width)?;

    let heading = format!(
        "Breakdown by Intervals of {}",
        format_thousands_f64(args.width, 0)
    );
    println!();
    println!("{}", heading);
    println!("{}", "=".repeat(heading.len()));
    println!(
        "Total amount: {}",
        format_thousands_f64(histogram.total_sum, 2)
    );
    println!();

    let rows = bucket_rows(&histogram, false);
    println!("{}", format_interval_table(&rows, None));

    let plot_path = create_distribution_plot(&histogram, &args.output_dir)?;
    println!();
    println!("Chart saved to: {}", plot_path.display());

    Ok(())
}

//! Interactive distribution dashboard: a menu-driven loop that re-renders the
//! statistics block, the full bucket table and the chart whenever the user
//! picks a different interval width, and exports the table as CSV on request.

use argh::FromArgs;
use distribution_stats::analysis::constants::{DEFAULT_COLUMN, DEFAULT_INPUT_FILE, WIDTH_PRESETS};
use distribution_stats::common::buckets::{bucket_rows, format_interval_table};
use distribution_stats::common::export::{write_interval_csv, ExportError};
use distribution_stats::common::format::format_thousands_f64;
use distribution_stats::common::plots::create_distribution_plot;
use distribution_stats::{
    format_summary, IntervalError, IntervalHistogram, PlotError, Sample, SummaryStats,
};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Interactive distribution dashboard with a selectable interval width
#[derive(FromArgs, Debug)]
struct Args {
    /// input spreadsheet to analyze (default: DATA.xlsx)
    #[argh(option, short = 'i', default = "PathBuf::from(DEFAULT_INPUT_FILE)")]
    input: PathBuf,

    /// header name of the column to analyze (default: datos)
    #[argh(option, short = 'c', default = "DEFAULT_COLUMN.to_string()")]
    column: String,

    /// directory where charts and CSV exports are saved (default: current directory)
    #[argh(option, short = 'o', default = "PathBuf::from(\".\")")]
    output_dir: PathBuf,
}

/// Errors that can occur while the dashboard is running
#[derive(Error, Debug)]
enum DashboardError {
    #[error("Interval computation error: {0}")]
    Interval(#[from] IntervalError),

    #[error("Plot generation error: {0}")]
    Plot(#[from] PlotError),

    #[error("CSV export error: {0}")]
    Export(#[from] ExportError),

    #[error("Console input error: {0}")]
    Stdin(#[from] io::Error),
}

/// User-adjustable configuration, passed whole into each render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DashboardState {
    width: f64,
}

/// One full render pass: statistics, the complete bucket table and the chart.
///
/// Pure with respect to the dashboard: everything shown derives from the
/// immutable sample and the passed-in state, so rendering the same state
/// twice produces the same output and the same chart file.
fn render(
    sample: &Sample,
    state: DashboardState,
    output_dir: &Path,
) -> Result<IntervalHistogram, DashboardError> {
    let stats = SummaryStats::compute(sample);
    let histogram = IntervalHistogram::compute(sample, state.width)?;

    println!("{}", format_summary(&stats));
    println!();

    let title = format!(
        "Breakdown by Intervals of {}",
        format_thousands_f64(state.width, 0)
    );
    let rows = bucket_rows(&histogram, true);
    println!("{}", format_interval_table(&rows, Some(&title)));

    let plot_path = create_distribution_plot(&histogram, output_dir)?;
    println!();
    println!("Chart updated: {}", plot_path.display());

    Ok(histogram)
}

fn print_menu(state: DashboardState) {
    println!();
    println!(
        "Interval width: {}",
        format_thousands_f64(state.width, 0)
    );
    for (index, preset) in WIDTH_PRESETS.iter().enumerate() {
        println!("  [{}] width {}", index + 1, format_thousands_f64(*preset, 0));
    }
    println!("  [e] export table as CSV");
    println!("  [q] quit");
    print!("> ");
}

fn main() -> Result<(), DashboardError> {
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

    let mut state = DashboardState {
        width: WIDTH_PRESETS[0],
    };
    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        let histogram = render(&sample, state, &args.output_dir)?;

        print_menu(state);
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF: leave like a quit.
            break;
        }

        match line.trim() {
            "q" => break,
            "e" => {
                let path = write_interval_csv(&histogram, &args.output_dir)?;
                println!("Exported: {}", path.display());
            }
            // An empty line redraws with the current width.
            "" => {}
            choice => match choice.parse::<usize>() {
                Ok(n) if (1..=WIDTH_PRESETS.len()).contains(&n) => {
                    state.width = WIDTH_PRESETS[n - 1];
                }
                _ => println!(
                    "Unknown option '{}'; pick 1-{}, 'e' or 'q'.",
                    choice,
                    WIDTH_PRESETS.len()
                ),
            },
        }
    }

    Ok(())
}

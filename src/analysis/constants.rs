//! Shared constants for the analysis binaries.

/// Interval widths selectable from the dashboard menu.
///
/// The binner itself accepts any positive finite width; this set only bounds
/// what the interactive control offers.
pub const WIDTH_PRESETS: [f64; 4] = [50_000.0, 100_000.0, 200_000.0, 500_000.0];

/// Width used by the static report when none is given on the command line.
pub const DEFAULT_WIDTH: f64 = 50_000.0;

/// Input spreadsheet read when no path is given on the command line.
pub const DEFAULT_INPUT_FILE: &str = "DATA.xlsx";

/// Header name of the analyzed column.
pub const DEFAULT_COLUMN: &str = "datos";

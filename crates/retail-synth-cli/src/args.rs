//! CLI argument parsing module.
//!
//! This module defines the command-line interface for retail-synth using clap.
//!
//! # Examples
//!
//! ```bash
//! # Reference dataset: 250 rows, reference seed, written to realistic_retail_data.csv
//! retail-synth
//!
//! # A year of data with another seed
//! retail-synth --rows 365 --seed 13 -o year.csv
//!
//! # Preview only, nothing written
//! retail-synth --no-write --preview 10
//!
//! # CSV to stdout (the summary is suppressed so stdout stays valid CSV)
//! retail-synth -o -
//! ```

use clap::{ArgAction, Parser};
use retail_synth::generator::{DEFAULT_ROW_COUNT, REFERENCE_SEED};

use crate::csv_writer::OutputDest;
use crate::error::{CliError, Result};

/// Default destination of the generated file.
pub const DEFAULT_OUTPUT: &str = "realistic_retail_data.csv";

/// Output path that selects stdout.
pub const STDOUT_MARKER: &str = "-";

/// Default number of rows shown in the console preview.
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// retail-synth: synthetic retail time series for forecasting exercises
#[derive(Parser, Debug, Clone)]
#[command(name = "retail-synth")]
#[command(author, version, about = "Generate a synthetic daily retail dataset")]
#[command(long_about = "retail-synth generates a reproducible daily table of sales, \
    marketing spend, web traffic, temperature, inventory and calendar flags, prints a \
    preview with a correlation matrix, and writes the table to a CSV file.")]
pub struct Args {
    /// Number of daily rows to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_ROW_COUNT)]
    pub rows: usize,

    /// Random seed; the same seed always yields the same table
    #[arg(short, long, default_value_t = REFERENCE_SEED)]
    pub seed: u64,

    /// Output CSV file ("-" for stdout)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Rows shown in the console preview
    #[arg(long, default_value_t = DEFAULT_PREVIEW_ROWS)]
    pub preview: usize,

    /// Skip writing the CSV file
    #[arg(long)]
    pub no_write: bool,

    /// Skip the console summary
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Args::parse()
    }

    /// Check values clap cannot reject on its own.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 {
            return Err(CliError::InvalidArgument {
                argument: "rows".to_string(),
                reason: "row count must be positive".to_string(),
                suggestion: Some(format!("Use a positive integer like {DEFAULT_ROW_COUNT}")),
            });
        }

        if !self.no_write && self.output.trim().is_empty() {
            return Err(CliError::InvalidArgument {
                argument: "output".to_string(),
                reason: "output path is empty".to_string(),
                suggestion: Some(format!(
                    "Use a file name like {DEFAULT_OUTPUT}, \"-\" for stdout, or --no-write"
                )),
            });
        }

        Ok(())
    }

    /// Where the CSV goes, or `None` when writing is disabled.
    pub fn output_dest(&self) -> Option<OutputDest> {
        if self.no_write {
            None
        } else if self.output == STDOUT_MARKER {
            Some(OutputDest::Stdout)
        } else {
            Some(OutputDest::File(self.output.clone()))
        }
    }

    /// Whether the console summary should be printed.
    ///
    /// Writing CSV to stdout suppresses the summary.
    pub fn show_summary(&self) -> bool {
        !self.quiet && !matches!(self.output_dest(), Some(OutputDest::Stdout))
    }
}

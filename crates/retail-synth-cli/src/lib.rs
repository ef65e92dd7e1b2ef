//! retail-synth CLI library
//!
//! This module exposes the CLI components for testing and reuse.

pub mod args;
pub mod csv_reader;
pub mod csv_writer;
pub mod error;
pub mod logging;
pub mod preview;

pub use error::{CliError, Result};

use std::io::Write;

use tracing::info;

use crate::args::Args;
use crate::csv_writer::OutputDest;

/// Generate the dataset described by `args`, print the summary to `out`
/// and write the CSV.
///
/// The table is fully generated before anything is written, so a rejected
/// argument or a generation failure leaves no output file behind.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    args.validate()?;

    let dataset = retail_synth::generate(args.rows, args.seed)?;
    info!(
        rows = dataset.len(),
        seed = args.seed,
        first = ?dataset.first_date(),
        last = ?dataset.last_date(),
        "dataset generated"
    );

    if args.show_summary() {
        preview::write_summary(&dataset, args.preview, out)?;
    }

    match args.output_dest() {
        Some(dest) => {
            csv_writer::write_to_dest(&dataset, &dest)?;
            if let OutputDest::File(path) = &dest {
                info!(path = %path, "csv written");
                if args.show_summary() {
                    writeln!(out, "\nDataset saved to '{path}'")?;
                }
            }
        }
        None => info!("writing disabled"),
    }
    Ok(())
}

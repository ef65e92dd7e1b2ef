//! retail-synth command-line interface
//!
//! Generates the synthetic daily retail dataset, prints a preview with a
//! correlation matrix, and writes the table to CSV.

use std::io;
use std::process::ExitCode;

use retail_synth_cli::args::Args;
use retail_synth_cli::{logging, run};

fn main() -> ExitCode {
    let args = Args::parse_args();
    logging::init(args.verbose);

    match run(&args, &mut io::stdout()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

//! CLI error types for file I/O, CSV and generation failures.
//!
//! This module provides the [`CliError`] enum which wraps all possible errors
//! that can occur during CLI operations. Error messages are designed to be
//! actionable, providing both what went wrong and how to fix it.

use std::fmt;
use std::io;

/// Exit code for an invalid command-line argument.
pub const EXIT_INVALID_ARGUMENT: u8 = 1;
/// Exit code for I/O, CSV or generation failures.
pub const EXIT_DATA_ERROR: u8 = 2;

/// CLI error type encompassing all possible error conditions.
#[derive(Debug)]
pub enum CliError {
    /// An I/O error occurred while reading or writing files.
    IoError {
        /// The underlying I/O error.
        source: io::Error,
        /// Path that caused the error, if known.
        path: Option<String>,
    },
    /// An error occurred while reading or writing CSV data.
    CsvError {
        /// Description of the CSV error.
        message: String,
        /// Line number where the error occurred, if known.
        line: Option<u64>,
    },
    /// The generator rejected its input or produced an inconsistent table.
    GenerationError {
        /// The underlying retail-synth error.
        source: retail_synth::Error,
    },
    /// An invalid argument was provided.
    InvalidArgument {
        /// Name of the invalid argument.
        argument: String,
        /// Description of why it's invalid.
        reason: String,
        /// Suggestion for valid values.
        suggestion: Option<String>,
    },
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::InvalidArgument { .. } => EXIT_INVALID_ARGUMENT,
            CliError::GenerationError {
                source: retail_synth::Error::InvalidArgument { .. },
            } => EXIT_INVALID_ARGUMENT,
            CliError::IoError { .. }
            | CliError::CsvError { .. }
            | CliError::GenerationError { .. } => EXIT_DATA_ERROR,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::IoError { source, path } => {
                if let Some(p) = path {
                    write!(f, "I/O error with file '{p}': {source}. ")?;
                    write!(
                        f,
                        "Check that the directory exists and you have write permissions."
                    )
                } else {
                    write!(f, "I/O error: {source}")
                }
            }
            CliError::CsvError { message, line } => {
                if let Some(l) = line {
                    write!(f, "CSV error on line {l}: {message}. ")?;
                } else {
                    write!(f, "CSV error: {message}. ")?;
                }
                write!(
                    f,
                    "Ensure the file has the dataset header and one row per day."
                )
            }
            CliError::GenerationError { source } => {
                write!(f, "Dataset generation error: {source}")
            }
            CliError::InvalidArgument {
                argument,
                reason,
                suggestion,
            } => {
                write!(f, "Invalid argument '{argument}': {reason}")?;
                if let Some(s) = suggestion {
                    write!(f, ". {s}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::IoError { source, .. } => Some(source),
            CliError::GenerationError { source } => Some(source),
            CliError::CsvError { .. } | CliError::InvalidArgument { .. } => None,
        }
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::IoError {
            source: err,
            path: None,
        }
    }
}

impl From<retail_synth::Error> for CliError {
    fn from(err: retail_synth::Error) -> Self {
        CliError::GenerationError { source: err }
    }
}

impl From<csv::Error> for CliError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(csv::Position::line);
        CliError::CsvError {
            message: err.to_string(),
            line,
        }
    }
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

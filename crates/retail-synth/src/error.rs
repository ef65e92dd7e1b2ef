//! Error types for retail-synth.
//!
//! This module defines the error type shared by the generator, the noise
//! stream, the dataset validator and the statistics helpers.

use thiserror::Error;

use crate::noise::DrawStage;

/// The main error type for retail-synth operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A caller-supplied argument is outside its valid domain.
    ///
    /// Returned by the generator when the requested row count is zero.
    #[error("invalid argument '{argument}': {reason}")]
    InvalidArgument {
        /// Name of the offending argument.
        argument: &'static str,
        /// Description of why the value is invalid.
        reason: String,
    },

    /// A noise distribution could not be constructed from its parameters.
    #[error("invalid {distribution} distribution: {reason}")]
    InvalidDistribution {
        /// Name of the distribution family.
        distribution: &'static str,
        /// Message reported by the distribution constructor.
        reason: String,
    },

    /// A draw stage was requested out of the documented order.
    ///
    /// `expected` is `None` once every stage of the stream has been consumed.
    #[error("draw stage {actual} requested out of order (expected {expected:?})")]
    DrawOrder {
        /// The stage the stream was positioned at.
        expected: Option<DrawStage>,
        /// The stage that was requested.
        actual: DrawStage,
    },

    /// The input series or record set is empty.
    #[error("empty input: no data provided")]
    EmptyInput,

    /// Two series that must be the same length are not.
    #[error("length mismatch: {description}")]
    LengthMismatch {
        /// Description of the mismatch.
        description: String,
    },

    /// A record violates the dataset invariants.
    #[error("inconsistent record at row {row}: {reason}")]
    InconsistentRecord {
        /// Zero-based index of the offending record.
        row: usize,
        /// Description of the violated invariant.
        reason: String,
    },

    /// Failed to convert a numeric value to the target type.
    #[error("numeric conversion failed: {context}")]
    NumericConversion {
        /// Description of the conversion that failed.
        context: &'static str,
    },
}

/// Convenience type alias for Results using the retail-synth Error type.
pub type Result<T> = std::result::Result<T, Error>;

//! Commonly used types and functions for convenient importing.
//!
//! ```
//! use retail_synth::prelude::*;
//!
//! let mut stream = NoiseStream::from_seed(REFERENCE_SEED);
//! let dataset = generate_with_rng(10, &mut stream).unwrap();
//! assert_eq!(dataset.len(), 10);
//! ```

// Error types
pub use crate::error::{Error, Result};

// Generation
pub use crate::generator::{
    generate, generate_default, generate_with_rng, DEFAULT_ROW_COUNT, REFERENCE_SEED,
};
pub use crate::noise::{DrawStage, NoiseStream, DRAW_ORDER};

// Table types
pub use crate::record::{Column, Dataset, Record};

// Statistics
pub use crate::stats::{pearson, CorrelationMatrix};

//! Seeded noise stream shared by every stochastic stage of the generator.
//!
//! All randomness comes from one [`ChaCha8Rng`] owned by a [`NoiseStream`].
//! Values are consumed in the fixed order given by [`DRAW_ORDER`]:
//!
//! | # | Stage | Distribution | Draws |
//! |---|-------|--------------|-------|
//! | 1 | [`DrawStage::WalkIncrements`] | `Normal(0, 10)` | N, as a batch |
//! | 2 | [`DrawStage::TrafficNoise`] | `Normal(0, 100)` | N, as a batch |
//! | 3 | [`DrawStage::TemperatureNoise`] | `Normal(0, 2)` | N, as a batch |
//! | 4 | [`DrawStage::SalesNoise`] | `Normal(0, 5)` | N, as a batch |
//! | 5 | [`DrawStage::Restock`] | `UniformInt[0, 100)` | N, one per recurrence step |
//!
//! Reordering any of these changes every value drawn after it, so the stream
//! rejects stages requested out of order with [`Error::DrawOrder`].
//!
//! # Example
//!
//! ```
//! use retail_synth::noise::{DrawStage, NoiseStream};
//!
//! let mut stream = NoiseStream::from_seed(42);
//! let walk = stream.normal_stage(DrawStage::WalkIncrements, 10).unwrap();
//! assert_eq!(walk.len(), 10);
//!
//! // Skipping ahead is rejected.
//! assert!(stream.normal_stage(DrawStage::SalesNoise, 10).is_err());
//! ```

use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

use crate::error::{Error, Result};

/// Exclusive upper bound of the daily restock amount.
pub const RESTOCK_UPPER: u32 = 100;

/// One stochastic stage of the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawStage {
    /// Marketing-spend random-walk increments.
    WalkIncrements,
    /// Website-traffic noise.
    TrafficNoise,
    /// Temperature noise.
    TemperatureNoise,
    /// Sales noise.
    SalesNoise,
    /// Inventory restock amounts.
    Restock,
}

/// The order in which stages consume the stream.
pub const DRAW_ORDER: [DrawStage; 5] = [
    DrawStage::WalkIncrements,
    DrawStage::TrafficNoise,
    DrawStage::TemperatureNoise,
    DrawStage::SalesNoise,
    DrawStage::Restock,
];

impl DrawStage {
    /// Standard deviation of the zero-mean normal noise for this stage.
    ///
    /// Returns `None` for [`DrawStage::Restock`], which is uniform.
    #[must_use]
    pub const fn std_dev(self) -> Option<f64> {
        match self {
            Self::WalkIncrements => Some(10.0),
            Self::TrafficNoise => Some(100.0),
            Self::TemperatureNoise => Some(2.0),
            Self::SalesNoise => Some(5.0),
            Self::Restock => None,
        }
    }

    /// Position of this stage in [`DRAW_ORDER`].
    #[must_use]
    pub const fn position(self) -> usize {
        match self {
            Self::WalkIncrements => 0,
            Self::TrafficNoise => 1,
            Self::TemperatureNoise => 2,
            Self::SalesNoise => 3,
            Self::Restock => 4,
        }
    }
}

impl fmt::Display for DrawStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::WalkIncrements => "walk increments",
            Self::TrafficNoise => "traffic noise",
            Self::TemperatureNoise => "temperature noise",
            Self::SalesNoise => "sales noise",
            Self::Restock => "restock",
        };
        f.write_str(name)
    }
}

/// A seeded random stream that hands out draws stage by stage.
#[derive(Debug, Clone)]
pub struct NoiseStream {
    rng: ChaCha8Rng,
    cursor: usize,
    draws: u64,
}

impl NoiseStream {
    /// Creates a stream positioned at the first stage of [`DRAW_ORDER`].
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            cursor: 0,
            draws: 0,
        }
    }

    /// The next stage the stream expects, or `None` once all are consumed.
    #[must_use]
    pub fn next_stage(&self) -> Option<DrawStage> {
        DRAW_ORDER.get(self.cursor).copied()
    }

    /// Total number of values drawn so far.
    #[must_use]
    pub const fn draws(&self) -> u64 {
        self.draws
    }

    /// Draws `n` zero-mean normal values for a batch stage.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DrawOrder`] if `stage` is not the next stage or is
    /// [`DrawStage::Restock`], and [`Error::InvalidDistribution`] if the
    /// normal distribution rejects the stage's parameters.
    pub fn normal_stage(&mut self, stage: DrawStage, n: usize) -> Result<Vec<f64>> {
        let Some(std_dev) = stage.std_dev() else {
            return Err(Error::DrawOrder {
                expected: self.next_stage(),
                actual: stage,
            });
        };
        self.advance(stage)?;

        let normal = Normal::new(0.0, std_dev).map_err(|e| Error::InvalidDistribution {
            distribution: "normal",
            reason: e.to_string(),
        })?;
        let batch: Vec<f64> = normal.sample_iter(&mut self.rng).take(n).collect();
        self.draws += batch.len() as u64;
        Ok(batch)
    }

    /// Starts the restock stage and returns a lazy iterator over its draws.
    ///
    /// Each call to `next` draws one value from `0..RESTOCK_UPPER`; nothing
    /// is consumed until the iterator is advanced.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DrawOrder`] if the batch stages have not all been
    /// consumed yet.
    pub fn restocks(&mut self) -> Result<Restocks<'_>> {
        self.advance(DrawStage::Restock)?;
        Ok(Restocks { stream: self })
    }

    fn advance(&mut self, stage: DrawStage) -> Result<()> {
        if stage.position() != self.cursor {
            return Err(Error::DrawOrder {
                expected: self.next_stage(),
                actual: stage,
            });
        }
        self.cursor += 1;
        Ok(())
    }
}

/// Iterator over restock draws, borrowed from a [`NoiseStream`].
#[derive(Debug)]
pub struct Restocks<'a> {
    stream: &'a mut NoiseStream,
}

impl Iterator for Restocks<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        self.stream.draws += 1;
        Some(self.stream.rng.random_range(0..RESTOCK_UPPER))
    }
}

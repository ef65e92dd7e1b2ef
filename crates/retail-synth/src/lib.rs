//! retail-synth: seeded synthetic retail time series
//!
//! This crate generates a single daily table meant as input for time-series
//! forecasting exercises. Each row carries a sales target and explanatory
//! variables that are deliberately coupled to it.
//!
//! # Features
//!
//! - **Reproducible**: one seed fixes every value through an explicit
//!   [`noise::NoiseStream`]; there is no global random state
//! - **Documented draw order**: [`noise::DRAW_ORDER`] is part of the API
//! - **Consistent**: contiguous dates, calendar fields derived from dates,
//!   inventory never negative
//!
//! # Quick Start
//!
//! ```
//! use retail_synth::prelude::*;
//!
//! let dataset = generate(DEFAULT_ROW_COUNT, REFERENCE_SEED).unwrap();
//! assert_eq!(dataset.len(), 250);
//!
//! let first = &dataset.records()[0];
//! assert_eq!(first.date.to_string(), "2023-01-01");
//! assert_eq!(first.day_of_week, 6);
//! assert!(first.is_weekend);
//!
//! let r = pearson(&dataset.daily_sales_revenue(), &dataset.marketing_spend()).unwrap();
//! assert!((-1.0..=1.0).contains(&r));
//! ```
//!
//! # Columns
//!
//! | Column | Type | Derivation |
//! |--------|------|------------|
//! | `date` | date | 2023-01-01 + i days |
//! | `daily_sales_revenue` | 2 decimals | 500 + 0.5·i + 10·sin(2πi/7) + 0.1·spend + N(0,5) |
//! | `marketing_spend` | 2 decimals | 1000 + cumulative N(0,10) |
//! | `website_visitors` | integer | round(2.5·spend + N(0,100)) |
//! | `avg_temperature_c` | 1 decimal | 20 + 10·sin(2πi/365) + N(0,2) |
//! | `inventory_units` | integer ≥ 0 | max(0, prev − 0.1·sales + U[0,100)) |
//! | `day_of_week` | 0–6 | Monday = 0 |
//! | `is_weekend` | flag | day_of_week ≥ 5 |

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod calendar;
pub mod error;
pub mod generator;
pub mod noise;
pub mod prelude;
pub mod record;
pub mod stats;
pub mod utils;

pub use error::{Error, Result};
pub use generator::{generate, generate_default, generate_with_rng};
pub use record::{Column, Dataset, Record};

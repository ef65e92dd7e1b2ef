//! Shared test utilities for retail-synth integration tests.

#![allow(dead_code)]

use retail_synth::generator::{trend, weekly_seasonality, BASE_SALES};
use retail_synth::Dataset;

/// Sales with the deterministic trend and weekly cycle removed.
///
/// What remains is `0.1 × spend + noise` plus rounding error, which isolates
/// the marketing coupling from the shared time trend.
#[allow(dead_code)]
#[allow(clippy::cast_precision_loss)]
pub fn detrended_sales(dataset: &Dataset) -> Vec<f64> {
    dataset
        .records()
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let t = i as f64;
            r.daily_sales_revenue - BASE_SALES - trend(t) - weekly_seasonality(t)
        })
        .collect()
}

/// Verify that dates advance by exactly one day per row.
#[allow(dead_code)]
pub fn dates_contiguous(dataset: &Dataset) -> bool {
    dataset
        .records()
        .windows(2)
        .all(|pair| pair[1].date.signed_duration_since(pair[0].date).num_days() == 1)
}

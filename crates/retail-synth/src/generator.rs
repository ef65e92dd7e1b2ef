//! The series generator.
//!
//! [`generate`] turns a row count and a seed into a [`Dataset`] in five
//! stages, each reading values produced by the one before:
//!
//! 1. **Time axis**: dates from [`calendar::start_date`] and the index `t`.
//! 2. **Latent signals**: linear trend, weekly seasonality, annual
//!    temperature cycle.
//! 3. **Drivers**: marketing spend as a random walk from 1000, web traffic
//!    as `2.5 × spend` plus noise.
//! 4. **Target**: `sales = 500 + trend + seasonality + 0.1 × spend + noise`.
//! 5. **Derived state**: calendar fields, and inventory as a clamped
//!    recurrence driven by sales.
//!
//! Only stages 3 to 5 draw from the [`NoiseStream`], in the order fixed by
//! [`DRAW_ORDER`](crate::noise::DRAW_ORDER). The inventory recurrence reads
//! the unrounded sales value and carries an unrounded inventory level; only
//! the stored columns are rounded.
//!
//! # Example
//!
//! ```
//! use retail_synth::generator::{generate, REFERENCE_SEED};
//!
//! let dataset = generate(30, REFERENCE_SEED).unwrap();
//! assert_eq!(dataset.len(), 30);
//! assert_eq!(dataset, generate(30, REFERENCE_SEED).unwrap());
//! ```

use std::f64::consts::PI;

use tracing::{debug, instrument};

use crate::calendar;
use crate::error::{Error, Result};
use crate::noise::{DrawStage, NoiseStream};
use crate::record::{Dataset, Record};
use crate::utils::round_to;

/// Row count used when none is given.
pub const DEFAULT_ROW_COUNT: usize = 250;
/// Seed of the reference dataset.
///
/// Chosen so that the 250-row reference table shows the intended coupling:
/// its sales and marketing-spend columns correlate at about 0.82.
pub const REFERENCE_SEED: u64 = 7;

/// Sales level before trend, seasonality and marketing effects.
pub const BASE_SALES: f64 = 500.0;
/// Sales growth per day.
pub const TREND_SLOPE: f64 = 0.5;
/// Amplitude of the weekly sales cycle.
pub const WEEKLY_AMPLITUDE: f64 = 10.0;
/// Period of the weekly sales cycle, in days.
pub const WEEKLY_PERIOD: f64 = 7.0;
/// Share of marketing spend that flows into sales.
pub const SPEND_TO_SALES: f64 = 0.1;

/// Marketing spend on day 0 before the first increment.
pub const SPEND_START: f64 = 1000.0;
/// Website visitors per unit of marketing spend.
pub const VISITORS_PER_SPEND: f64 = 2.5;

/// Mean temperature in °C.
pub const TEMPERATURE_BASELINE: f64 = 20.0;
/// Amplitude of the annual temperature cycle.
pub const TEMPERATURE_AMPLITUDE: f64 = 10.0;
/// Period of the annual temperature cycle, in days.
pub const ANNUAL_PERIOD: f64 = 365.0;

/// Inventory before day 0.
pub const INVENTORY_START: f64 = 1000.0;
/// Units sold per unit of sales revenue.
pub const SALES_TO_UNITS: f64 = 0.1;

/// Linear trend component at index `t`.
#[inline]
#[must_use]
pub fn trend(t: f64) -> f64 {
    TREND_SLOPE * t
}

/// Weekly seasonal component at index `t`.
#[inline]
#[must_use]
pub fn weekly_seasonality(t: f64) -> f64 {
    WEEKLY_AMPLITUDE * (2.0 * PI * t / WEEKLY_PERIOD).sin()
}

/// Noise-free temperature at index `t`.
#[inline]
#[must_use]
pub fn temperature_cycle(t: f64) -> f64 {
    TEMPERATURE_BASELINE + TEMPERATURE_AMPLITUDE * (2.0 * PI * t / ANNUAL_PERIOD).sin()
}

/// Generates the reference dataset: [`DEFAULT_ROW_COUNT`] rows, [`REFERENCE_SEED`].
///
/// # Errors
///
/// See [`generate`].
pub fn generate_default() -> Result<Dataset> {
    generate(DEFAULT_ROW_COUNT, REFERENCE_SEED)
}

/// Generates `row_count` daily records from `seed`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `row_count` is zero.
pub fn generate(row_count: usize, seed: u64) -> Result<Dataset> {
    let mut stream = NoiseStream::from_seed(seed);
    generate_with_rng(row_count, &mut stream)
}

/// Generates `row_count` daily records from an explicit noise stream.
///
/// The stream must be fresh: every stage of
/// [`DRAW_ORDER`](crate::noise::DRAW_ORDER) is consumed exactly once.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `row_count` is zero and
/// [`Error::DrawOrder`] if the stream has already been used.
#[instrument(level = "debug", skip(stream))]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn generate_with_rng(row_count: usize, stream: &mut NoiseStream) -> Result<Dataset> {
    if row_count == 0 {
        return Err(Error::InvalidArgument {
            argument: "row_count",
            reason: "must be at least 1".to_string(),
        });
    }

    // Stage 1: time axis.
    let dates = calendar::date_axis(calendar::start_date(), row_count);
    let t: Vec<f64> = (0..row_count).map(|i| i as f64).collect();
    debug!(first = %dates[0], last = %dates[row_count - 1], "time axis built");

    // Stage 2: deterministic latent signals.
    let trend_values: Vec<f64> = t.iter().map(|&t| trend(t)).collect();
    let seasonal_values: Vec<f64> = t.iter().map(|&t| weekly_seasonality(t)).collect();

    // Stage 3: drivers. The four batch stages are drawn back to back.
    let walk = stream.normal_stage(DrawStage::WalkIncrements, row_count)?;
    let traffic_noise = stream.normal_stage(DrawStage::TrafficNoise, row_count)?;
    let temperature_noise = stream.normal_stage(DrawStage::TemperatureNoise, row_count)?;
    let sales_noise = stream.normal_stage(DrawStage::SalesNoise, row_count)?;

    let marketing_spend = random_walk(SPEND_START, &walk);
    let website_visitors: Vec<f64> = marketing_spend
        .iter()
        .zip(&traffic_noise)
        .map(|(spend, noise)| spend * VISITORS_PER_SPEND + noise)
        .collect();
    let temperature: Vec<f64> = t
        .iter()
        .zip(&temperature_noise)
        .map(|(&t, noise)| temperature_cycle(t) + noise)
        .collect();
    debug!(draws = stream.draws(), "drivers built");

    // Stage 4: target.
    let sales: Vec<f64> = (0..row_count)
        .map(|i| {
            BASE_SALES
                + trend_values[i]
                + seasonal_values[i]
                + SPEND_TO_SALES * marketing_spend[i]
                + sales_noise[i]
        })
        .collect();

    // Stage 5: derived state.
    let inventory = inventory_levels(&sales, stream.restocks()?);
    debug!(draws = stream.draws(), "inventory recurrence done");

    let records: Vec<Record> = (0..row_count)
        .map(|i| {
            let day_of_week = calendar::day_of_week(dates[i]);
            Record {
                date: dates[i],
                daily_sales_revenue: round_to(sales[i], 2),
                marketing_spend: round_to(marketing_spend[i], 2),
                website_visitors: website_visitors[i].round_ties_even() as i64,
                avg_temperature_c: round_to(temperature[i], 1),
                inventory_units: inventory[i],
                day_of_week,
                is_weekend: calendar::is_weekend(day_of_week),
            }
        })
        .collect();

    Ok(Dataset::from_generated(records))
}

/// Cumulative sum of `increments` offset by `start`.
///
/// Element `i` is `start + increments[0] + ... + increments[i]`.
#[must_use]
pub fn random_walk(start: f64, increments: &[f64]) -> Vec<f64> {
    increments
        .iter()
        .scan(0.0, |acc, &step| {
            *acc += step;
            Some(start + *acc)
        })
        .collect()
}

/// Runs the inventory recurrence over `sales`, pulling one restock per day.
///
/// `level = max(0, level - 0.1 × sales + restock)`, starting from
/// [`INVENTORY_START`]. The level is carried unrounded; each emitted value
/// is rounded half-to-even.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn inventory_levels<I>(sales: &[f64], restocks: I) -> Vec<u64>
where
    I: IntoIterator<Item = u32>,
{
    sales
        .iter()
        .zip(restocks)
        .scan(INVENTORY_START, |level, (&sold, restock)| {
            *level = (*level - sold * SALES_TO_UNITS + f64::from(restock)).max(0.0);
            // Clamped at zero above, so the cast cannot lose the sign.
            Some(level.round_ties_even() as u64)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{approx_eq, EPSILON};

    #[test]
    fn test_zero_rows_rejected() {
        let err = generate(0, REFERENCE_SEED).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidArgument {
                argument: "row_count",
                ..
            }
        ));
    }

    #[test]
    fn test_default_row_count() {
        let dataset = generate_default().unwrap();
        assert_eq!(dataset.len(), DEFAULT_ROW_COUNT);
    }

    #[test]
    fn test_used_stream_rejected() {
        let mut stream = NoiseStream::from_seed(1);
        generate_with_rng(5, &mut stream).unwrap();
        let err = generate_with_rng(5, &mut stream).unwrap_err();
        assert!(matches!(err, Error::DrawOrder { expected: None, .. }));
    }

    #[test]
    fn test_stream_consumes_five_n_draws() {
        let mut stream = NoiseStream::from_seed(3);
        generate_with_rng(17, &mut stream).unwrap();
        assert_eq!(stream.draws(), 5 * 17);
        assert_eq!(stream.next_stage(), None);
    }

    #[test]
    fn test_generate_with_rng_matches_generate() {
        let mut stream = NoiseStream::from_seed(11);
        let a = generate_with_rng(40, &mut stream).unwrap();
        let b = generate(40, 11).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_row_is_start_date() {
        let dataset = generate(1, REFERENCE_SEED).unwrap();
        let record = &dataset.records()[0];
        assert_eq!(record.date, calendar::start_date());
        assert_eq!(record.day_of_week, 6);
        assert!(record.is_weekend);
    }

    #[test]
    fn test_deterministic_components() {
        assert_eq!(trend(0.0), 0.0);
        assert!(approx_eq(trend(10.0), 5.0, EPSILON));
        assert!(approx_eq(weekly_seasonality(0.0), 0.0, EPSILON));
        assert!(approx_eq(weekly_seasonality(7.0), 0.0, 1e-9));
        assert!(approx_eq(temperature_cycle(0.0), 20.0, EPSILON));
        // Peak of the annual cycle a quarter year in.
        assert!(approx_eq(temperature_cycle(365.0 / 4.0), 30.0, 1e-9));
    }

    #[test]
    fn test_random_walk_cumulative() {
        let walk = random_walk(1000.0, &[1.0, -2.0, 0.5]);
        assert_eq!(walk, vec![1001.0, 999.0, 999.5]);
        assert!(random_walk(1000.0, &[]).is_empty());
    }

    #[test]
    fn test_inventory_recurrence() {
        // 1000 - 60 + 10 = 950; 950 - 60 + 0 = 890; 890 - 60.5 + 99 = 928.5
        let levels = inventory_levels(&[600.0, 600.0, 605.0], [10, 0, 99]);
        assert_eq!(levels, vec![950, 890, 928]);
    }

    #[test]
    fn test_inventory_clamps_at_zero() {
        let levels = inventory_levels(&[20_000.0, 100.0, 100.0], [0, 5, 50]);
        // 1000 - 2000 -> 0; 0 - 10 + 5 -> 0; 0 - 10 + 50 -> 40
        assert_eq!(levels, vec![0, 0, 40]);
    }

    #[test]
    fn test_inventory_uses_unrounded_level() {
        // 1000 - 0.25 + 0 = 999.75 -> 1000; 999.75 - 0.25 = 999.5 -> 1000 (ties even)
        // 999.5 - 0.25 = 999.25 -> 999
        let levels = inventory_levels(&[2.5, 2.5, 2.5], [0, 0, 0]);
        assert_eq!(levels, vec![1000, 1000, 999]);
    }

    #[test]
    fn test_inventory_draws_one_restock_per_day() {
        let mut pulled = 0;
        let restocks = std::iter::repeat_with(|| {
            pulled += 1;
            1
        });
        let levels = inventory_levels(&[10.0; 6], restocks);
        assert_eq!(levels.len(), 6);
        assert_eq!(pulled, 6);
    }

    #[test]
    fn test_columns_rounded() {
        let dataset = generate(100, 5).unwrap();
        for r in dataset.records() {
            assert_eq!(round_to(r.daily_sales_revenue, 2), r.daily_sales_revenue);
            assert_eq!(round_to(r.marketing_spend, 2), r.marketing_spend);
            assert_eq!(round_to(r.avg_temperature_c, 1), r.avg_temperature_c);
        }
    }

    #[test]
    fn test_first_spend_near_start() {
        // One Normal(0, 10) step away from 1000.
        let dataset = generate(1, 8).unwrap();
        let spend = dataset.records()[0].marketing_spend;
        assert!((spend - SPEND_START).abs() < 80.0, "spend {spend}");
    }
}

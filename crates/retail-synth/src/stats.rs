//! Pearson correlation over whole series.
//!
//! - [`pearson`] - correlation coefficient of two equal-length series
//! - [`CorrelationMatrix`] - pairwise coefficients for a set of named series
//!
//! # Mathematical Conventions
//!
//! - Means and sums of squares are taken over the full series (no window).
//! - A series with zero variance has no defined coefficient: the result is
//!   NaN, on the matrix diagonal too.
//!
//! # Example
//!
//! ```
//! use retail_synth::stats::pearson;
//!
//! let x = [1.0_f64, 2.0, 3.0, 4.0];
//! let y = [2.0_f64, 4.0, 6.0, 8.0];
//! assert!((pearson(&x, &y).unwrap() - 1.0).abs() < 1e-12);
//! ```

use std::fmt;

use num_traits::{Float, NumCast};

use crate::error::{Error, Result};

/// Computes the Pearson correlation coefficient of `x` and `y`.
///
/// r = Σ((x-μx)(y-μy)) / sqrt(Σ(x-μx)² · Σ(y-μy)²)
///
/// Returns NaN when either series is constant, including a single value.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] if `x` is empty, [`Error::LengthMismatch`]
/// if the lengths differ, and [`Error::NumericConversion`] if the length
/// cannot be represented in `T`.
pub fn pearson<T: Float>(x: &[T], y: &[T]) -> Result<T> {
    if x.is_empty() {
        return Err(Error::EmptyInput);
    }
    if x.len() != y.len() {
        return Err(Error::LengthMismatch {
            description: format!("x has {} elements, y has {}", x.len(), y.len()),
        });
    }

    let n: T = <T as NumCast>::from(x.len()).ok_or(Error::NumericConversion {
        context: "series length to float",
    })?;
    let sum = |s: &[T]| s.iter().fold(T::zero(), |acc, &v| acc + v);
    let mean_x = sum(x) / n;
    let mean_y = sum(y) / n;

    let (cov, var_x, var_y) = x.iter().zip(y).fold(
        (T::zero(), T::zero(), T::zero()),
        |(cov, var_x, var_y), (&a, &b)| {
            let dx = a - mean_x;
            let dy = b - mean_y;
            (cov + dx * dy, var_x + dx * dx, var_y + dy * dy)
        },
    );

    let denom = (var_x * var_y).sqrt();
    if denom == T::zero() {
        Ok(T::nan())
    } else {
        Ok(cov / denom)
    }
}

/// Symmetric matrix of pairwise Pearson coefficients.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    labels: Vec<String>,
    values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// Computes the matrix for a set of named, equal-length series.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] if `series` is empty or any series is
    /// empty, and [`Error::LengthMismatch`] if the series lengths differ.
    pub fn compute(series: &[(&str, &[f64])]) -> Result<Self> {
        if series.is_empty() {
            return Err(Error::EmptyInput);
        }

        let k = series.len();
        let mut values = vec![vec![1.0; k]; k];
        for i in 0..k {
            // Validates lengths even for a single series.
            if pearson(series[i].1, series[i].1)?.is_nan() {
                values[i][i] = f64::NAN;
            }
            for j in (i + 1)..k {
                let r = pearson(series[i].1, series[j].1)?;
                values[i][j] = r;
                values[j][i] = r;
            }
        }

        Ok(Self {
            labels: series.iter().map(|(name, _)| (*name).to_string()).collect(),
            values,
        })
    }

    /// Series names, in input order.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Coefficient at row `i`, column `j`.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.values.get(i).and_then(|row| row.get(j)).copied()
    }

    /// Coefficient between two series looked up by name.
    #[must_use]
    pub fn get_by_name(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.labels.iter().position(|l| l == a)?;
        let j = self.labels.iter().position(|l| l == b)?;
        self.get(i, j)
    }

    /// Number of series.
    #[must_use]
    pub fn size(&self) -> usize {
        self.labels.len()
    }
}

impl fmt::Display for CorrelationMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label_width = self.labels.iter().map(String::len).max().unwrap_or(0);
        let widths: Vec<usize> = self.labels.iter().map(|l| l.len().max(9)).collect();

        write!(f, "{:label_width$}", "")?;
        for (label, width) in self.labels.iter().zip(&widths) {
            write!(f, "  {label:>width$}")?;
        }
        writeln!(f)?;

        for (label, row) in self.labels.iter().zip(&self.values) {
            write!(f, "{label:<label_width$}")?;
            for (value, width) in row.iter().zip(&widths) {
                write!(f, "  {value:>width$.6}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

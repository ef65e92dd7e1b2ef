//! Daily records and the immutable dataset that holds them.
//!
//! A [`Record`] is one simulated day. Its field order is the column order of
//! the persisted file, and its serde representation is the CSV row: dates as
//! `YYYY-MM-DD` and the weekend flag as `1`/`0`.
//!
//! A [`Dataset`] owns the records of one generation run. It is never empty,
//! its dates are contiguous, and its calendar fields agree with its dates.
//! There are no mutable accessors.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar;
use crate::error::{Error, Result};

/// One simulated day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Calendar date.
    pub date: NaiveDate,
    /// Target variable, rounded to 2 decimals.
    pub daily_sales_revenue: f64,
    /// Random-walk marketing spend, rounded to 2 decimals.
    pub marketing_spend: f64,
    /// Visitors driven by marketing spend. May be negative; it is not clamped.
    pub website_visitors: i64,
    /// Seasonal temperature, rounded to 1 decimal.
    pub avg_temperature_c: f64,
    /// Inventory on hand after the day's sales and restock.
    pub inventory_units: u64,
    /// Day of week, Monday = 0.
    pub day_of_week: u8,
    /// Saturday or Sunday.
    #[serde(with = "flag")]
    pub is_weekend: bool,
}

impl Record {
    /// Value of a numeric column, widened to `f64`.
    ///
    /// Returns `None` for [`Column::Date`].
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn value(&self, column: Column) -> Option<f64> {
        match column {
            Column::Date => None,
            Column::DailySalesRevenue => Some(self.daily_sales_revenue),
            Column::MarketingSpend => Some(self.marketing_spend),
            Column::WebsiteVisitors => Some(self.website_visitors as f64),
            Column::AvgTemperatureC => Some(self.avg_temperature_c),
            Column::InventoryUnits => Some(self.inventory_units as f64),
            Column::DayOfWeek => Some(f64::from(self.day_of_week)),
            Column::IsWeekend => Some(if self.is_weekend { 1.0 } else { 0.0 }),
        }
    }
}

/// Columns of the dataset, in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    /// `date`
    Date,
    /// `daily_sales_revenue`
    DailySalesRevenue,
    /// `marketing_spend`
    MarketingSpend,
    /// `website_visitors`
    WebsiteVisitors,
    /// `avg_temperature_c`
    AvgTemperatureC,
    /// `inventory_units`
    InventoryUnits,
    /// `day_of_week`
    DayOfWeek,
    /// `is_weekend`
    IsWeekend,
}

impl Column {
    /// Every column, in file order.
    pub const ALL: [Self; 8] = [
        Self::Date,
        Self::DailySalesRevenue,
        Self::MarketingSpend,
        Self::WebsiteVisitors,
        Self::AvgTemperatureC,
        Self::InventoryUnits,
        Self::DayOfWeek,
        Self::IsWeekend,
    ];

    /// Header name used in the persisted file.
    #[must_use]
    pub const fn header(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::DailySalesRevenue => "daily_sales_revenue",
            Self::MarketingSpend => "marketing_spend",
            Self::WebsiteVisitors => "website_visitors",
            Self::AvgTemperatureC => "avg_temperature_c",
            Self::InventoryUnits => "inventory_units",
            Self::DayOfWeek => "day_of_week",
            Self::IsWeekend => "is_weekend",
        }
    }

    /// Looks a column up by its header name.
    #[must_use]
    pub fn from_header(header: &str) -> Option<Self> {
        let header = header.trim();
        Self::ALL.into_iter().find(|c| c.header() == header)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// The generated table: a non-empty run of contiguous daily records.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Builds a dataset from records, checking the table invariants.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] if `records` is empty, and
    /// [`Error::InconsistentRecord`] if dates are not contiguous or a
    /// record's calendar fields disagree with its date.
    pub fn from_records(records: Vec<Record>) -> Result<Self> {
        if records.is_empty() {
            return Err(Error::EmptyInput);
        }

        for (row, record) in records.iter().enumerate() {
            let expected_dow = calendar::day_of_week(record.date);
            if record.day_of_week != expected_dow {
                return Err(Error::InconsistentRecord {
                    row,
                    reason: format!(
                        "day_of_week is {} but {} is day {expected_dow}",
                        record.day_of_week, record.date
                    ),
                });
            }
            if record.is_weekend != calendar::is_weekend(expected_dow) {
                return Err(Error::InconsistentRecord {
                    row,
                    reason: format!("is_weekend disagrees with date {}", record.date),
                });
            }
        }

        for (row, pair) in records.windows(2).enumerate() {
            if pair[0].date.succ_opt() != Some(pair[1].date) {
                return Err(Error::InconsistentRecord {
                    row: row + 1,
                    reason: format!(
                        "date {} does not follow {}",
                        pair[1].date, pair[0].date
                    ),
                });
            }
        }

        Ok(Self { records })
    }

    /// Wraps records produced by the generator, which upholds the invariants.
    pub(crate) fn from_generated(records: Vec<Record>) -> Self {
        debug_assert!(!records.is_empty());
        Self { records }
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always `false` for a constructed dataset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, in date order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// The first `n` records (fewer if the dataset is shorter).
    #[must_use]
    pub fn head(&self, n: usize) -> &[Record] {
        &self.records[..n.min(self.records.len())]
    }

    /// Iterator over the records.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Date of the first record.
    #[must_use]
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.records.first().map(|r| r.date)
    }

    /// Date of the last record.
    #[must_use]
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.records.last().map(|r| r.date)
    }

    /// A numeric column widened to `f64`. Returns `None` for [`Column::Date`].
    #[must_use]
    pub fn column(&self, column: Column) -> Option<Vec<f64>> {
        self.records.iter().map(|r| r.value(column)).collect()
    }

    /// The `daily_sales_revenue` column.
    #[must_use]
    pub fn daily_sales_revenue(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.daily_sales_revenue).collect()
    }

    /// The `marketing_spend` column.
    #[must_use]
    pub fn marketing_spend(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.marketing_spend).collect()
    }

    /// The `avg_temperature_c` column.
    #[must_use]
    pub fn avg_temperature_c(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.avg_temperature_c).collect()
    }

    /// Consumes the dataset and returns its records.
    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Serde adapter writing `bool` as `1`/`0` and reading `1`/`0` or `true`/`false`.
pub mod flag {
    use std::fmt;

    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};

    /// Serializes `true` as `1` and `false` as `0`.
    ///
    /// # Errors
    ///
    /// Propagates the serializer's error.
    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*value))
    }

    /// Accepts `0`, `1`, `true` or `false`.
    ///
    /// # Errors
    ///
    /// Returns a custom error for any other value.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        deserializer.deserialize_any(FlagVisitor)
    }

    struct FlagVisitor;

    impl Visitor<'_> for FlagVisitor {
        type Value = bool;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("0, 1, true or false")
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<bool, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<bool, E> {
            match v {
                0 => Ok(false),
                1 => Ok(true),
                other => Err(E::invalid_value(de::Unexpected::Unsigned(other), &self)),
            }
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<bool, E> {
            match v {
                0 => Ok(false),
                1 => Ok(true),
                other => Err(E::invalid_value(de::Unexpected::Signed(other), &self)),
            }
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<bool, E> {
            match v.trim() {
                "1" | "true" | "True" => Ok(true),
                "0" | "false" | "False" => Ok(false),
                other => Err(E::invalid_value(de::Unexpected::Str(other), &self)),
            }
        }
    }
}

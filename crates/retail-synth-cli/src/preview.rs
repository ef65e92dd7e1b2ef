//! Console summary: the first rows of the table and a correlation matrix.
//!
//! The summary is purely observational; it reads the dataset and never
//! changes it.

use std::io::Write;

use retail_synth::stats::CorrelationMatrix;
use retail_synth::{Column, Dataset, Record};

use crate::error::Result;

/// Columns included in the correlation matrix.
pub const CORRELATION_COLUMNS: [Column; 3] = [
    Column::DailySalesRevenue,
    Column::MarketingSpend,
    Column::AvgTemperatureC,
];

/// Format one record as cells, in [`Column::ALL`] order.
fn cells(record: &Record) -> Vec<String> {
    vec![
        record.date.to_string(),
        format!("{:.2}", record.daily_sales_revenue),
        format!("{:.2}", record.marketing_spend),
        record.website_visitors.to_string(),
        format!("{:.1}", record.avg_temperature_c),
        record.inventory_units.to_string(),
        record.day_of_week.to_string(),
        u8::from(record.is_weekend).to_string(),
    ]
}

/// Write the first `rows` records as a fixed-width table with a row index.
pub fn write_head<W: Write>(dataset: &Dataset, rows: usize, out: &mut W) -> Result<()> {
    let head = dataset.head(rows);
    let body: Vec<Vec<String>> = head.iter().map(cells).collect();

    let widths: Vec<usize> = Column::ALL
        .iter()
        .enumerate()
        .map(|(i, column)| {
            body.iter()
                .map(|row| row[i].len())
                .chain(std::iter::once(column.header().len()))
                .max()
                .unwrap_or(0)
        })
        .collect();
    let index_width = head.len().saturating_sub(1).to_string().len();

    write!(out, "{:index_width$}", "")?;
    for (column, width) in Column::ALL.iter().zip(&widths) {
        write!(out, "  {:>width$}", column.header())?;
    }
    writeln!(out)?;

    for (i, row) in body.iter().enumerate() {
        write!(out, "{i:<index_width$}")?;
        for (cell, width) in row.iter().zip(&widths) {
            write!(out, "  {cell:>width$}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Pearson matrix over [`CORRELATION_COLUMNS`].
pub fn correlation_matrix(dataset: &Dataset) -> Result<CorrelationMatrix> {
    let series: Vec<(Column, Vec<f64>)> = CORRELATION_COLUMNS
        .iter()
        .filter_map(|&c| dataset.column(c).map(|values| (c, values)))
        .collect();
    let named: Vec<(&str, &[f64])> = series
        .iter()
        .map(|(c, values)| (c.header(), values.as_slice()))
        .collect();
    Ok(CorrelationMatrix::compute(&named)?)
}

/// Write the full console summary: head, then correlation matrix.
pub fn write_summary<W: Write>(dataset: &Dataset, rows: usize, out: &mut W) -> Result<()> {
    writeln!(out, "--- Dataset Head ---")?;
    write_head(dataset, rows, out)?;
    writeln!(out)?;
    writeln!(out, "--- Correlation Matrix ---")?;
    write!(out, "{}", correlation_matrix(dataset)?)?;
    out.flush()?;
    Ok(())
}

//! CSV reading module for loading a previously written dataset.
//!
//! The reader expects the exact header written by
//! [`csv_writer`](crate::csv_writer). Header names are matched after
//! trimming, and `is_weekend` is accepted as `1`/`0` or `true`/`false`.
//! Every row is checked against the dataset invariants (contiguous dates,
//! calendar fields that agree with the date), so a round-trip either
//! reproduces the original table or fails with a located error.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use retail_synth::{Column, Dataset, Record};

use crate::error::{CliError, Result};

/// Check that `headers` names every column, in file order.
fn check_headers(headers: &csv::StringRecord) -> Result<()> {
    let found: Vec<&str> = headers.iter().map(str::trim).collect();
    let expected: Vec<&str> = Column::ALL.iter().map(|c| c.header()).collect();

    if found == expected {
        return Ok(());
    }

    let missing: Vec<&str> = expected
        .iter()
        .filter(|name| !found.contains(*name))
        .copied()
        .collect();
    let message = if missing.is_empty() {
        format!("columns out of order; expected {}", expected.join(","))
    } else {
        format!("missing columns: {}", missing.join(", "))
    };
    Err(CliError::CsvError {
        message,
        line: Some(1),
    })
}

/// Parse a dataset CSV file.
///
/// # Errors
///
/// Returns `CliError::IoError` if the file cannot be opened,
/// `CliError::CsvError` if the header or a row is malformed, and
/// `CliError::GenerationError` if the rows violate the dataset invariants.
pub fn read_dataset<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| CliError::IoError {
        source: e,
        path: Some(path.display().to_string()),
    })?;
    read_dataset_from_reader(BufReader::new(file))
}

/// Parse a dataset from any reader.
pub fn read_dataset_from_reader<R: Read>(reader: R) -> Result<Dataset> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    check_headers(csv_reader.headers()?)?;

    let records = csv_reader
        .deserialize::<Record>()
        .collect::<std::result::Result<Vec<_>, _>>()?;

    if records.is_empty() {
        return Err(CliError::CsvError {
            message: "no data rows found".to_string(),
            line: None,
        });
    }

    Ok(Dataset::from_records(records)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "date,daily_sales_revenue,marketing_spend,website_visitors,\
                          avg_temperature_c,inventory_units,day_of_week,is_weekend";

    #[test]
    fn test_parse_minimal_file() {
        let csv = format!(
            "{HEADER}\n\
             2023-01-01,604.97,1004.97,2550,20.3,942,6,1\n\
             2023-01-02,611.21,1003.59,2412,19.1,889,0,0\n"
        );
        let dataset = read_dataset_from_reader(csv.as_bytes()).unwrap();

        assert_eq!(dataset.len(), 2);
        let first = &dataset.records()[0];
        assert_eq!(first.date.to_string(), "2023-01-01");
        assert_eq!(first.daily_sales_revenue, 604.97);
        assert_eq!(first.marketing_spend, 1004.97);
        assert_eq!(first.website_visitors, 2550);
        assert_eq!(first.avg_temperature_c, 20.3);
        assert_eq!(first.inventory_units, 942);
        assert!(first.is_weekend);
        assert!(!dataset.records()[1].is_weekend);
    }

    #[test]
    fn test_boolean_weekend_flag_accepted() {
        let csv = format!(
            "{HEADER}\n2023-01-01,604.97,1004.97,2550,20.3,942,6,true\n"
        );
        let dataset = read_dataset_from_reader(csv.as_bytes()).unwrap();
        assert!(dataset.records()[0].is_weekend);
    }

    #[test]
    fn test_negative_visitors_accepted() {
        let csv = format!("{HEADER}\n2023-01-01,604.97,10.00,-35,20.3,942,6,1\n");
        let dataset = read_dataset_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(dataset.records()[0].website_visitors, -35);
    }

    #[test]
    fn test_whitespace_trimmed() {
        let csv = format!(
            "{HEADER}\n 2023-01-01 , 604.97 ,1004.97,2550,20.3,942, 6 ,1\n"
        );
        assert!(read_dataset_from_reader(csv.as_bytes()).is_ok());
    }

    #[test]
    fn test_missing_column() {
        let csv = "date,daily_sales_revenue\n2023-01-01,604.97\n";
        let err = read_dataset_from_reader(csv.as_bytes()).unwrap_err();
        match err {
            CliError::CsvError { message, line } => {
                assert!(message.contains("marketing_spend"));
                assert_eq!(line, Some(1));
            }
            other => panic!("Expected CsvError, got {other:?}"),
        }
    }

    #[test]
    fn test_columns_out_of_order() {
        let csv = "daily_sales_revenue,date,marketing_spend,website_visitors,\
                   avg_temperature_c,inventory_units,day_of_week,is_weekend\n";
        let err = read_dataset_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, CliError::CsvError { ref message, .. } if message.contains("order")));
    }

    #[test]
    fn test_header_only() {
        let csv = format!("{HEADER}\n");
        let err = read_dataset_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, CliError::CsvError { line: None, .. }));
    }

    #[test]
    fn test_unparseable_number() {
        let csv = format!("{HEADER}\n2023-01-01,abc,1004.97,2550,20.3,942,6,1\n");
        let err = read_dataset_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, CliError::CsvError { .. }));
    }

    #[test]
    fn test_negative_inventory_rejected() {
        let csv = format!("{HEADER}\n2023-01-01,604.97,1004.97,2550,20.3,-1,6,1\n");
        assert!(read_dataset_from_reader(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_invalid_weekend_flag() {
        let csv = format!("{HEADER}\n2023-01-01,604.97,1004.97,2550,20.3,942,6,2\n");
        assert!(read_dataset_from_reader(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_date_gap_rejected() {
        let csv = format!(
            "{HEADER}\n\
             2023-01-01,604.97,1004.97,2550,20.3,942,6,1\n\
             2023-01-03,611.21,1003.59,2412,19.1,889,1,0\n"
        );
        let err = read_dataset_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            CliError::GenerationError {
                source: retail_synth::Error::InconsistentRecord { row: 1, .. }
            }
        ));
    }

    #[test]
    fn test_file_not_found() {
        let err = read_dataset("/nonexistent/path/data.csv").unwrap_err();
        assert!(matches!(err, CliError::IoError { path: Some(_), .. }));
    }
}

//! CSV output module for writing the generated dataset.
//!
//! # Output Format
//!
//! - Header row with the column names, in [`Column::ALL`](retail_synth::Column::ALL) order
//! - One row per day, no index column
//! - Dates as `YYYY-MM-DD`, the weekend flag as `1`/`0`
//! - Floats in shortest round-trip form, so reading them back is exact
//!
//! File output is staged in a sibling temporary file and renamed into place
//! once every row is flushed; a failed write never leaves a partial file at
//! the destination.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use retail_synth::Dataset;
use tracing::debug;

use crate::error::{CliError, Result};

/// Output destination: either stdout or a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputDest {
    /// Write to stdout.
    Stdout,
    /// Write to a file at the given path.
    File(String),
}

/// Serialize `dataset` as CSV into any writer.
pub fn write_dataset<W: Write>(dataset: &Dataset, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in dataset {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write `dataset` to the given destination.
pub fn write_to_dest(dataset: &Dataset, dest: &OutputDest) -> Result<()> {
    match dest {
        OutputDest::Stdout => write_dataset(dataset, io::stdout().lock()),
        OutputDest::File(path) => write_to_file(dataset, path),
    }
}

/// Write `dataset` to a file path, replacing any existing file.
pub fn write_to_file<P: AsRef<Path>>(dataset: &Dataset, path: P) -> Result<()> {
    let path = path.as_ref();
    let staging = staging_path(path);
    let io_err = |source: io::Error, p: &Path| CliError::IoError {
        source,
        path: Some(p.display().to_string()),
    };

    let file = File::create(&staging).map_err(|e| io_err(e, path))?;
    let result = write_dataset(dataset, BufWriter::new(file))
        .and_then(|()| fs::rename(&staging, path).map_err(|e| io_err(e, path)));

    if result.is_err() {
        fs::remove_file(&staging).ok();
    } else {
        debug!(path = %path.display(), rows = dataset.len(), "dataset written");
    }
    result
}

/// Temporary sibling of `path` used while the file is being written.
fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".partial");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use retail_synth::generate;

    #[test]
    fn test_header_row() {
        let dataset = generate(3, 42).unwrap();
        let mut buf = Vec::new();
        write_dataset(&dataset, &mut buf).unwrap();

        let content = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines[0],
            "date,daily_sales_revenue,marketing_spend,website_visitors,\
             avg_temperature_c,inventory_units,day_of_week,is_weekend"
        );
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_first_row_calendar_fields() {
        let dataset = generate(2, 42).unwrap();
        let mut buf = Vec::new();
        write_dataset(&dataset, &mut buf).unwrap();

        let content = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        // 2023-01-01 is a Sunday, 2023-01-02 a Monday.
        assert!(lines[1].starts_with("2023-01-01,"));
        assert!(lines[1].ends_with(",6,1"));
        assert!(lines[2].starts_with("2023-01-02,"));
        assert!(lines[2].ends_with(",0,0"));
    }

    #[test]
    fn test_row_values_match_records() {
        let dataset = generate(5, 9).unwrap();
        let mut buf = Vec::new();
        write_dataset(&dataset, &mut buf).unwrap();

        let content = String::from_utf8(buf).unwrap();
        for (line, record) in content.lines().skip(1).zip(dataset.records()) {
            let fields: Vec<&str> = line.split(',').collect();
            assert_eq!(fields.len(), 8);
            assert_eq!(fields[0], record.date.to_string());
            assert_eq!(fields[1].parse::<f64>().unwrap(), record.daily_sales_revenue);
            assert_eq!(fields[3].parse::<i64>().unwrap(), record.website_visitors);
            assert_eq!(fields[5].parse::<u64>().unwrap(), record.inventory_units);
        }
    }

    #[test]
    fn test_write_to_file_and_replace() {
        let temp_path = std::env::temp_dir().join("retail_synth_test_replace.csv");
        std::fs::write(&temp_path, "stale").unwrap();

        let dataset = generate(10, 42).unwrap();
        write_to_file(&dataset, &temp_path).unwrap();

        let content = std::fs::read_to_string(&temp_path).unwrap();
        assert_eq!(content.lines().count(), 11);
        assert!(!staging_path(&temp_path).exists());

        std::fs::remove_file(&temp_path).ok();
    }

    #[test]
    fn test_write_to_missing_directory_fails_cleanly() {
        let dir = std::env::temp_dir().join("retail_synth_no_such_dir");
        let path = dir.join("out.csv");
        let dataset = generate(3, 42).unwrap();

        let err = write_to_file(&dataset, &path).unwrap_err();
        match err {
            CliError::IoError { path: Some(p), .. } => assert!(p.contains("out.csv")),
            other => panic!("Expected IoError with path, got {other:?}"),
        }
        assert!(!path.exists());
    }

    #[test]
    fn test_write_to_dest_file() {
        let temp_path = std::env::temp_dir().join("retail_synth_test_dest.csv");
        let dest = OutputDest::File(temp_path.display().to_string());

        write_to_dest(&generate(4, 1).unwrap(), &dest).unwrap();
        assert!(temp_path.exists());

        std::fs::remove_file(&temp_path).ok();
    }

    #[test]
    fn test_staging_path_is_sibling() {
        let path = Path::new("/tmp/data/out.csv");
        assert_eq!(staging_path(path), Path::new("/tmp/data/out.csv.partial"));
    }
}

//! Result table models
//!
//! A result table is a read-only snapshot of one experiment CSV file:
//! one row per measured data size, one column per throughput metric.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::{KvPlotError, Result};

/// Name of the independent variable shared by every table
pub const DATA_SIZE_COLUMN: &str = "data_size_mb";

/// One row shape of a result table
pub trait ResultRow: DeserializeOwned + Clone {
    /// Column names that must be present in the header
    const COLUMNS: &'static [&'static str];

    /// Input data size in megabytes
    fn data_size_mb(&self) -> f64;
}

/// Row of the binary search vs. B-tree search comparison
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchComparisonRow {
    pub data_size_mb: f64,
    pub binary_search_throughput: f64,
    pub btree_search_throughput: f64,
}

impl ResultRow for SearchComparisonRow {
    const COLUMNS: &'static [&'static str] = &[
        DATA_SIZE_COLUMN,
        "binary_search_throughput",
        "btree_search_throughput",
    ];

    fn data_size_mb(&self) -> f64 {
        self.data_size_mb
    }
}

/// Row of the insert/get/scan throughput measurements
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OperationsRow {
    pub data_size_mb: f64,
    pub insert_throughput: f64,
    pub get_throughput: f64,
    pub scan_throughput: f64,
}

impl ResultRow for OperationsRow {
    const COLUMNS: &'static [&'static str] = &[
        DATA_SIZE_COLUMN,
        "insert_throughput",
        "get_throughput",
        "scan_throughput",
    ];

    fn data_size_mb(&self) -> f64 {
        self.data_size_mb
    }
}

/// Rows loaded from one CSV file, in file order
#[derive(Debug, Clone, PartialEq)]
pub struct ResultTable<R> {
    source: PathBuf,
    rows: Vec<R>,
}

impl<R: ResultRow> ResultTable<R> {
    /// Build a table directly from rows
    pub fn from_rows(source: impl Into<PathBuf>, rows: Vec<R>) -> Self {
        Self {
            source: source.into(),
            rows,
        }
    }

    /// Load a table from a CSV file with a header row
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            KvPlotError::IoError(std::io::Error::new(
                e.kind(),
                format!("{}: {}", path.display(), e),
            ))
        })?;
        let table = Self::from_reader(file, path)?;
        debug!(path = %path.display(), rows = table.len(), "loaded result table");
        Ok(table)
    }

    /// Parse a table from any reader; `source` is only used in messages
    pub fn from_reader<T: Read>(reader: T, source: &Path) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr
            .headers()
            .map_err(|e| {
                KvPlotError::MalformedRow(format!("{}: unreadable header: {}", source.display(), e))
            })?
            .clone();

        for column in R::COLUMNS {
            if !headers.iter().any(|h| h == *column) {
                return Err(KvPlotError::MissingColumn(format!(
                    "'{}' not found in {}",
                    column,
                    source.display()
                )));
            }
        }

        let mut rows = Vec::new();
        for record in rdr.deserialize::<R>() {
            let row = record.map_err(|e| {
                let line = e
                    .position()
                    .map(|p| p.line().to_string())
                    .unwrap_or_else(|| "?".to_string());
                KvPlotError::MalformedRow(format!("{} line {}: {}", source.display(), line, e))
            })?;
            rows.push(row);
        }

        Ok(Self {
            source: source.to_path_buf(),
            rows,
        })
    }

    /// Copy of the table keeping only the first row per distinct data size
    pub fn deduplicated(&self) -> Self {
        let mut seen = HashSet::new();
        let rows: Vec<R> = self
            .rows
            .iter()
            .filter(|row| seen.insert(size_key(row.data_size_mb())))
            .cloned()
            .collect();

        if rows.len() != self.rows.len() {
            debug!(
                path = %self.source.display(),
                dropped = self.rows.len() - rows.len(),
                "collapsed duplicate data sizes"
            );
        }

        Self {
            source: self.source.clone(),
            rows,
        }
    }

    /// Distinct data sizes in ascending order
    pub fn data_sizes(&self) -> Vec<f64> {
        let mut sizes: Vec<f64> = self
            .rows
            .iter()
            .map(|row| row.data_size_mb())
            .filter(|v| v.is_finite())
            .collect();
        sizes.sort_by(f64::total_cmp);
        sizes.dedup();
        sizes
    }

    /// `(data_size_mb, metric)` pairs in file order
    pub fn series<F>(&self, metric: F) -> Vec<(f64, f64)>
    where
        F: Fn(&R) -> f64,
    {
        self.rows
            .iter()
            .map(|row| (row.data_size_mb(), metric(row)))
            .collect()
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Hashable identity of a data size; folds -0.0 onto 0.0
fn size_key(value: f64) -> u64 {
    if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse<R: ResultRow>(csv: &str) -> Result<ResultTable<R>> {
        ResultTable::from_reader(csv.as_bytes(), Path::new("test.csv"))
    }

    #[test]
    fn test_load_search_table() {
        let table: ResultTable<SearchComparisonRow> = parse(
            "data_size_mb,binary_search_throughput,btree_search_throughput\n\
             100,5000,20000\n\
             200,4800,18000\n",
        )
        .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[1].btree_search_throughput, 18000.0);
        assert_eq!(table.data_sizes(), vec![100.0, 200.0]);
        assert_eq!(
            table.series(|r| r.binary_search_throughput),
            vec![(100.0, 5000.0), (200.0, 4800.0)]
        );
    }

    #[test]
    fn test_extra_columns_order_and_whitespace() {
        let table: ResultTable<OperationsRow> = parse(
            "scan_throughput, note ,data_size_mb,get_throughput,insert_throughput\n\
             900, warm , 100 ,80000,1200000\n",
        )
        .unwrap();

        assert_eq!(
            table.rows()[0],
            OperationsRow {
                data_size_mb: 100.0,
                insert_throughput: 1_200_000.0,
                get_throughput: 80_000.0,
                scan_throughput: 900.0,
            }
        );
    }

    #[test]
    fn test_missing_column() {
        let err = parse::<SearchComparisonRow>("data_size_mb,binary_search_throughput\n100,5000\n")
            .unwrap_err();
        match err {
            KvPlotError::MissingColumn(msg) => {
                assert!(msg.contains("btree_search_throughput"));
                assert!(msg.contains("test.csv"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_row_reports_line() {
        let err = parse::<SearchComparisonRow>(
            "data_size_mb,binary_search_throughput,btree_search_throughput\n\
             100,5000,20000\n\
             200,fast,18000\n",
        )
        .unwrap_err();
        match err {
            KvPlotError::MalformedRow(msg) => assert!(msg.contains("line 3"), "{msg}"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_header_only_is_empty() {
        let table: ResultTable<OperationsRow> =
            parse("data_size_mb,insert_throughput,get_throughput,scan_throughput\n").unwrap();
        assert!(table.is_empty());
        assert!(table.data_sizes().is_empty());
    }

    #[test]
    fn test_deduplicated_keeps_first_occurrence() {
        let table: ResultTable<OperationsRow> = parse(
            "data_size_mb,insert_throughput,get_throughput,scan_throughput\n\
             100,1000,2000,3000\n\
             200,1100,2100,3100\n\
             100,9999,9999,9999\n\
             300,1200,2200,3200\n\
             200,8888,8888,8888\n",
        )
        .unwrap();

        let deduped = table.deduplicated();
        assert_eq!(deduped.len(), 3);
        assert_eq!(deduped.len(), table.data_sizes().len());
        assert_eq!(
            deduped.series(|r| r.insert_throughput),
            vec![(100.0, 1000.0), (200.0, 1100.0), (300.0, 1200.0)]
        );
        // source table untouched
        assert_eq!(table.len(), 5);
    }

    #[test]
    fn test_data_sizes_sorted_and_distinct() {
        let table = ResultTable::from_rows(
            "mem",
            vec![
                SearchComparisonRow {
                    data_size_mb: 400.0,
                    binary_search_throughput: 1.0,
                    btree_search_throughput: 1.0,
                },
                SearchComparisonRow {
                    data_size_mb: 50.0,
                    binary_search_throughput: 1.0,
                    btree_search_throughput: 1.0,
                },
                SearchComparisonRow {
                    data_size_mb: 400.0,
                    binary_search_throughput: 2.0,
                    btree_search_throughput: 2.0,
                },
            ],
        );
        assert_eq!(table.data_sizes(), vec![50.0, 400.0]);
    }
}

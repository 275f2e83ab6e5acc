//! KVPLOT - Key-Value store benchmark plotter
//!
//! Reads the CSV result tables written by the search-comparison and
//! throughput-over-time experiments and renders them as PNG line charts.

use std::fmt;

// Public re-exports
pub mod config;
pub mod models;
pub mod render;
pub mod report;
pub mod util;

// Common error types
#[derive(Debug)]
pub enum KvPlotError {
    /// I/O operation failed
    IoError(std::io::Error),
    /// Configuration validation or parsing error
    ConfigError(String),
    /// A required column is absent from an input table
    MissingColumn(String),
    /// A row could not be parsed into numbers
    MalformedRow(String),
    /// Nothing left to plot
    EmptyTable(String),
    /// Chart drawing or image encoding failed
    RenderError(String),
    /// No usable font could be found or registered
    FontUnavailable(String),
}

impl fmt::Display for KvPlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KvPlotError::IoError(err) => write!(f, "I/O error: {}", err),
            KvPlotError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            KvPlotError::MissingColumn(msg) => write!(f, "Missing column: {}", msg),
            KvPlotError::MalformedRow(msg) => write!(f, "Malformed row: {}", msg),
            KvPlotError::EmptyTable(msg) => write!(f, "Empty table: {}", msg),
            KvPlotError::RenderError(msg) => write!(f, "Render error: {}", msg),
            KvPlotError::FontUnavailable(msg) => write!(f, "Font unavailable: {}", msg),
        }
    }
}

impl std::error::Error for KvPlotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            KvPlotError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for KvPlotError {
    fn from(err: std::io::Error) -> Self {
        KvPlotError::IoError(err)
    }
}

impl From<toml::de::Error> for KvPlotError {
    fn from(err: toml::de::Error) -> Self {
        KvPlotError::ConfigError(format!("TOML parsing error: {}", err))
    }
}

/// Result type alias for KVPLOT operations
pub type Result<T> = std::result::Result<T, KvPlotError>;

/// Error handling utilities
pub mod error {
    use super::KvPlotError;

    /// Short remediation hint for the failure classes a user can fix
    pub fn hint(error: &KvPlotError) -> Option<&'static str> {
        match error {
            KvPlotError::IoError(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                Some("Run the experiments first, or point --results-dir at their output.")
            }
            KvPlotError::IoError(io_err)
                if io_err.kind() == std::io::ErrorKind::PermissionDenied =>
            {
                Some("Check permissions on the results directory.")
            }
            KvPlotError::MissingColumn(_) => {
                Some("The CSV header does not match the experiment that produced it.")
            }
            KvPlotError::FontUnavailable(_) => {
                Some("The built-in font could not be loaded; set KVPLOT_FONT to a .ttf file.")
            }
            _ => None,
        }
    }
}

// Common types and constants
pub const APP_NAME: &str = "kvplot";
pub const CONFIG_FILE: &str = "kvplot.toml";
pub const FONT_ENV_VAR: &str = "KVPLOT_FONT";
pub const DEFAULT_RESULTS_DIR: &str = "results";
pub const SEARCH_RESULTS_FILE: &str = "experiment1_results.csv";
pub const OPERATIONS_RESULTS_FILE: &str = "experiment2_results.csv";
pub const SEARCH_CHART_FILE: &str = "experiment1_visualization.png";
pub const OPERATIONS_CHART_FILE: &str = "experiment2_visualization.png";
pub const COMBINED_CHART_FILE: &str = "experiment2_combined_visualization.png";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes() {
        let err = KvPlotError::MissingColumn("btree_search_throughput".into());
        assert_eq!(err.to_string(), "Missing column: btree_search_throughput");

        let err = KvPlotError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert!(err.to_string().starts_with("I/O error"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_hints() {
        let not_found = KvPlotError::IoError(std::io::Error::new(std::io::ErrorKind::NotFound, "x"));
        assert!(error::hint(&not_found).is_some());
        assert!(error::hint(&KvPlotError::FontUnavailable("x".into()))
            .unwrap()
            .contains(FONT_ENV_VAR));
        assert!(error::hint(&KvPlotError::RenderError("x".into())).is_none());
    }
}

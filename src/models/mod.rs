//! Data models module
//!
//! Contains the result tables read from the experiment CSV files.

pub mod table;

// Re-export commonly used types
pub use table::{OperationsRow, ResultRow, ResultTable, SearchComparisonRow};

//! Utility functions module
//!
//! Contains helper functions for tick label formatting.

pub mod units;

// Re-export commonly used functions
pub use units::{
    format_compact, format_data_size, format_magnitude, format_millions_or_thousands,
    format_thousands,
};

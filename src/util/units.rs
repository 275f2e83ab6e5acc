//! Units formatting utilities
//!
//! Tick label formatters for throughput axes (magnitude suffixes) and
//! data-size axes.

/// Format a throughput with a whole-number magnitude suffix
///
/// Used on log axes where ticks land on round values.
///
/// # Examples
/// ```
/// use kvplot::util::units::format_magnitude;
///
/// assert_eq!(format_magnitude(5_000.0), "5K");
/// assert_eq!(format_magnitude(20_000_000.0), "20M");
/// assert_eq!(format_magnitude(500.0), "500");
/// ```
pub fn format_magnitude(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{:.0}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.0}K", value / 1_000.0)
    } else if value == 0.0 {
        "0".to_string()
    } else {
        format!("{}", value.trunc() as i64)
    }
}

/// Format a throughput in millions with two decimals, else in thousands
///
/// # Examples
/// ```
/// use kvplot::util::units::format_millions_or_thousands;
///
/// assert_eq!(format_millions_or_thousands(1_250_000.0), "1.25M");
/// assert_eq!(format_millions_or_thousands(800_000.0), "800K");
/// ```
pub fn format_millions_or_thousands(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{:.2}M", value / 1_000_000.0)
    } else {
        format_thousands(value)
    }
}

/// Format a throughput in thousands
///
/// # Examples
/// ```
/// use kvplot::util::units::format_thousands;
///
/// assert_eq!(format_thousands(45_000.0), "45K");
/// assert_eq!(format_thousands(0.0), "0K");
/// ```
pub fn format_thousands(value: f64) -> String {
    format!("{:.0}K", value / 1_000.0)
}

/// Format a throughput with `M`/`K` suffixes, plain below a thousand
///
/// # Examples
/// ```
/// use kvplot::util::units::format_compact;
///
/// assert_eq!(format_compact(2_000_000.0), "2.00M");
/// assert_eq!(format_compact(3_000.0), "3K");
/// assert_eq!(format_compact(70.0), "70");
/// ```
pub fn format_compact(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{:.2}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.0}K", value / 1_000.0)
    } else {
        format!("{:.0}", value)
    }
}

/// Format a data size in megabytes as a whole number
///
/// # Examples
/// ```
/// use kvplot::util::units::format_data_size;
///
/// assert_eq!(format_data_size(128.0), "128");
/// assert_eq!(format_data_size(12.7), "12");
/// ```
pub fn format_data_size(mb: f64) -> String {
    format!("{}", mb.trunc() as i64)
}

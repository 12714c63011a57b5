use thiserror::Error;

/// Error types for parsing report inputs coming from the outside
/// (select widgets, CLI arguments, configuration files).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// Report type key is not one of the known report types
    #[error("Unknown report type: {0}")]
    UnknownReportType(String),

    /// Chart type key is not one of line, bar or pie
    #[error("Unknown chart type: {0}")]
    UnknownChartType(String),

    /// Grouping key is not one of the known period buckets
    #[error("Unknown group by option: {0}")]
    UnknownGroupBy(String),

    /// Date range preset key is not known
    #[error("Unknown date range preset: {0}")]
    UnknownPreset(String),

    /// Date could not be parsed
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

/// Type alias for Result with ReportError
pub type Result<T> = std::result::Result<T, ReportError>;

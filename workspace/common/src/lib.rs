//! Common report types shared between the CLI, the compute crate and the frontend.
//! These structs describe the report configuration, the raw rows the report
//! source returns and the chart payload handed to the chart library, so every
//! consumer works with the same shapes.

pub mod chart;
pub mod config;
pub mod error;
pub mod format;
pub mod report;
pub mod rows;

pub use chart::{
    AxisOptions, ChartData, ChartOptions, Dataset, LegendPosition, Scales, TooltipFormatter,
};
pub use config::{DATE_FORMAT, DateRange, ReportConfig, ReportConfigOverrides, parse_date};
pub use error::{ReportError, Result};
pub use report::{
    ChartType, GroupBy, ReportType, SelectOption, chart_type_options, group_by_options,
    report_type_options,
};
pub use rows::ReportRow;

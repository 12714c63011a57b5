use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{ReportError, Result};
use crate::report::{ChartType, GroupBy, ReportType};

/// Date format of date inputs and preset output, e.g. `2026-10-18`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses the value of a date input.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| ReportError::InvalidDate(value.to_string()))
}

/// Inclusive date window a report covers.
///
/// Nothing enforces `start_date <= end_date`; date pickers may produce an
/// inverted range and it is carried along as-is. Use [`DateRange::is_inverted`]
/// to detect it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl DateRange {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    pub fn is_inverted(&self) -> bool {
        self.start_date > self.end_date
    }
}

/// Full configuration of a report as edited in the builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    pub report_type: ReportType,
    pub date_range: DateRange,
    pub group_by: GroupBy,
    pub show_chart: bool,
    pub chart_type: ChartType,
}

impl ReportConfig {
    /// Default configuration as of `today`: a sales report over the last
    /// calendar month, grouped by month, shown as a line chart.
    pub fn with_defaults(today: NaiveDate) -> Self {
        let start_date = today.checked_sub_months(Months::new(1)).unwrap_or(today);

        Self {
            report_type: ReportType::default(),
            date_range: DateRange::new(start_date, today),
            group_by: GroupBy::default(),
            show_chart: true,
            chart_type: ChartType::default(),
        }
    }

    /// Defaults as of `today` with the caller-supplied overrides merged on top.
    pub fn with_overrides(today: NaiveDate, overrides: &ReportConfigOverrides) -> Self {
        overrides.apply(Self::with_defaults(today))
    }
}

/// Partial configuration supplied by the host when the builder is created.
///
/// A supplied `date_range` replaces the whole default range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfigOverrides {
    pub report_type: Option<ReportType>,
    pub date_range: Option<DateRange>,
    pub group_by: Option<GroupBy>,
    pub show_chart: Option<bool>,
    pub chart_type: Option<ChartType>,
}

impl ReportConfigOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply(&self, mut config: ReportConfig) -> ReportConfig {
        if let Some(report_type) = self.report_type {
            config.report_type = report_type;
        }
        if let Some(date_range) = self.date_range {
            config.date_range = date_range;
        }
        if let Some(group_by) = self.group_by {
            config.group_by = group_by;
        }
        if let Some(show_chart) = self.show_chart {
            config.show_chart = show_chart;
        }
        if let Some(chart_type) = self.chart_type {
            config.chart_type = chart_type;
        }
        config
    }
}

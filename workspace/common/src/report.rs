use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ReportError;

/// Kind of CRM report the user can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    #[default]
    Sales,
    Leads,
    Opportunities,
    Activities,
    Contacts,
}

impl ReportType {
    pub const ALL: [ReportType; 5] = [
        ReportType::Sales,
        ReportType::Leads,
        ReportType::Opportunities,
        ReportType::Activities,
        ReportType::Contacts,
    ];

    /// Stable key used in widgets, CLI arguments and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportType::Sales => "sales",
            ReportType::Leads => "leads",
            ReportType::Opportunities => "opportunities",
            ReportType::Activities => "activities",
            ReportType::Contacts => "contacts",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportType::Sales => "Sales",
            ReportType::Leads => "Leads",
            ReportType::Opportunities => "Opportunities",
            ReportType::Activities => "Activities",
            ReportType::Contacts => "Contacts",
        }
    }

    /// Whether values of this report are money amounts.
    pub fn is_financial(&self) -> bool {
        matches!(self, ReportType::Sales | ReportType::Opportunities)
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportType {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReportType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ReportError::UnknownReportType(s.to_string()))
    }
}

/// Chart kinds the chart component can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    #[default]
    Line,
    Bar,
    Pie,
}

impl ChartType {
    pub const ALL: [ChartType; 3] = [ChartType::Line, ChartType::Bar, ChartType::Pie];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartType::Line => "line",
            ChartType::Bar => "bar",
            ChartType::Pie => "pie",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChartType::Line => "Line Chart",
            ChartType::Bar => "Bar Chart",
            ChartType::Pie => "Pie Chart",
        }
    }

    /// Line and bar charts have cartesian axes, pie charts don't.
    pub fn has_axes(&self) -> bool {
        !matches!(self, ChartType::Pie)
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartType {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ReportError::UnknownChartType(s.to_string()))
    }
}

/// Time bucket the upstream source aggregates rows by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GroupBy {
    Day,
    Week,
    #[default]
    Month,
    Quarter,
    Year,
}

impl GroupBy {
    pub const ALL: [GroupBy; 5] = [
        GroupBy::Day,
        GroupBy::Week,
        GroupBy::Month,
        GroupBy::Quarter,
        GroupBy::Year,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GroupBy::Day => "day",
            GroupBy::Week => "week",
            GroupBy::Month => "month",
            GroupBy::Quarter => "quarter",
            GroupBy::Year => "year",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GroupBy::Day => "Day",
            GroupBy::Week => "Week",
            GroupBy::Month => "Month",
            GroupBy::Quarter => "Quarter",
            GroupBy::Year => "Year",
        }
    }
}

impl fmt::Display for GroupBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GroupBy {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GroupBy::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| ReportError::UnknownGroupBy(s.to_string()))
    }
}

/// One entry of a select widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub key: &'static str,
    pub text: &'static str,
}

impl SelectOption {
    pub const fn new(key: &'static str, text: &'static str) -> Self {
        Self { key, text }
    }
}

pub fn report_type_options() -> Vec<SelectOption> {
    ReportType::ALL
        .iter()
        .map(|t| SelectOption::new(t.as_str(), t.label()))
        .collect()
}

pub fn chart_type_options() -> Vec<SelectOption> {
    ChartType::ALL
        .iter()
        .map(|t| SelectOption::new(t.as_str(), t.label()))
        .collect()
}

pub fn group_by_options() -> Vec<SelectOption> {
    GroupBy::ALL
        .iter()
        .map(|g| SelectOption::new(g.as_str(), g.label()))
        .collect()
}

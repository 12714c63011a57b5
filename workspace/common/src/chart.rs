//! Chart payload shapes.
//!
//! The field names serialize in the vocabulary browser chart libraries use
//! (`labels`/`datasets`, `borderColor`, `beginAtZero`), so a payload printed
//! by the CLI can be fed to a chart library unchanged.

use serde::{Deserialize, Serialize};

use crate::format::{format_currency, format_plain};
use crate::report::ReportType;

/// Series labels that mark a money-valued series.
pub const CURRENCY_LABEL_MARKERS: [&str; 3] = ["Revenue", "Value", "Deal"];

/// Labels plus one or more numeric series.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartData {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// One named numeric series with its styling.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    /// A single colour for line/bar series, one colour per slice for pie series
    pub background_color: Vec<String>,
    pub fill: bool,
    pub tension: f64,
}

/// Where the legend sits. Report charts always put it above the plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    #[default]
    Top,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisOptions {
    pub begin_at_zero: bool,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scales {
    pub x: AxisOptions,
    pub y: AxisOptions,
}

/// Display configuration that goes with a [`ChartData`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub legend_position: LegendPosition,
    pub tooltip: TooltipFormatter,
    /// Absent for charts without cartesian axes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scales: Option<Scales>,
}

/// Turns a hovered data point into its tooltip text.
///
/// Money is detected from the report type and, for cartesian charts, from
/// the series label containing one of [`CURRENCY_LABEL_MARKERS`]. Pie slices
/// are keyed on the report type alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipFormatter {
    pub report_type: ReportType,
    pub pie: bool,
}

impl TooltipFormatter {
    pub fn new(report_type: ReportType, pie: bool) -> Self {
        Self { report_type, pie }
    }

    pub fn is_currency(&self, series_label: &str) -> bool {
        if !self.report_type.is_financial() {
            return false;
        }
        self.pie
            || CURRENCY_LABEL_MARKERS
                .iter()
                .any(|marker| series_label.contains(marker))
    }

    pub fn format_value(&self, series_label: &str, value: f64) -> String {
        if self.is_currency(series_label) {
            format_currency(value)
        } else {
            format_plain(value)
        }
    }

    pub fn format(&self, series_label: &str, value: f64) -> String {
        let value = self.format_value(series_label, value);
        if series_label.is_empty() {
            value
        } else {
            format!("{}: {}", series_label, value)
        }
    }
}

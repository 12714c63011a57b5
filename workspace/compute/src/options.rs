use common::format::capitalize;
use common::{
    AxisOptions, ChartOptions, ChartType, LegendPosition, ReportType, Scales, TooltipFormatter,
};

pub const X_AXIS_TITLE: &str = "Period";

pub fn y_axis_title(report_type: ReportType) -> &'static str {
    match report_type {
        ReportType::Sales => "Revenue ($)",
        ReportType::Opportunities => "Value ($)",
        ReportType::Leads | ReportType::Contacts => "Count",
        ReportType::Activities => "Activity Count",
    }
}

/// Display options for a chart: legend, tooltip formatting and, for
/// cartesian charts, titled axes starting at zero.
pub fn resolve_options(report_type: ReportType, chart_type: ChartType) -> ChartOptions {
    let scales = chart_type.has_axes().then(|| Scales {
        x: AxisOptions {
            begin_at_zero: false,
            title: X_AXIS_TITLE.to_string(),
        },
        y: AxisOptions {
            begin_at_zero: true,
            title: y_axis_title(report_type).to_string(),
        },
    });

    ChartOptions {
        responsive: true,
        maintain_aspect_ratio: false,
        legend_position: LegendPosition::Top,
        tooltip: TooltipFormatter::new(report_type, !chart_type.has_axes()),
        scales,
    }
}

/// Heading shown above a chart, e.g. `Sales Bar Chart`.
///
/// Takes raw keys so a chart kind that cannot be drawn still gets a heading.
pub fn chart_title(report_key: &str, chart_key: &str) -> String {
    format!("{} {} Chart", capitalize(report_key), capitalize(chart_key))
}

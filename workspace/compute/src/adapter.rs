use common::{ChartData, Dataset, ReportRow, ReportType};
use tracing::{debug, instrument};

/// Colours assigned to series and pie slices in order.
pub const PALETTE: [&str; 8] = [
    "#0078d4", "#107c10", "#d83b01", "#5c2d91", "#008272", "#ffb900", "#e81123", "#00bcf2",
];

/// Line smoothing applied to every series.
const LINE_TENSION: f64 = 0.3;

/// Numeric field of a [`ReportRow`] a series is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowField {
    Revenue,
    DealValue,
    Count,
    Converted,
}

impl RowField {
    pub fn value(&self, row: &ReportRow) -> f64 {
        let value = match self {
            RowField::Revenue => row.revenue,
            RowField::DealValue => row.deal_value,
            RowField::Count => row.count,
            RowField::Converted => row.converted,
        };
        value.unwrap_or(0.0)
    }
}

/// A named series drawn from one row field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesSpec {
    pub label: &'static str,
    pub field: RowField,
}

impl SeriesSpec {
    const fn new(label: &'static str, field: RowField) -> Self {
        Self { label, field }
    }
}

const SALES_SERIES: [SeriesSpec; 1] = [SeriesSpec::new("Revenue", RowField::Revenue)];
const OPPORTUNITY_SERIES: [SeriesSpec; 2] = [
    SeriesSpec::new("Deal Value", RowField::DealValue),
    SeriesSpec::new("Opportunity Count", RowField::Count),
];
const LEAD_SERIES: [SeriesSpec; 2] = [
    SeriesSpec::new("Lead Count", RowField::Count),
    SeriesSpec::new("Converted Leads", RowField::Converted),
];
const CONTACT_SERIES: [SeriesSpec; 1] = [SeriesSpec::new("New Contacts", RowField::Count)];
const ACTIVITY_SERIES: [SeriesSpec; 1] = [SeriesSpec::new("Activity Count", RowField::Count)];

/// Series plotted on line and bar charts for a report type.
pub fn series_specs(report_type: ReportType) -> &'static [SeriesSpec] {
    match report_type {
        ReportType::Sales => &SALES_SERIES,
        ReportType::Opportunities => &OPPORTUNITY_SERIES,
        ReportType::Leads => &LEAD_SERIES,
        ReportType::Contacts => &CONTACT_SERIES,
        ReportType::Activities => &ACTIVITY_SERIES,
    }
}

/// Metric summed per category on pie charts.
pub fn pie_metric(report_type: ReportType) -> SeriesSpec {
    series_specs(report_type)[0]
}

fn palette_color(index: usize) -> String {
    PALETTE[index % PALETTE.len()].to_string()
}

/// Shapes rows into period labels plus one dataset per series of the report type.
///
/// Returns `None` when there are no rows, meaning no chart should be drawn.
#[instrument(skip(rows), fields(rows = rows.len()))]
pub fn build_series_data(report_type: ReportType, rows: &[ReportRow]) -> Option<ChartData> {
    if rows.is_empty() {
        return None;
    }

    let labels = rows.iter().map(|row| row.period.clone()).collect();
    let datasets = series_specs(report_type)
        .iter()
        .enumerate()
        .map(|(i, spec)| {
            let color = palette_color(i);
            Dataset {
                label: spec.label.to_string(),
                data: rows.iter().map(|row| spec.field.value(row)).collect(),
                border_color: Some(color.clone()),
                background_color: vec![color],
                fill: false,
                tension: LINE_TENSION,
            }
        })
        .collect();

    Some(ChartData { labels, datasets })
}

/// Sums the report's primary metric per row category into a single series.
///
/// Categories keep the order they are first seen in. Rows without a category
/// are left out, so data without categories produces no labels.
#[instrument(skip(rows), fields(rows = rows.len()))]
pub fn build_pie_data(report_type: ReportType, rows: &[ReportRow]) -> Option<ChartData> {
    if rows.is_empty() {
        return None;
    }

    let metric = pie_metric(report_type);
    let mut totals: Vec<(String, f64)> = Vec::new();
    for row in rows {
        let Some(category) = row.category.as_deref() else {
            continue;
        };
        let value = metric.field.value(row);
        match totals.iter_mut().find(|(name, _)| name == category) {
            Some((_, total)) => *total += value,
            None => totals.push((category.to_string(), value)),
        }
    }

    if totals.is_empty() {
        debug!("No categorised rows for pie chart");
    }

    let (labels, data): (Vec<String>, Vec<f64>) = totals.into_iter().unzip();
    let background_color = (0..labels.len()).map(palette_color).collect();

    Some(ChartData {
        labels,
        datasets: vec![Dataset {
            label: metric.label.to_string(),
            data,
            border_color: None,
            background_color,
            fill: false,
            tension: 0.0,
        }],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{opportunity_rows, pipeline_rows, sales_rows};

    #[test]
    fn test_empty_rows_produce_no_chart() {
        for report_type in ReportType::ALL {
            assert_eq!(build_series_data(report_type, &[]), None);
            assert_eq!(build_pie_data(report_type, &[]), None);
        }
    }

    #[test]
    fn test_sales_series_uses_revenue() {
        let data = build_series_data(ReportType::Sales, &sales_rows()).unwrap();

        assert_eq!(data.labels, vec!["2026-07", "2026-08", "2026-09"]);
        assert_eq!(data.datasets.len(), 1);
        assert_eq!(data.datasets[0].label, "Revenue");
        assert_eq!(data.datasets[0].data, vec![12000.0, 15250.5, 9800.0]);
        assert_eq!(data.datasets[0].border_color.as_deref(), Some(PALETTE[0]));
    }

    #[test]
    fn test_opportunity_series_have_value_and_count() {
        let data = build_series_data(ReportType::Opportunities, &opportunity_rows()).unwrap();

        let labels: Vec<_> = data.datasets.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, vec!["Deal Value", "Opportunity Count"]);
        assert_eq!(data.datasets[0].data, vec![45000.0, 30000.0]);
        assert_eq!(data.datasets[1].data, vec![6.0, 4.0]);
        assert_eq!(data.datasets[1].background_color, vec![PALETTE[1].to_string()]);
    }

    #[test]
    fn test_missing_fields_chart_as_zero() {
        let rows = vec![ReportRow::new("2026-W01").with_count(3.0), ReportRow::new("2026-W02")];
        let data = build_series_data(ReportType::Leads, &rows).unwrap();

        assert_eq!(data.datasets[0].data, vec![3.0, 0.0]);
        assert_eq!(data.datasets[1].label, "Converted Leads");
        assert_eq!(data.datasets[1].data, vec![0.0, 0.0]);
    }

    #[test]
    fn test_contacts_and_activities_plot_counts() {
        let rows = vec![ReportRow::new("2026-10").with_count(17.0)];
        let contacts = build_series_data(ReportType::Contacts, &rows).unwrap();
        let activities = build_series_data(ReportType::Activities, &rows).unwrap();

        assert_eq!(contacts.datasets[0].label, "New Contacts");
        assert_eq!(activities.datasets[0].label, "Activity Count");
        assert_eq!(activities.datasets[0].data, vec![17.0]);
    }

    #[test]
    fn test_pie_sums_per_category_in_first_seen_order() {
        let data = build_pie_data(ReportType::Opportunities, &pipeline_rows()).unwrap();

        assert_eq!(data.labels, vec!["Prospecting", "Negotiation", "Closed Won"]);
        assert_eq!(data.datasets.len(), 1);
        assert_eq!(data.datasets[0].label, "Deal Value");
        assert_eq!(data.datasets[0].data, vec![25000.0, 18000.0, 40000.0]);
        assert_eq!(data.datasets[0].background_color.len(), 3);
    }

    #[test]
    fn test_pie_without_categories_has_no_labels() {
        let data = build_pie_data(ReportType::Sales, &sales_rows()).unwrap();
        assert!(data.is_empty());
        assert!(data.datasets[0].data.is_empty());
    }

    #[test]
    fn test_building_twice_gives_identical_output() {
        let rows = opportunity_rows();
        assert_eq!(
            build_series_data(ReportType::Opportunities, &rows),
            build_series_data(ReportType::Opportunities, &rows)
        );
    }
}

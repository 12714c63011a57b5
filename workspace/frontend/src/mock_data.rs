//! Demo report rows standing in for the reporting backend.
//!
//! Rows are derived from the submitted configuration only, so the same
//! configuration always yields the same data.

use common::{ReportConfig, ReportRow, ReportType};
use compute::grouping::{period_label, period_starts};
use gloo_timers::future::TimeoutFuture;

/// Simulated request latency in milliseconds
pub const DEMO_LATENCY_MS: u32 = 400;

/// Upper bound on generated periods, a year of daily buckets
pub const MAX_DEMO_PERIODS: usize = 366;

fn categories(report_type: ReportType) -> &'static [&'static str] {
    match report_type {
        ReportType::Sales => &["Enterprise", "Mid-Market", "Small Business"],
        ReportType::Leads => &["New", "Contacted", "Qualified", "Unqualified"],
        ReportType::Opportunities => &["Prospecting", "Qualification", "Proposal", "Negotiation", "Closed Won"],
        ReportType::Activities => &["Call", "Email", "Meeting", "Task"],
        ReportType::Contacts => &["Website", "Referral", "Event", "Import"],
    }
}

/// Smooth, repeatable variation around 1.0 for the n-th period.
fn wave(index: usize, phase: f64) -> f64 {
    1.0 + 0.25 * (index as f64 * 0.9 + phase).sin()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn demo_row(report_type: ReportType, index: usize, period: String) -> ReportRow {
    let names = categories(report_type);
    let row = ReportRow::new(period).with_category(names[index % names.len()]);

    match report_type {
        ReportType::Sales => row.with_revenue(round2(12_500.0 * wave(index, 0.0))),
        ReportType::Opportunities => row
            .with_deal_value(round2(48_000.0 * wave(index, 1.3)))
            .with_count((9.0 * wave(index, 2.1)).round()),
        ReportType::Leads => {
            let count = (60.0 * wave(index, 0.7)).round();
            row.with_count(count)
                .with_converted((count * 0.18 * wave(index, 2.9)).round())
        }
        ReportType::Contacts => row.with_count((35.0 * wave(index, 1.9)).round()),
        ReportType::Activities => row.with_count((120.0 * wave(index, 0.4)).round()),
    }
}

/// One row per period of the configured range and grouping.
pub fn demo_rows(config: &ReportConfig) -> Vec<ReportRow> {
    period_starts(config.group_by, &config.date_range)
        .into_iter()
        .take(MAX_DEMO_PERIODS)
        .enumerate()
        .map(|(index, start)| {
            demo_row(config.report_type, index, period_label(config.group_by, start))
        })
        .collect()
}

/// Loads demo rows after a short simulated delay.
pub async fn load_report_rows(config: ReportConfig) -> Result<Vec<ReportRow>, String> {
    log::debug!("Loading demo rows for {:?}", config);
    TimeoutFuture::new(DEMO_LATENCY_MS).await;

    let rows = demo_rows(&config);
    log::info!("Loaded {} demo rows for the {} report", rows.len(), config.report_type);
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use common::{DateRange, GroupBy};

    fn config(report_type: ReportType, group_by: GroupBy, start: (i32, u32, u32), end: (i32, u32, u32)) -> ReportConfig {
        let mut config = ReportConfig::with_defaults(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap());
        config.report_type = report_type;
        config.group_by = group_by;
        config.date_range = DateRange::new(
            NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
        );
        config
    }

    #[test]
    fn test_one_row_per_period() {
        let rows = demo_rows(&config(ReportType::Sales, GroupBy::Quarter, (2026, 1, 1), (2026, 10, 18)));
        let periods: Vec<&str> = rows.iter().map(|row| row.period.as_str()).collect();
        assert_eq!(periods, vec!["2026-Q1", "2026-Q2", "2026-Q3", "2026-Q4"]);
        assert!(rows.iter().all(|row| row.revenue.is_some()));
    }

    #[test]
    fn test_rows_are_repeatable() {
        let config = config(ReportType::Leads, GroupBy::Week, (2026, 9, 1), (2026, 10, 18));
        assert_eq!(demo_rows(&config), demo_rows(&config));
    }

    #[test]
    fn test_rows_carry_fields_of_report_type() {
        let rows = demo_rows(&config(ReportType::Opportunities, GroupBy::Month, (2026, 7, 1), (2026, 9, 30)));
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|row| row.deal_value.is_some() && row.count.is_some()));
        assert_eq!(rows[0].category.as_deref(), Some("Prospecting"));
    }

    #[test]
    fn test_inverted_range_has_no_rows() {
        let rows = demo_rows(&config(ReportType::Contacts, GroupBy::Day, (2026, 10, 18), (2026, 10, 1)));
        assert!(rows.is_empty());
    }

    #[test]
    fn test_daily_rows_are_capped() {
        let rows = demo_rows(&config(ReportType::Activities, GroupBy::Day, (2020, 1, 1), (2026, 1, 1)));
        assert_eq!(rows.len(), MAX_DEMO_PERIODS);
    }
}

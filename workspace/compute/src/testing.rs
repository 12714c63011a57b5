//! Row fixtures shared by the compute tests.

use common::ReportRow;

/// Three months of closed revenue without categories.
pub fn sales_rows() -> Vec<ReportRow> {
    vec![
        ReportRow::new("2026-07").with_revenue(12000.0),
        ReportRow::new("2026-08").with_revenue(15250.5),
        ReportRow::new("2026-09").with_revenue(9800.0),
    ]
}

/// Two quarters of opportunity value and counts.
pub fn opportunity_rows() -> Vec<ReportRow> {
    vec![
        ReportRow::new("2026-Q2").with_deal_value(45000.0).with_count(6.0),
        ReportRow::new("2026-Q3").with_deal_value(30000.0).with_count(4.0),
    ]
}

/// Opportunity rows split by pipeline stage, one stage repeated.
pub fn pipeline_rows() -> Vec<ReportRow> {
    vec![
        ReportRow::new("2026-Q3")
            .with_category("Prospecting")
            .with_deal_value(10000.0)
            .with_count(3.0),
        ReportRow::new("2026-Q3")
            .with_category("Negotiation")
            .with_deal_value(18000.0)
            .with_count(2.0),
        ReportRow::new("2026-Q4")
            .with_category("Prospecting")
            .with_deal_value(15000.0)
            .with_count(5.0),
        ReportRow::new("2026-Q4")
            .with_category("Closed Won")
            .with_deal_value(40000.0)
            .with_count(1.0),
    ]
}

/// Lead rows split by status.
pub fn lead_rows() -> Vec<ReportRow> {
    vec![
        ReportRow::new("2026-09")
            .with_category("New")
            .with_count(40.0)
            .with_converted(5.0),
        ReportRow::new("2026-10")
            .with_category("Qualified")
            .with_count(12.0)
            .with_converted(7.0),
    ]
}

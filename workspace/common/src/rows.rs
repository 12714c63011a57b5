use serde::{Deserialize, Serialize};

/// One row returned by the report source.
///
/// Rows are already aggregated by period and ordered by the source. Which
/// numeric fields are filled depends on the report type; a missing field is
/// charted as zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportRow {
    /// Grouping period identifier, e.g. `2026-10` or `2026-Q4`
    pub period: String,
    /// Status, stage or source the row belongs to
    pub category: Option<String>,
    /// Closed revenue
    pub revenue: Option<f64>,
    /// Pipeline value of deals
    #[serde(alias = "dealValue")]
    pub deal_value: Option<f64>,
    /// Number of leads, opportunities, activities or contacts
    pub count: Option<f64>,
    /// Leads converted into opportunities
    pub converted: Option<f64>,
}

impl ReportRow {
    pub fn new(period: impl Into<String>) -> Self {
        Self {
            period: period.into(),
            ..Default::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_revenue(mut self, revenue: f64) -> Self {
        self.revenue = Some(revenue);
        self
    }

    pub fn with_deal_value(mut self, deal_value: f64) -> Self {
        self.deal_value = Some(deal_value);
        self
    }

    pub fn with_count(mut self, count: f64) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_converted(mut self, converted: f64) -> Self {
        self.converted = Some(converted);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_deserializes_with_missing_fields() {
        let row: ReportRow =
            serde_json::from_str(r#"{"period":"2026-10","revenue":1200.5}"#).unwrap();
        assert_eq!(row, ReportRow::new("2026-10").with_revenue(1200.5));
    }

    #[test]
    fn test_row_accepts_camel_case_deal_value() {
        let row: ReportRow =
            serde_json::from_str(r#"{"period":"2026-Q3","category":"Negotiation","dealValue":900}"#)
                .unwrap();
        assert_eq!(row.deal_value, Some(900.0));
        assert_eq!(row.category.as_deref(), Some("Negotiation"));
    }
}

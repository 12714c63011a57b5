use anyhow::Result;
use common::{SelectOption, chart_type_options, group_by_options, report_type_options};
use compute::date_range_options;
use serde::Serialize;

/// Option lists the report builder populates its selectors from.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuilderOptions {
    pub report_types: Vec<SelectOption>,
    pub group_by: Vec<SelectOption>,
    pub date_ranges: Vec<SelectOption>,
    pub chart_types: Vec<SelectOption>,
}

impl BuilderOptions {
    pub fn collect() -> Self {
        Self {
            report_types: report_type_options(),
            group_by: group_by_options(),
            date_ranges: date_range_options(),
            chart_types: chart_type_options(),
        }
    }
}

pub fn print_options() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&BuilderOptions::collect())?);
    Ok(())
}

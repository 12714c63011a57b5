use chrono::{Local, NaiveDate};
use common::{ChartType, GroupBy, ReportConfig, ReportConfigOverrides, ReportType};
use tracing::{debug, warn};

use crate::preset::DateRangePreset;

/// A single top-level configuration field with its new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    ReportType(ReportType),
    GroupBy(GroupBy),
    ShowChart(bool),
    ChartType(ChartType),
    DateRange(common::DateRange),
}

/// Which end of the date range to replace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateBound {
    Start,
    End,
}

/// Owns "today" and turns user edits into new report configurations.
///
/// All transitions are pure: they take the current configuration and return
/// a new one, the caller keeps ownership of the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigResolver {
    today: NaiveDate,
}

impl Default for ConfigResolver {
    fn default() -> Self {
        Self::new_with_today(Local::now().date_naive())
    }
}

impl ConfigResolver {
    pub fn new_with_today(today: NaiveDate) -> Self {
        Self { today }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Default configuration with the host's overrides merged on top.
    pub fn initial_config(&self, overrides: &ReportConfigOverrides) -> ReportConfig {
        ReportConfig::with_overrides(self.today, overrides)
    }

    pub fn set_field(&self, config: &ReportConfig, field: ConfigField) -> ReportConfig {
        debug!(?field, "Updating report config field");
        let mut next = config.clone();
        match field {
            ConfigField::ReportType(report_type) => next.report_type = report_type,
            ConfigField::GroupBy(group_by) => next.group_by = group_by,
            ConfigField::ShowChart(show_chart) => next.show_chart = show_chart,
            ConfigField::ChartType(chart_type) => next.chart_type = chart_type,
            ConfigField::DateRange(date_range) => next.date_range = date_range,
        }
        next
    }

    /// Replaces one end of the range. Ordering of the two ends is not checked.
    pub fn set_date_range_field(
        &self,
        config: &ReportConfig,
        bound: DateBound,
        date: NaiveDate,
    ) -> ReportConfig {
        let mut next = config.clone();
        match bound {
            DateBound::Start => next.date_range.start_date = date,
            DateBound::End => next.date_range.end_date = date,
        }
        next
    }

    pub fn apply_preset(&self, config: &ReportConfig, preset: DateRangePreset) -> ReportConfig {
        match preset.resolve(self.today) {
            Some(date_range) => {
                debug!(%preset, ?date_range, "Applied date range preset");
                let mut next = config.clone();
                next.date_range = date_range;
                next
            }
            None => config.clone(),
        }
    }

    /// Like [`ConfigResolver::apply_preset`] for a raw selector key; unknown keys change nothing.
    pub fn apply_preset_key(&self, config: &ReportConfig, key: &str) -> ReportConfig {
        match key.parse::<DateRangePreset>() {
            Ok(preset) => self.apply_preset(config, preset),
            Err(err) => {
                debug!(%err, "Ignoring date range preset");
                config.clone()
            }
        }
    }

    /// Hands a snapshot of `config` to `on_generate` unless a report is
    /// already loading. Returns whether the request was dispatched.
    pub fn submit<F>(&self, config: &ReportConfig, is_loading: bool, on_generate: F) -> bool
    where
        F: FnOnce(ReportConfig),
    {
        if is_loading {
            debug!("Report already loading, ignoring submit");
            return false;
        }

        if config.date_range.is_inverted() {
            warn!(
                start_date = %config.date_range.start_date,
                end_date = %config.date_range.end_date,
                "Submitting report with start date after end date"
            );
        }

        on_generate(config.clone());
        true
    }
}

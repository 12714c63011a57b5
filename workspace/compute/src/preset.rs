use chrono::{Datelike, Months, NaiveDate};
use common::{DateRange, ReportError, SelectOption};
use std::fmt;
use std::str::FromStr;

/// Named shorthand for a date range relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateRangePreset {
    ThisMonth,
    LastMonth,
    ThisQuarter,
    LastQuarter,
    YearToDate,
    LastYear,
    /// Leaves the range alone so the dates can be picked by hand.
    Custom,
}

impl DateRangePreset {
    /// All presets in the order the selector shows them.
    pub const ALL: [DateRangePreset; 7] = [
        DateRangePreset::ThisMonth,
        DateRangePreset::LastMonth,
        DateRangePreset::ThisQuarter,
        DateRangePreset::LastQuarter,
        DateRangePreset::YearToDate,
        DateRangePreset::LastYear,
        DateRangePreset::Custom,
    ];

    /// Preset the selector starts on.
    pub const INITIAL: DateRangePreset = DateRangePreset::LastMonth;

    pub fn key(&self) -> &'static str {
        match self {
            DateRangePreset::ThisMonth => "thisMonth",
            DateRangePreset::LastMonth => "lastMonth",
            DateRangePreset::ThisQuarter => "thisQuarter",
            DateRangePreset::LastQuarter => "lastQuarter",
            DateRangePreset::YearToDate => "ytd",
            DateRangePreset::LastYear => "lastYear",
            DateRangePreset::Custom => "custom",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DateRangePreset::ThisMonth => "This Month",
            DateRangePreset::LastMonth => "Last Month",
            DateRangePreset::ThisQuarter => "This Quarter",
            DateRangePreset::LastQuarter => "Last Quarter",
            DateRangePreset::YearToDate => "Year to Date",
            DateRangePreset::LastYear => "Last Year",
            DateRangePreset::Custom => "Custom Range",
        }
    }

    /// Resolves the preset as of `today`.
    ///
    /// Every preset ends on `today` except `LastYear`, which covers the whole
    /// previous calendar year. `Custom` resolves to `None`.
    pub fn resolve(&self, today: NaiveDate) -> Option<DateRange> {
        let year = today.year();
        let month0 = today.month0();

        let start_date = match self {
            DateRangePreset::ThisMonth => first_of_month(year, month0)?,
            DateRangePreset::LastMonth => {
                first_of_month(year, month0)?.checked_sub_months(Months::new(1))?
            }
            DateRangePreset::ThisQuarter => first_of_month(year, quarter_index(month0) * 3)?,
            DateRangePreset::LastQuarter => match quarter_index(month0) {
                0 => first_of_month(year - 1, 9)?,
                quarter => first_of_month(year, (quarter - 1) * 3)?,
            },
            DateRangePreset::YearToDate => first_of_month(year, 0)?,
            DateRangePreset::LastYear => {
                return Some(DateRange::new(
                    first_of_month(year - 1, 0)?,
                    NaiveDate::from_ymd_opt(year - 1, 12, 31)?,
                ));
            }
            DateRangePreset::Custom => return None,
        };

        Some(DateRange::new(start_date, today))
    }
}

/// Zero-based quarter of a zero-based month.
fn quarter_index(month0: u32) -> u32 {
    month0 / 3
}

fn first_of_month(year: i32, month0: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month0 + 1, 1)
}

impl fmt::Display for DateRangePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for DateRangePreset {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateRangePreset::ALL
            .into_iter()
            .find(|p| p.key() == s)
            .ok_or_else(|| ReportError::UnknownPreset(s.to_string()))
    }
}

/// Options for the date range preset selector.
pub fn date_range_options() -> Vec<SelectOption> {
    DateRangePreset::ALL
        .iter()
        .map(|p| SelectOption::new(p.key(), p.label()))
        .collect()
}

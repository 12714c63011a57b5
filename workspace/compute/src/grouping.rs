//! Period buckets for grouping report rows.

use chrono::{Datelike, Days, Months, NaiveDate};
use common::{DateRange, GroupBy};

/// Identifier of the bucket `date` falls into, e.g. `2026-W42` or `2026-Q4`.
pub fn period_label(group_by: GroupBy, date: NaiveDate) -> String {
    match group_by {
        GroupBy::Day => date.format("%Y-%m-%d").to_string(),
        GroupBy::Week => {
            let week = date.iso_week();
            format!("{}-W{:02}", week.year(), week.week())
        }
        GroupBy::Month => date.format("%Y-%m").to_string(),
        GroupBy::Quarter => format!("{}-Q{}", date.year(), date.month0() / 3 + 1),
        GroupBy::Year => date.year().to_string(),
    }
}

/// First day of the bucket `date` falls into. Weeks start on Monday.
pub fn bucket_start(group_by: GroupBy, date: NaiveDate) -> Option<NaiveDate> {
    match group_by {
        GroupBy::Day => Some(date),
        GroupBy::Week => {
            date.checked_sub_days(Days::new(u64::from(date.weekday().num_days_from_monday())))
        }
        GroupBy::Month => date.with_day(1),
        GroupBy::Quarter => NaiveDate::from_ymd_opt(date.year(), date.month0() / 3 * 3 + 1, 1),
        GroupBy::Year => NaiveDate::from_ymd_opt(date.year(), 1, 1),
    }
}

fn next_bucket(group_by: GroupBy, start: NaiveDate) -> Option<NaiveDate> {
    match group_by {
        GroupBy::Day => start.checked_add_days(Days::new(1)),
        GroupBy::Week => start.checked_add_days(Days::new(7)),
        GroupBy::Month => start.checked_add_months(Months::new(1)),
        GroupBy::Quarter => start.checked_add_months(Months::new(3)),
        GroupBy::Year => start.checked_add_months(Months::new(12)),
    }
}

/// Start dates of every bucket overlapping `range`, in order.
///
/// An inverted range has no buckets.
pub fn period_starts(group_by: GroupBy, range: &DateRange) -> Vec<NaiveDate> {
    let mut starts = Vec::new();
    if range.is_inverted() {
        return starts;
    }

    let mut current = bucket_start(group_by, range.start_date);
    while let Some(start) = current {
        if start > range.end_date {
            break;
        }
        starts.push(start);
        current = next_bucket(group_by, start);
    }
    starts
}

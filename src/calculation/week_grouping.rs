//! Week bucketing for range aggregation.
//!
//! The weekly-rest allowance and the withholding rate both depend on the
//! hours worked in a week, so range aggregation first groups records into
//! week buckets. A bucket is identified by the record's calendar year and a
//! zero-based week index counted in plain 7-day blocks from January 1st.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::models::AttendanceRecord;

/// Identifies one week bucket: a calendar year and a zero-based week index.
///
/// The index is days since January 1st divided by 7, so the first (possibly
/// partial) 7-day block of the year is week 0 regardless of which weekday
/// the year starts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekKey {
    /// Calendar year of the record's date.
    pub year: i32,
    /// Zero-based week index within the year.
    pub index: u32,
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-W{:02}", self.year, self.index)
    }
}

/// Returns the week bucket a date belongs to.
///
/// # Examples
///
/// ```
/// use shiftpay_engine::calculation::week_key;
/// use chrono::NaiveDate;
///
/// let jan_first = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// assert_eq!(week_key(jan_first).index, 0);
///
/// let jan_eighth = NaiveDate::from_ymd_opt(2025, 1, 8).unwrap();
/// assert_eq!(week_key(jan_eighth).index, 1);
/// ```
pub fn week_key(date: NaiveDate) -> WeekKey {
    WeekKey {
        year: date.year(),
        index: date.ordinal0() / 7,
    }
}

/// Groups records into week buckets.
///
/// Buckets iterate in chronological key order regardless of input order;
/// records inside a bucket keep their input order, which matters to the
/// weekly-allowance wage resolution.
pub fn group_by_week(records: &[AttendanceRecord]) -> BTreeMap<WeekKey, Vec<AttendanceRecord>> {
    let mut weeks: BTreeMap<WeekKey, Vec<AttendanceRecord>> = BTreeMap::new();
    for record in records {
        weeks
            .entry(week_key(record.date))
            .or_default()
            .push(record.clone());
    }
    weeks
}

//! Weekly-rest allowance calculation.
//!
//! Workers who put in at least 15 hours in a week are owed a paid rest day
//! of 8 hours at their hourly wage. Eligibility rides on the per-record
//! weekly-allowance flag; hours are counted across every record in the week
//! bucket whether flagged or not.

use crate::error::EngineResult;
use crate::models::AttendanceRecord;

use super::pay_info::{DEFAULT_MINIMUM_WAGE, resolve_pay_info};
use super::work_hours::calculate_work_hours;

/// Minimum weekly hours before the allowance (and the higher withholding
/// rate) applies. The threshold is inclusive.
pub const WEEKLY_HOURS_THRESHOLD: f64 = 15.0;

/// Paid rest hours granted by the allowance.
const ALLOWANCE_PAID_HOURS: i64 = 8;

/// Sums worked hours across a week bucket.
///
/// Every record counts toward the total, eligible for the allowance or not.
pub fn weekly_hours(records: &[AttendanceRecord]) -> EngineResult<f64> {
    let mut total = 0.0;
    for record in records {
        total += calculate_work_hours(record.start_time.as_deref(), record.end_time.as_deref())?;
    }
    Ok(total)
}

/// Calculates the weekly-rest allowance for one week bucket.
///
/// The allowance is 8 hours at the hourly wage of the last allowance-flagged
/// record that carries an explicit wage; flagged records without a wage
/// leave the previously-seen wage (or the statutory default) in place.
/// Differing wages across a week are not reconciled beyond that.
///
/// # Examples
///
/// ```
/// use shiftpay_engine::calculation::calculate_weekly_allowance;
/// use shiftpay_engine::models::{AttendanceRecord, PayConfig, PayInfoValue};
/// use chrono::NaiveDate;
///
/// let day = |d: u32| AttendanceRecord {
///     date: NaiveDate::from_ymd_opt(2025, 5, d).unwrap(),
///     start_time: Some("09:00".to_string()),
///     end_time: Some("17:00".to_string()),
///     pay_info: Some(PayInfoValue::Structured(PayConfig {
///         hourly_wage: Some(11000),
///         weekly_allowance: true,
///         ..PayConfig::default()
///     })),
/// };
///
/// // Three 8 hour days: 24h >= 15h, allowance = 11000 x 8 = 88000
/// let week = vec![day(5), day(6), day(7)];
/// assert_eq!(calculate_weekly_allowance(&week).unwrap(), 88000);
/// ```
pub fn calculate_weekly_allowance(records: &[AttendanceRecord]) -> EngineResult<i64> {
    let hours = weekly_hours(records)?;

    let mut eligible = false;
    let mut wage = DEFAULT_MINIMUM_WAGE;
    for record in records {
        let config = resolve_pay_info(record);
        if config.weekly_allowance {
            eligible = true;
            if let Some(explicit) = config.hourly_wage {
                wage = explicit;
            }
        }
    }

    if eligible && hours >= WEEKLY_HOURS_THRESHOLD {
        Ok(wage * ALLOWANCE_PAID_HOURS)
    } else {
        Ok(0)
    }
}

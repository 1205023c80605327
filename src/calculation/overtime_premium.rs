//! Overtime premium calculation.
//!
//! Hours beyond the daily threshold in a single record earn an extra half
//! wage. The threshold applies per record: two short records on the same
//! calendar date never combine into overtime.

use crate::error::EngineResult;
use crate::models::AttendanceRecord;

use super::pay_info::{effective_wage, resolve_pay_info};
use super::work_hours::calculate_work_hours;

/// Daily overtime threshold in hours.
pub const DAILY_OVERTIME_THRESHOLD: f64 = 8.0;

/// Premium rate applied to each overtime hour.
const OVERTIME_PREMIUM_RATE: f64 = 0.5;

/// Calculates the overtime premium for one attendance record.
///
/// Returns zero unless the record is overtime-eligible. The premium is the
/// hours beyond [`DAILY_OVERTIME_THRESHOLD`] times the hourly wage times the
/// premium rate, truncated toward zero.
///
/// # Examples
///
/// ```
/// use shiftpay_engine::calculation::calculate_overtime_premium;
/// use shiftpay_engine::models::{AttendanceRecord, PayConfig, PayInfoValue};
/// use chrono::NaiveDate;
///
/// // 9 worked hours: 1 overtime hour x 10000 x 0.5 = 5000
/// let record = AttendanceRecord {
///     date: NaiveDate::from_ymd_opt(2025, 5, 12).unwrap(),
///     start_time: Some("09:00".to_string()),
///     end_time: Some("18:00".to_string()),
///     pay_info: Some(PayInfoValue::Structured(PayConfig {
///         hourly_wage: Some(10000),
///         overtime: true,
///         ..PayConfig::default()
///     })),
/// };
///
/// assert_eq!(calculate_overtime_premium(&record).unwrap(), 5000);
/// ```
pub fn calculate_overtime_premium(record: &AttendanceRecord) -> EngineResult<i64> {
    let config = resolve_pay_info(record);
    if !config.overtime {
        return Ok(0);
    }

    let hours = calculate_work_hours(record.start_time.as_deref(), record.end_time.as_deref())?;
    let overtime_hours = (hours - DAILY_OVERTIME_THRESHOLD).max(0.0);

    Ok((overtime_hours * effective_wage(&config) as f64 * OVERTIME_PREMIUM_RATE) as i64)
}

//! Base pay calculation.

use crate::error::EngineResult;
use crate::models::AttendanceRecord;

use super::pay_info::{effective_wage, resolve_pay_info};
use super::work_hours::calculate_work_hours;

/// Calculates base pay for one attendance record.
///
/// Base pay is worked hours times the hourly wage, truncated toward zero to
/// whole won. Unlike the premium calculators it has no eligibility flag; a
/// record with recorded times always earns base pay.
///
/// # Examples
///
/// ```
/// use shiftpay_engine::calculation::calculate_base_pay;
/// use shiftpay_engine::models::{AttendanceRecord, PayConfig, PayInfoValue};
/// use chrono::NaiveDate;
///
/// let record = AttendanceRecord {
///     date: NaiveDate::from_ymd_opt(2025, 5, 12).unwrap(),
///     start_time: Some("09:00".to_string()),
///     end_time: Some("17:00".to_string()),
///     pay_info: Some(PayInfoValue::Structured(PayConfig {
///         hourly_wage: Some(11000),
///         ..PayConfig::default()
///     })),
/// };
///
/// assert_eq!(calculate_base_pay(&record).unwrap(), 88000);
/// ```
pub fn calculate_base_pay(record: &AttendanceRecord) -> EngineResult<i64> {
    let config = resolve_pay_info(record);
    let hours = calculate_work_hours(record.start_time.as_deref(), record.end_time.as_deref())?;

    Ok((hours * effective_wage(&config) as f64) as i64)
}

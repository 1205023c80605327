//! Holiday premium calculation.

use crate::error::EngineResult;
use crate::models::AttendanceRecord;

use super::pay_info::{effective_wage, resolve_pay_info};
use super::work_hours::calculate_work_hours;

/// Premium rate applied to each hour worked on a holiday.
const HOLIDAY_PREMIUM_RATE: f64 = 0.5;

/// Calculates the holiday premium for one attendance record.
///
/// Returns zero unless the record is holiday-eligible; otherwise every
/// worked hour earns an extra half wage, truncated toward zero.
pub fn calculate_holiday_premium(record: &AttendanceRecord) -> EngineResult<i64> {
    let config = resolve_pay_info(record);
    if !config.holiday {
        return Ok(0);
    }

    let hours = calculate_work_hours(record.start_time.as_deref(), record.end_time.as_deref())?;
    Ok((hours * effective_wage(&config) as f64 * HOLIDAY_PREMIUM_RATE) as i64)
}

//! Night premium calculation.
//!
//! Night work is paid an extra half wage for every hour inside the statutory
//! night window, 22:00 through 06:00 the next day. The window is anchored to
//! the record's start date: a shift that begins before midnight and runs into
//! the window earns the premium, while a shift that starts after midnight
//! (say 01:00-05:00) falls outside its own date's window and earns nothing.

use chrono::Timelike;

use crate::error::EngineResult;
use crate::models::AttendanceRecord;

use super::pay_info::{effective_wage, resolve_pay_info};
use super::work_hours::parse_clock_time;

/// Minutes in a full day, used to roll a cross-midnight end time forward.
const MINUTES_PER_DAY: i64 = 24 * 60;

/// Minutes after the start-date midnight when the night window opens (22:00).
const NIGHT_WINDOW_START_MINUTES: i64 = 22 * 60;

/// Length of the night window in minutes (22:00 through 06:00 next day).
const NIGHT_WINDOW_LENGTH_MINUTES: i64 = 8 * 60;

/// Premium rate applied to each night hour.
const NIGHT_PREMIUM_RATE: f64 = 0.5;

/// Computes the overlap in hours between the worked interval and the night
/// window anchored to the record's start date.
///
/// Returns exact fractional hours, unrounded; missing or empty clock times
/// yield zero overlap.
pub fn night_overlap_hours(record: &AttendanceRecord) -> EngineResult<f64> {
    let (start, end) = match (record.start_time.as_deref(), record.end_time.as_deref()) {
        (Some(s), Some(e)) if !s.is_empty() && !e.is_empty() => (s, e),
        _ => return Ok(0.0),
    };

    let start_time = parse_clock_time(start)?;
    let end_time = parse_clock_time(end)?;

    // Work the interval in minutes since midnight on the start date.
    let start_minutes = i64::from(start_time.hour() * 60 + start_time.minute());
    let mut end_minutes = i64::from(end_time.hour() * 60 + end_time.minute());
    if end_minutes < start_minutes {
        // Clock-out on the following day
        end_minutes += MINUTES_PER_DAY;
    }

    let window_end = NIGHT_WINDOW_START_MINUTES + NIGHT_WINDOW_LENGTH_MINUTES;
    let overlap = end_minutes.min(window_end) - start_minutes.max(NIGHT_WINDOW_START_MINUTES);

    Ok(overlap.max(0) as f64 / 60.0)
}

/// Calculates the night premium for one attendance record.
///
/// The record's eligibility flag is checked before anything else, so a
/// record that is not night-eligible earns zero even if its clock times are
/// malformed. The premium is overlap hours times the hourly wage times
/// [the premium rate](NIGHT_PREMIUM_RATE), truncated toward zero.
///
/// # Examples
///
/// ```
/// use shiftpay_engine::calculation::calculate_night_premium;
/// use shiftpay_engine::models::{AttendanceRecord, PayConfig, PayInfoValue};
/// use chrono::NaiveDate;
///
/// // 20:00-04:00 overlaps the window for 6 hours: 6 x 11000 x 0.5 = 33000
/// let record = AttendanceRecord {
///     date: NaiveDate::from_ymd_opt(2025, 5, 12).unwrap(),
///     start_time: Some("20:00".to_string()),
///     end_time: Some("04:00".to_string()),
///     pay_info: Some(PayInfoValue::Structured(PayConfig {
///         hourly_wage: Some(11000),
///         night: true,
///         ..PayConfig::default()
///     })),
/// };
///
/// assert_eq!(calculate_night_premium(&record).unwrap(), 33000);
/// ```
pub fn calculate_night_premium(record: &AttendanceRecord) -> EngineResult<i64> {
    let config = resolve_pay_info(record);
    if !config.night {
        return Ok(0);
    }

    let overlap = night_overlap_hours(record)?;
    Ok((overlap * effective_wage(&config) as f64 * NIGHT_PREMIUM_RATE) as i64)
}

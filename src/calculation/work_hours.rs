//! Elapsed work-hours computation.
//!
//! This module computes the hours worked between two `"HH:MM"` clock times,
//! rolling the end time to the following day when a shift crosses midnight.
//! Stored rows may be missing one or both times, which counts as zero hours
//! rather than an error.

use chrono::NaiveTime;

use crate::error::{EngineError, EngineResult};

/// Minutes in a full day, used to roll a cross-midnight end time forward.
const MINUTES_PER_DAY: i64 = 24 * 60;

/// Parses a `"HH:MM"` clock time.
pub(crate) fn parse_clock_time(value: &str) -> EngineResult<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| EngineError::InvalidTimeFormat {
        value: value.to_string(),
    })
}

/// Rounds fractional hours to two decimal places.
pub(crate) fn round_hours(hours: f64) -> f64 {
    (hours * 100.0).round() / 100.0
}

/// Calculates the hours worked between two clock times.
///
/// If either time is missing or empty the record counts as zero hours. When
/// the end time is earlier than the start time the shift is treated as
/// crossing midnight, so the end lands on the following day. Equal start and
/// end mean zero hours, not a full day.
///
/// # Arguments
///
/// * `start` - Clock-in time as `"HH:MM"`, if recorded
/// * `end` - Clock-out time as `"HH:MM"`, if recorded
///
/// # Returns
///
/// Fractional hours rounded to two decimal places, always in `[0, 24)`, or
/// [`EngineError::InvalidTimeFormat`] if a non-empty value does not parse.
///
/// # Examples
///
/// ```
/// use shiftpay_engine::calculation::calculate_work_hours;
///
/// let hours = calculate_work_hours(Some("09:00"), Some("17:00")).unwrap();
/// assert_eq!(hours, 8.0);
/// ```
///
/// ## Cross-midnight shift
///
/// ```
/// use shiftpay_engine::calculation::calculate_work_hours;
///
/// let hours = calculate_work_hours(Some("20:00"), Some("04:00")).unwrap();
/// assert_eq!(hours, 8.0);
/// ```
///
/// ## Missing clock-out
///
/// ```
/// use shiftpay_engine::calculation::calculate_work_hours;
///
/// let hours = calculate_work_hours(Some("09:00"), None).unwrap();
/// assert_eq!(hours, 0.0);
/// ```
pub fn calculate_work_hours(start: Option<&str>, end: Option<&str>) -> EngineResult<f64> {
    let (start, end) = match (start, end) {
        (Some(s), Some(e)) if !s.is_empty() && !e.is_empty() => (s, e),
        _ => return Ok(0.0),
    };

    let start_time = parse_clock_time(start)?;
    let end_time = parse_clock_time(end)?;

    let mut minutes = (end_time - start_time).num_minutes();
    if minutes < 0 {
        // Clock-out on the following day
        minutes += MINUTES_PER_DAY;
    }

    Ok(round_hours(minutes as f64 / 60.0))
}

//! Per-day settlement.
//!
//! Settlement combines the four daily calculators into a [`DailyPay`]
//! breakdown. The settled form needs the record's whole week bucket because
//! the withholding rate depends on weekly hours; the preview form looks at
//! the record alone and applies no tax.

use crate::error::EngineResult;
use crate::models::{AttendanceRecord, DailyPay};

use super::base_pay::calculate_base_pay;
use super::holiday_premium::calculate_holiday_premium;
use super::night_premium::calculate_night_premium;
use super::overtime_premium::calculate_overtime_premium;
use super::tax::calculate_tax;
use super::weekly_allowance::weekly_hours;

/// Settles one attendance record against its week bucket.
///
/// # Arguments
///
/// * `record` - The record to settle
/// * `week_records` - Every record in the same week bucket, used to pick
///   the withholding rate
///
/// # Examples
///
/// ```
/// use shiftpay_engine::calculation::settle_day;
/// use shiftpay_engine::models::{AttendanceRecord, PayConfig, PayInfoValue};
/// use chrono::NaiveDate;
///
/// let record = |d: u32| AttendanceRecord {
///     date: NaiveDate::from_ymd_opt(2025, 5, d).unwrap(),
///     start_time: Some("20:00".to_string()),
///     end_time: Some("04:00".to_string()),
///     pay_info: Some(PayInfoValue::Structured(PayConfig {
///         hourly_wage: Some(11000),
///         night: true,
///         overtime: true,
///         weekly_allowance: true,
///         ..PayConfig::default()
///     })),
/// };
///
/// let week = vec![record(5), record(6), record(7)];
/// let day = settle_day(&week[0], &week).unwrap();
///
/// assert_eq!(day.base, 88000);
/// assert_eq!(day.night, 33000);
/// assert_eq!(day.gross, 121000);
/// assert_eq!(day.tax, 10890); // 24 weekly hours selects the 9% rate
/// assert_eq!(day.net, 110110);
/// ```
pub fn settle_day(
    record: &AttendanceRecord,
    week_records: &[AttendanceRecord],
) -> EngineResult<DailyPay> {
    let base = calculate_base_pay(record)?;
    let night = calculate_night_premium(record)?;
    let overtime = calculate_overtime_premium(record)?;
    let holiday = calculate_holiday_premium(record)?;

    let gross = base + night + overtime + holiday;
    let tax = calculate_tax(gross, weekly_hours(week_records)?);

    Ok(DailyPay {
        base,
        night,
        overtime,
        holiday,
        gross,
        tax,
        net: gross - tax,
    })
}

/// Computes the pre-settlement view of one record: the four pay components
/// with no withholding applied, so net equals gross.
pub fn preview_day(record: &AttendanceRecord) -> EngineResult<DailyPay> {
    let base = calculate_base_pay(record)?;
    let night = calculate_night_premium(record)?;
    let overtime = calculate_overtime_premium(record)?;
    let holiday = calculate_holiday_premium(record)?;

    let gross = base + night + overtime + holiday;

    Ok(DailyPay {
        base,
        night,
        overtime,
        holiday,
        gross,
        tax: 0,
        net: gross,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::models::{PayConfig, PayInfoValue};
    use chrono::NaiveDate;

    fn make_record(day: u32, start: &str, end: &str, config: PayConfig) -> AttendanceRecord {
        AttendanceRecord {
            date: NaiveDate::from_ymd_opt(2025, 5, day).unwrap(),
            start_time: Some(start.to_string()),
            end_time: Some(end.to_string()),
            pay_info: Some(PayInfoValue::Structured(config)),
        }
    }

    fn night_shift_config() -> PayConfig {
        PayConfig {
            hourly_wage: Some(11000),
            night: true,
            overtime: true,
            weekly_allowance: true,
            holiday: false,
        }
    }

    // ==========================================================================
    // ST-001: cross-midnight night shift settled against a 24 hour week
    // Expected: base 88000, night 33000, overtime 0 (exactly 8h), holiday 0,
    //           gross 121000, tax 10890 (9%), net 110110
    // ==========================================================================
    #[test]
    fn test_st_001_night_shift_settlement() {
        let week = vec![
            make_record(5, "20:00", "04:00", night_shift_config()),
            make_record(6, "20:00", "04:00", night_shift_config()),
            make_record(7, "20:00", "04:00", night_shift_config()),
        ];

        let day = settle_day(&week[0], &week).unwrap();

        assert_eq!(day.base, 88000);
        assert_eq!(day.night, 33000);
        assert_eq!(day.overtime, 0);
        assert_eq!(day.holiday, 0);
        assert_eq!(day.gross, 121000);
        assert_eq!(day.tax, 10890);
        assert_eq!(day.net, 110110);
    }

    // ==========================================================================
    // ST-002: a short week settles at the 3.3% rate
    // Single 8 hour record: gross 88000, tax 2904, net 85096
    // ==========================================================================
    #[test]
    fn test_st_002_short_week_income_rate() {
        let config = PayConfig {
            hourly_wage: Some(11000),
            ..PayConfig::default()
        };
        let week = vec![make_record(5, "09:00", "17:00", config)];

        let day = settle_day(&week[0], &week).unwrap();

        assert_eq!(day.gross, 88000);
        assert_eq!(day.tax, 2904);
        assert_eq!(day.net, 85096);
    }

    // ==========================================================================
    // ST-003: no premium flags means base pay only
    // ==========================================================================
    #[test]
    fn test_st_003_base_only() {
        let config = PayConfig {
            hourly_wage: Some(10000),
            ..PayConfig::default()
        };
        let week = vec![
            make_record(5, "20:00", "06:00", config.clone()),
            make_record(6, "09:00", "17:00", config.clone()),
        ];

        // 10 worked hours, night window overlapped, but nothing is flagged.
        let day = settle_day(&week[0], &week).unwrap();

        assert_eq!(day.base, 100000);
        assert_eq!(day.night, 0);
        assert_eq!(day.overtime, 0);
        assert_eq!(day.holiday, 0);
    }

    // ==========================================================================
    // ST-004: preview carries no tax, so net equals gross
    // ==========================================================================
    #[test]
    fn test_st_004_preview_has_no_tax() {
        let record = make_record(5, "20:00", "04:00", night_shift_config());

        let day = preview_day(&record).unwrap();

        assert_eq!(day.base, 88000);
        assert_eq!(day.night, 33000);
        assert_eq!(day.gross, 121000);
        assert_eq!(day.tax, 0);
        assert_eq!(day.net, 121000);
    }

    // ==========================================================================
    // ST-005: a malformed time in the week bucket fails settlement
    // ==========================================================================
    #[test]
    fn test_st_005_malformed_weekmate_fails() {
        let week = vec![
            make_record(5, "09:00", "17:00", night_shift_config()),
            make_record(6, "bad", "17:00", PayConfig::default()),
        ];

        assert!(matches!(
            settle_day(&week[0], &week).unwrap_err(),
            EngineError::InvalidTimeFormat { .. }
        ));
    }
}

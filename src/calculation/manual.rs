//! Manual pay estimation.
//!
//! The manual path computes the same economic quantities as range
//! aggregation from a synthetic profile instead of stored records. It is a
//! deliberate simplification: overtime is whatever the caller declares
//! rather than derived from an 8 hour threshold, night work is assumed to
//! be a fixed 4 hours per working day, and the weekly allowance is granted
//! once per full 7 working days once the profile's total hours clear the
//! statutory 15 hour threshold.

use crate::models::{ManualPayResult, ManualProfile, PayType, TaxOption};

use super::tax::INCOME_WITHHOLDING_RATE;
use super::weekly_allowance::WEEKLY_HOURS_THRESHOLD;

/// Multiplier applied to declared overtime hours.
const MANUAL_OVERTIME_RATE: f64 = 1.5;

/// Night hours assumed per working day when night work is requested.
const ASSUMED_NIGHT_HOURS_PER_DAY: f64 = 4.0;

/// Premium rate applied to assumed night hours.
const NIGHT_PREMIUM_RATE: f64 = 0.5;

/// Worker-side share of the four major social insurances.
const MANUAL_INSURANCE_RATE: f64 = 0.0879;

/// Paid rest hours granted per earned weekly allowance.
const ALLOWANCE_PAID_HOURS: i64 = 8;

/// Estimates pay from a manual work profile.
///
/// Hourly profiles earn base pay, declared overtime at 1.5x, an assumed
/// night premium, and, when requested and total hours reach
/// [`WEEKLY_HOURS_THRESHOLD`](super::weekly_allowance::WEEKLY_HOURS_THRESHOLD),
/// the weekly allowance. Daily and monthly profiles earn base pay only.
/// Every output field is truncated toward zero independently once the
/// floating-point accumulation is finished.
///
/// # Examples
///
/// ```
/// use shiftpay_engine::calculation::calculate_manual_pay;
/// use shiftpay_engine::models::{ManualProfile, PayType, TaxOption};
///
/// let profile = ManualProfile {
///     pay_type: PayType::Hourly,
///     pay_amount: 10000,
///     work_hour: 8,
///     work_minute: 0,
///     working_days: vec!["월".into(), "화".into(), "수".into(), "목".into(), "금".into()],
///     overtime_hour: 0,
///     overtime_minute: 0,
///     include_weekly_allowance: false,
///     tax_option: TaxOption::None,
///     night_work: false,
/// };
///
/// let result = calculate_manual_pay(&profile);
/// assert_eq!(result.gross_pay, 400000);
/// assert_eq!(result.net_pay, 400000);
/// ```
pub fn calculate_manual_pay(profile: &ManualProfile) -> ManualPayResult {
    let daily_hours = f64::from(profile.work_hour) + f64::from(profile.work_minute) / 60.0;
    let overtime_hours = f64::from(profile.overtime_hour) + f64::from(profile.overtime_minute) / 60.0;
    let num_days = profile.working_days.len() as i64;
    let amount = profile.pay_amount as f64;

    let mut base_pay = 0.0;
    let mut overtime_pay = 0.0;
    let mut night_pay = 0.0;
    let mut weekly_allowance = 0.0;

    match profile.pay_type {
        PayType::Hourly => {
            let total_work_hours = daily_hours * num_days as f64;
            base_pay = total_work_hours * amount;
            overtime_pay = overtime_hours * amount * MANUAL_OVERTIME_RATE * num_days as f64;
            if profile.night_work {
                night_pay =
                    ASSUMED_NIGHT_HOURS_PER_DAY * amount * NIGHT_PREMIUM_RATE * num_days as f64;
            }
            if profile.include_weekly_allowance && total_work_hours >= WEEKLY_HOURS_THRESHOLD {
                // Integer arithmetic: one allowance per full 7 working days.
                weekly_allowance =
                    ((num_days / 7) * profile.pay_amount * ALLOWANCE_PAID_HOURS) as f64;
            }
        }
        PayType::Daily => {
            base_pay = (profile.pay_amount * num_days) as f64;
        }
        PayType::Monthly => {
            base_pay = profile.pay_amount as f64;
        }
    }

    let gross_pay = base_pay + overtime_pay + night_pay + weekly_allowance;
    let tax = match profile.tax_option {
        TaxOption::None => 0.0,
        TaxOption::Insurance => gross_pay * MANUAL_INSURANCE_RATE,
        TaxOption::Income => gross_pay * INCOME_WITHHOLDING_RATE,
    };
    let net_pay = gross_pay - tax;

    ManualPayResult {
        base_pay: base_pay as i64,
        gross_pay: gross_pay as i64,
        weekly_allowance: weekly_allowance as i64,
        overtime_pay: overtime_pay as i64,
        night_pay: night_pay as i64,
        tax: tax as i64,
        net_pay: net_pay as i64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hourly_profile(days: usize) -> ManualProfile {
        ManualProfile {
            pay_type: PayType::Hourly,
            pay_amount: 10000,
            work_hour: 8,
            work_minute: 0,
            working_days: (0..days).map(|i| format!("day{}", i)).collect(),
            overtime_hour: 0,
            overtime_minute: 0,
            include_weekly_allowance: false,
            tax_option: TaxOption::None,
            night_work: false,
        }
    }

    // ==========================================================================
    // MN-001: plain hourly week
    // 10000 x 8h x 5 days, no extras, no tax: gross = net = 400000
    // ==========================================================================
    #[test]
    fn test_mn_001_plain_hourly() {
        let result = calculate_manual_pay(&hourly_profile(5));

        assert_eq!(result.base_pay, 400000);
        assert_eq!(result.gross_pay, 400000);
        assert_eq!(result.overtime_pay, 0);
        assert_eq!(result.night_pay, 0);
        assert_eq!(result.weekly_allowance, 0);
        assert_eq!(result.tax, 0);
        assert_eq!(result.net_pay, 400000);
    }

    // ==========================================================================
    // MN-002: declared overtime at 1.5x
    // 1h x 10000 x 1.5 x 5 days = 75000
    // ==========================================================================
    #[test]
    fn test_mn_002_overtime() {
        let mut profile = hourly_profile(5);
        profile.overtime_hour = 1;

        let result = calculate_manual_pay(&profile);
        assert_eq!(result.overtime_pay, 75000);
        assert_eq!(result.gross_pay, 475000);
    }

    // ==========================================================================
    // MN-003: night work assumes 4 night hours per day
    // 4h x 10000 x 0.5 x 5 days = 100000
    // ==========================================================================
    #[test]
    fn test_mn_003_night_work() {
        let mut profile = hourly_profile(5);
        profile.night_work = true;

        let result = calculate_manual_pay(&profile);
        assert_eq!(result.night_pay, 100000);
    }

    // ==========================================================================
    // MN-004: weekly allowance per full 7 working days
    // ==========================================================================
    #[test]
    fn test_mn_004_weekly_allowance_floor() {
        let mut six = hourly_profile(6);
        six.include_weekly_allowance = true;
        assert_eq!(calculate_manual_pay(&six).weekly_allowance, 0);

        let mut seven = hourly_profile(7);
        seven.include_weekly_allowance = true;
        assert_eq!(calculate_manual_pay(&seven).weekly_allowance, 80000);

        let mut fourteen = hourly_profile(14);
        fourteen.include_weekly_allowance = true;
        assert_eq!(calculate_manual_pay(&fourteen).weekly_allowance, 160000);
    }

    // ==========================================================================
    // MN-005: daily pay type earns base pay only
    // ==========================================================================
    #[test]
    fn test_mn_005_daily_type() {
        let mut profile = hourly_profile(5);
        profile.pay_type = PayType::Daily;
        profile.pay_amount = 100000;
        profile.overtime_hour = 2;
        profile.night_work = true;
        profile.include_weekly_allowance = true;

        let result = calculate_manual_pay(&profile);
        assert_eq!(result.base_pay, 500000);
        assert_eq!(result.overtime_pay, 0);
        assert_eq!(result.night_pay, 0);
        assert_eq!(result.weekly_allowance, 0);
        assert_eq!(result.gross_pay, 500000);
    }

    // ==========================================================================
    // MN-006: monthly pay type is the amount alone
    // ==========================================================================
    #[test]
    fn test_mn_006_monthly_type() {
        let mut profile = hourly_profile(20);
        profile.pay_type = PayType::Monthly;
        profile.pay_amount = 2100000;
        profile.night_work = true;

        let result = calculate_manual_pay(&profile);
        assert_eq!(result.base_pay, 2100000);
        assert_eq!(result.gross_pay, 2100000);
        assert_eq!(result.night_pay, 0);
    }

    // ==========================================================================
    // MN-007: insurance withholding at 8.79%
    // 400000 x 0.0879 = 35160, net 364840
    // ==========================================================================
    #[test]
    fn test_mn_007_insurance_tax() {
        let mut profile = hourly_profile(5);
        profile.tax_option = TaxOption::Insurance;

        let result = calculate_manual_pay(&profile);
        assert_eq!(result.gross_pay, 400000);
        assert_eq!(result.tax, 35160);
        assert_eq!(result.net_pay, 364840);
    }

    // ==========================================================================
    // MN-008: income withholding at 3.3%
    // ==========================================================================
    #[test]
    fn test_mn_008_income_tax() {
        let mut profile = hourly_profile(5);
        profile.tax_option = TaxOption::Income;

        let result = calculate_manual_pay(&profile);
        assert_eq!(result.tax, 13200);
        assert_eq!(result.net_pay, 386800);
    }

    // ==========================================================================
    // MN-009: minutes contribute fractional hours
    // 7.5h x 10000 x 4 days = 300000
    // ==========================================================================
    #[test]
    fn test_mn_009_minutes() {
        let mut profile = hourly_profile(4);
        profile.work_hour = 7;
        profile.work_minute = 30;

        let result = calculate_manual_pay(&profile);
        assert_eq!(result.base_pay, 300000);
    }

    // ==========================================================================
    // MN-010: an hourly profile with no working days earns nothing
    // ==========================================================================
    #[test]
    fn test_mn_010_no_working_days() {
        let mut profile = hourly_profile(0);
        profile.night_work = true;
        profile.overtime_hour = 2;

        let result = calculate_manual_pay(&profile);
        assert_eq!(result.gross_pay, 0);
        assert_eq!(result.net_pay, 0);
    }

    // ==========================================================================
    // MN-011: the allowance needs at least 15 total hours
    // 7 days x 2h = 14h: requested, a full 7-day block, but still unpaid
    // ==========================================================================
    #[test]
    fn test_mn_011_allowance_requires_fifteen_hours() {
        let mut profile = hourly_profile(7);
        profile.work_hour = 2;
        profile.include_weekly_allowance = true;

        let result = calculate_manual_pay(&profile);
        assert_eq!(result.base_pay, 140000);
        assert_eq!(result.weekly_allowance, 0);
        assert_eq!(result.gross_pay, 140000);
    }

    // ==========================================================================
    // MN-012: the hour threshold is inclusive
    // 10 days x 1h30m = exactly 15h; one full 7-day block earns 80000
    // ==========================================================================
    #[test]
    fn test_mn_012_allowance_threshold_inclusive() {
        let mut profile = hourly_profile(10);
        profile.work_hour = 1;
        profile.work_minute = 30;
        profile.include_weekly_allowance = true;

        let result = calculate_manual_pay(&profile);
        assert_eq!(result.base_pay, 150000);
        assert_eq!(result.weekly_allowance, 80000);
        assert_eq!(result.gross_pay, 230000);
    }
}

//! Withholding tax selection.

use super::weekly_allowance::WEEKLY_HOURS_THRESHOLD;

/// Composite social-insurance withholding rate for workers at or above the
/// weekly-hours threshold.
pub const INSURANCE_WITHHOLDING_RATE: f64 = 0.09;

/// Flat income withholding rate for workers under the threshold.
pub const INCOME_WITHHOLDING_RATE: f64 = 0.033;

/// Calculates withholding on gross pay.
///
/// At or above [`WEEKLY_HOURS_THRESHOLD`] weekly hours the social-insurance
/// composite applies, below it the flat income rate. The threshold is
/// inclusive: exactly 15 hours selects the higher rate. The result is
/// truncated toward zero.
pub fn calculate_tax(gross: i64, weekly_hours: f64) -> i64 {
    let rate = if weekly_hours >= WEEKLY_HOURS_THRESHOLD {
        INSURANCE_WITHHOLDING_RATE
    } else {
        INCOME_WITHHOLDING_RATE
    };

    (gross as f64 * rate) as i64
}

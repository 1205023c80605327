//! Calculation logic for the shift pay engine.
//!
//! This module contains all the calculation functions for determining pay,
//! including worked-hour arithmetic for clock-time pairs, pay configuration
//! resolution, base pay, the night, overtime and holiday premiums, weekly
//! grouping and the weekly holiday allowance, withholding tax, per-day
//! settlement, date-range aggregation, and manual pay estimation from a
//! synthetic work profile.

mod aggregate;
mod base_pay;
mod holiday_premium;
mod manual;
mod night_premium;
mod overtime_premium;
mod pay_info;
mod settlement;
mod tax;
mod week_grouping;
mod weekly_allowance;
mod work_hours;

pub use work_hours::calculate_work_hours;
pub use pay_info::{DEFAULT_MINIMUM_WAGE, effective_wage, resolve_pay_info};
pub use base_pay::calculate_base_pay;
pub use night_premium::{calculate_night_premium, night_overlap_hours};
pub use overtime_premium::{DAILY_OVERTIME_THRESHOLD, calculate_overtime_premium};
pub use holiday_premium::calculate_holiday_premium;
pub use week_grouping::{WeekKey, group_by_week, week_key};
pub use weekly_allowance::{WEEKLY_HOURS_THRESHOLD, calculate_weekly_allowance, weekly_hours};
pub use tax::{INCOME_WITHHOLDING_RATE, INSURANCE_WITHHOLDING_RATE, calculate_tax};
pub use settlement::{preview_day, settle_day};
pub use aggregate::aggregate_pay;
pub use manual::calculate_manual_pay;

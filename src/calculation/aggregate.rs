//! Range aggregation.
//!
//! This is the single entry point for turning a set of attendance records
//! into period totals. Records are grouped into week buckets first, because
//! both the weekly-rest allowance and the withholding rate are weekly
//! decisions; each bucket is then settled or previewed per
//! [`CalcMode`].

use crate::error::EngineResult;
use crate::models::{AttendanceRecord, CalcMode, PayBreakdown};

use super::settlement::{preview_day, settle_day};
use super::week_grouping::group_by_week;
use super::weekly_allowance::calculate_weekly_allowance;

/// Aggregates attendance records over a date range into period totals.
///
/// In settled mode each week bucket contributes its weekly-rest allowance
/// once, and every record is settled with per-day withholding. In preview
/// mode tax and allowance are skipped entirely and net equals the sum of
/// the pay components.
///
/// Empty input yields an all-zero breakdown, and the same records with the
/// same mode always produce identical totals.
///
/// # Examples
///
/// ```
/// use shiftpay_engine::calculation::aggregate_pay;
/// use shiftpay_engine::models::{AttendanceRecord, CalcMode, PayBreakdown};
///
/// let totals = aggregate_pay(&[], CalcMode::Settled).unwrap();
/// assert_eq!(totals, PayBreakdown::default());
/// ```
pub fn aggregate_pay(records: &[AttendanceRecord], mode: CalcMode) -> EngineResult<PayBreakdown> {
    let mut totals = PayBreakdown::default();
    let mut net_total = 0i64;

    for week_records in group_by_week(records).into_values() {
        if mode == CalcMode::Settled {
            totals.weekly_allowance += calculate_weekly_allowance(&week_records)?;
        }

        for record in &week_records {
            let day = match mode {
                CalcMode::Settled => settle_day(record, &week_records)?,
                CalcMode::Preview => preview_day(record)?,
            };

            totals.base += day.base;
            totals.night += day.night;
            totals.overtime += day.overtime;
            totals.holiday += day.holiday;
            totals.tax += day.tax;
            net_total += day.net;
        }
    }

    totals.gross_with_allowance =
        totals.base + totals.night + totals.overtime + totals.holiday + totals.weekly_allowance;
    totals.net_with_allowance = net_total + totals.weekly_allowance;

    Ok(totals)
}

//! Manual estimation profile and result models.
//!
//! The manual path computes pay from a synthetic work profile supplied by
//! the caller instead of stored attendance records. Wire field names and the
//! Korean pay-type literals are preserved from the manual-entry client.

use serde::{Deserialize, Serialize};

/// How the manual pay amount is denominated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayType {
    /// The amount is an hourly wage.
    #[serde(rename = "시급")]
    Hourly,
    /// The amount is a fixed daily rate.
    #[serde(rename = "일급")]
    Daily,
    /// The amount is a fixed monthly salary.
    #[serde(rename = "월급")]
    Monthly,
}

/// Which withholding scheme an estimate applies to gross pay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxOption {
    /// No withholding.
    #[default]
    None,
    /// Four major social insurances, 8.79%.
    Insurance,
    /// Flat-rate income withholding, 3.3%.
    Income,
}

/// A synthetic work profile for estimation without stored records.
///
/// Only `payType` and `payAmount` are required on the wire; every other
/// field defaults to "not worked" / "not requested".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualProfile {
    /// Denomination of `pay_amount`.
    pub pay_type: PayType,
    /// Pay amount in won, interpreted per `pay_type`.
    pub pay_amount: i64,
    /// Whole hours worked per day.
    #[serde(default)]
    pub work_hour: u32,
    /// Additional minutes worked per day.
    #[serde(default)]
    pub work_minute: u32,
    /// Labels of the days worked; the count is what matters.
    #[serde(default)]
    pub working_days: Vec<String>,
    /// Whole overtime hours per day.
    #[serde(default)]
    pub overtime_hour: u32,
    /// Additional overtime minutes per day.
    #[serde(default)]
    pub overtime_minute: u32,
    /// Whether to add the weekly-rest allowance.
    #[serde(default)]
    pub include_weekly_allowance: bool,
    /// Withholding scheme for the estimate.
    #[serde(default)]
    pub tax_option: TaxOption,
    /// Whether the profile includes night work (assumed 4 hours per day).
    #[serde(default)]
    pub night_work: bool,
}

/// Output of a manual estimate, in won.
///
/// Serialized with the manual-entry client's camelCase field names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualPayResult {
    /// Base pay before premiums and allowance.
    pub base_pay: i64,
    /// Base pay plus premiums and allowance, before tax.
    pub gross_pay: i64,
    /// Weekly-rest allowance, if requested and earned.
    pub weekly_allowance: i64,
    /// Overtime premium.
    pub overtime_pay: i64,
    /// Night premium.
    pub night_pay: i64,
    /// Withholding per the profile's tax option.
    pub tax: i64,
    /// Gross minus tax.
    pub net_pay: i64,
}

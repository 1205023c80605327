//! Attendance record model and pay-configuration types.
//!
//! This module defines the stored attendance row and the per-record pay
//! configuration that drives premium eligibility.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Hourly wage and premium-eligibility flags for one attendance record.
///
/// Wire field names follow the stored JSON payload (`hourPrice`, `night`,
/// `overtime`, `wHoliday`, `Holiday`). Missing keys fall back to their
/// defaults and unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayConfig {
    /// Hourly wage in won. `None` falls back to the statutory minimum wage.
    #[serde(rename = "hourPrice")]
    pub hourly_wage: Option<i64>,
    /// Night premium eligibility (work inside the 22:00-06:00 window).
    pub night: bool,
    /// Overtime premium eligibility (hours beyond 8 in one record).
    pub overtime: bool,
    /// Weekly-rest allowance eligibility.
    #[serde(rename = "wHoliday")]
    pub weekly_allowance: bool,
    /// Holiday premium eligibility.
    #[serde(rename = "Holiday")]
    pub holiday: bool,
}

/// The pay-configuration value exactly as it arrives on a record.
///
/// Legacy rows carry the configuration as a JSON-encoded string; newer rows
/// embed the object directly. Both shapes deserialize transparently, and
/// [`resolve_pay_info`](crate::calculation::resolve_pay_info) canonicalizes
/// either into a [`PayConfig`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PayInfoValue {
    /// The configuration arrived as a structured object.
    Structured(PayConfig),
    /// The configuration arrived as a JSON-encoded string.
    Encoded(String),
}

/// One stored attendance row.
///
/// Clock times are kept as raw `"HH:MM"` strings because stored rows are not
/// revalidated on the way in; parsing happens during calculation, where a
/// malformed value surfaces as
/// [`InvalidTimeFormat`](crate::error::EngineError::InvalidTimeFormat).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    /// The calendar date the shift started on.
    pub date: NaiveDate,
    /// Clock-in time as `"HH:MM"`. Missing or empty means not recorded.
    #[serde(default)]
    pub start_time: Option<String>,
    /// Clock-out time as `"HH:MM"`. Missing or empty means not recorded.
    #[serde(default)]
    pub end_time: Option<String>,
    /// Pay configuration captured when the shift was logged.
    #[serde(default)]
    pub pay_info: Option<PayInfoValue>,
}

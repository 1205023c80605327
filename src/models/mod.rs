//! Core data models for the shift payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod breakdown;
mod manual;

pub use attendance::{AttendanceRecord, PayConfig, PayInfoValue};
pub use breakdown::{CalcMode, DailyPay, PayBreakdown};
pub use manual::{ManualPayResult, ManualProfile, PayType, TaxOption};

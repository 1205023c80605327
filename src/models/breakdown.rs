//! Pay breakdown models and the range-calculation mode.
//!
//! This module defines the per-day and per-range monetary breakdowns
//! produced by the engine. All amounts are integer won.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Pay components settled for a single attendance record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPay {
    /// Base pay: worked hours times hourly wage.
    pub base: i64,
    /// Night premium for work inside the 22:00-06:00 window.
    pub night: i64,
    /// Overtime premium for hours beyond the daily threshold.
    pub overtime: i64,
    /// Holiday premium.
    pub holiday: i64,
    /// Sum of the four pay components.
    pub gross: i64,
    /// Withholding for the day. Zero in preview mode.
    pub tax: i64,
    /// Gross minus tax.
    pub net: i64,
}

/// Aggregated pay for a date range.
///
/// Field names match the range-calculation response body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayBreakdown {
    /// Base pay summed over all records.
    pub base: i64,
    /// Night premium summed over all records.
    pub night: i64,
    /// Overtime premium summed over all records.
    pub overtime: i64,
    /// Holiday premium summed over all records.
    pub holiday: i64,
    /// Weekly-rest allowance summed over all week buckets. Zero in preview.
    pub weekly_allowance: i64,
    /// Withholding summed over all settled days. Zero in preview.
    pub tax: i64,
    /// base + night + overtime + holiday + weekly_allowance.
    pub gross_with_allowance: i64,
    /// Net pay for the range plus the weekly allowance.
    pub net_with_allowance: i64,
}

/// How a range aggregation treats tax and the weekly-rest allowance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalcMode {
    /// Full settlement: per-day tax and per-week allowance included.
    Settled,
    /// Pre-settlement preview: tax and allowance excluded.
    Preview,
}

impl FromStr for CalcMode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "settled" => Ok(CalcMode::Settled),
            "preview" => Ok(CalcMode::Preview),
            other => Err(EngineError::InvalidMode {
                mode: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for CalcMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcMode::Settled => write!(f, "settled"),
            CalcMode::Preview => write!(f, "preview"),
        }
    }
}

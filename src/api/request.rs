//! Request types for the shift pay engine API.
//!
//! This module defines the query parameters for the `/calculate` endpoint.
//! The manual estimation endpoint takes a
//! [`ManualProfile`](crate::models::ManualProfile) body directly, since that
//! type already speaks the manual-entry client's wire format.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Query parameters for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateParams {
    /// First day of the range (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the range (inclusive).
    pub end_date: NaiveDate,
    /// Calculation mode; treated as `settled` when omitted.
    #[serde(default)]
    pub mode: Option<String>,
}

//! Pay-configuration resolution.
//!
//! Stored rows carry their pay configuration either as a structured object
//! or as a JSON-encoded string left behind by an older client. This module
//! canonicalizes both shapes into a [`PayConfig`] without ever failing:
//! malformed or absent configurations degrade to "no premiums, default wage".

use crate::models::{AttendanceRecord, PayConfig, PayInfoValue};

/// Statutory minimum hourly wage in won (2025).
///
/// Applied whenever a record's resolved pay configuration carries no
/// explicit wage.
pub const DEFAULT_MINIMUM_WAGE: i64 = 10030;

/// Resolves a record's pay-configuration value into a canonical [`PayConfig`].
///
/// Structured values pass through unchanged. Encoded values are decoded;
/// a decode failure or an absent value yields the empty configuration.
///
/// # Examples
///
/// ```
/// use shiftpay_engine::calculation::resolve_pay_info;
/// use shiftpay_engine::models::{AttendanceRecord, PayInfoValue};
/// use chrono::NaiveDate;
///
/// let record = AttendanceRecord {
///     date: NaiveDate::from_ymd_opt(2025, 5, 12).unwrap(),
///     start_time: Some("09:00".to_string()),
///     end_time: Some("17:00".to_string()),
///     pay_info: Some(PayInfoValue::Encoded("not valid json".to_string())),
/// };
///
/// let config = resolve_pay_info(&record);
/// assert_eq!(config.hourly_wage, None);
/// assert!(!config.night);
/// ```
pub fn resolve_pay_info(record: &AttendanceRecord) -> PayConfig {
    match &record.pay_info {
        Some(PayInfoValue::Structured(config)) => config.clone(),
        Some(PayInfoValue::Encoded(raw)) => serde_json::from_str(raw).unwrap_or_default(),
        None => PayConfig::default(),
    }
}

/// Returns the configuration's hourly wage, falling back to
/// [`DEFAULT_MINIMUM_WAGE`] when none is set.
pub fn effective_wage(config: &PayConfig) -> i64 {
    config.hourly_wage.unwrap_or(DEFAULT_MINIMUM_WAGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_record(pay_info: Option<PayInfoValue>) -> AttendanceRecord {
        AttendanceRecord {
            date: NaiveDate::from_ymd_opt(2025, 5, 12).unwrap(),
            start_time: Some("09:00".to_string()),
            end_time: Some("17:00".to_string()),
            pay_info,
        }
    }

    // ==========================================================================
    // PI-001: structured configuration passes through unchanged
    // ==========================================================================
    #[test]
    fn test_pi_001_structured_passthrough() {
        let config = PayConfig {
            hourly_wage: Some(11000),
            night: true,
            overtime: false,
            weekly_allowance: true,
            holiday: false,
        };
        let record = make_record(Some(PayInfoValue::Structured(config.clone())));

        assert_eq!(resolve_pay_info(&record), config);
    }

    // ==========================================================================
    // PI-002: encoded configuration is decoded
    // ==========================================================================
    #[test]
    fn test_pi_002_encoded_decodes() {
        let raw = r#"{"hourPrice": 9860, "night": true, "wHoliday": true}"#;
        let record = make_record(Some(PayInfoValue::Encoded(raw.to_string())));

        let config = resolve_pay_info(&record);
        assert_eq!(config.hourly_wage, Some(9860));
        assert!(config.night);
        assert!(config.weekly_allowance);
        assert!(!config.overtime);
    }

    // ==========================================================================
    // PI-003: malformed encoded configuration degrades to empty
    // ==========================================================================
    #[test]
    fn test_pi_003_malformed_encoded_degrades() {
        let record = make_record(Some(PayInfoValue::Encoded("{not json".to_string())));
        assert_eq!(resolve_pay_info(&record), PayConfig::default());
    }

    // ==========================================================================
    // PI-004: absent configuration degrades to empty
    // ==========================================================================
    #[test]
    fn test_pi_004_absent_degrades() {
        let record = make_record(None);
        assert_eq!(resolve_pay_info(&record), PayConfig::default());
    }

    // ==========================================================================
    // PI-005: encoded configuration with wrong top-level shape degrades
    // ==========================================================================
    #[test]
    fn test_pi_005_encoded_non_object_degrades() {
        let record = make_record(Some(PayInfoValue::Encoded("[1, 2, 3]".to_string())));
        assert_eq!(resolve_pay_info(&record), PayConfig::default());
    }

    // ==========================================================================
    // PI-006: wage falls back to the statutory minimum
    // ==========================================================================
    #[test]
    fn test_pi_006_wage_fallback() {
        assert_eq!(effective_wage(&PayConfig::default()), DEFAULT_MINIMUM_WAGE);

        let config = PayConfig {
            hourly_wage: Some(12000),
            ..PayConfig::default()
        };
        assert_eq!(effective_wage(&config), 12000);
    }
}

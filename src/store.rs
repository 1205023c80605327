//! Attendance record storage.
//!
//! This module provides the [`AttendanceStore`] trait for fetching
//! attendance records over a date range, and [`JsonStore`], a file-backed
//! implementation that loads the full record set from a JSON document.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::models::AttendanceRecord;

/// A source of attendance records.
///
/// The calculation API is written against this trait so that handlers can
/// be exercised in tests with an in-memory record set.
pub trait AttendanceStore: Send + Sync {
    /// Returns all records whose date falls within `start..=end`,
    /// in stored order.
    fn fetch_records(&self, start: NaiveDate, end: NaiveDate) -> EngineResult<Vec<AttendanceRecord>>;
}

/// An attendance store backed by a JSON file.
///
/// The file holds a single JSON array of attendance records. The whole
/// array is read once at startup and served from memory afterwards.
///
/// # Example
///
/// ```no_run
/// use shiftpay_engine::store::JsonStore;
///
/// let store = JsonStore::load("./data/attendance.json")?;
/// # Ok::<(), shiftpay_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct JsonStore {
    records: Vec<AttendanceRecord>,
}

impl JsonStore {
    /// Loads attendance records from the specified JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to a file containing a JSON array of records
    ///
    /// # Returns
    ///
    /// Returns a `JsonStore` on success, or an error if the file is
    /// missing or does not parse as an attendance record array.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::StoreNotFound {
            path: path_str.clone(),
        })?;

        let records: Vec<AttendanceRecord> =
            serde_json::from_str(&content).map_err(|e| EngineError::StoreParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Ok(Self { records })
    }

    /// Creates a store from an in-memory record set.
    pub fn from_records(records: Vec<AttendanceRecord>) -> Self {
        Self { records }
    }

    /// Returns the number of records held by the store.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl AttendanceStore for JsonStore {
    fn fetch_records(&self, start: NaiveDate, end: NaiveDate) -> EngineResult<Vec<AttendanceRecord>> {
        Ok(self
            .records
            .iter()
            .filter(|r| r.date >= start && r.date <= end)
            .cloned()
            .collect())
    }
}

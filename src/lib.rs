//! Shift payroll engine for hourly work under Korean statutory pay rules.
//!
//! This crate calculates pay from stored attendance records, covering base
//! pay, the night, overtime and holiday premiums, the weekly-rest allowance
//! and withholding tax. It also estimates pay from a synthetic work profile
//! and exposes both paths over a small HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

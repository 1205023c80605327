//! HTTP API module for the shift pay engine.
//!
//! This module provides the REST API endpoints for calculating pay from
//! stored attendance records and for manual estimation from a synthetic
//! work profile.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculateParams;
pub use response::{ApiError, CalculationResponse};
pub use state::AppState;

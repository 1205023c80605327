//! HTTP request handlers for the shift pay engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{aggregate_pay, calculate_manual_pay};
use crate::models::{CalcMode, ManualProfile};

use super::request::CalculateParams;
use super::response::{ApiError, ApiErrorResponse, CalculationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    // Permissive CORS so browser clients can call the engine directly
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root_handler))
        .route("/calculate", get(calculate_handler))
        .route("/manual-calculate", post(manual_calculate_handler))
        .layer(cors)
        .with_state(state)
}

/// Handler for GET / endpoint.
///
/// Returns a small service banner so deployments can be probed.
async fn root_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Handler for GET /calculate endpoint.
///
/// Aggregates stored attendance records over an inclusive date range and
/// returns the pay totals for the requested mode.
async fn calculate_handler(
    State(state): State<AppState>,
    params: Result<Query<CalculateParams>, QueryRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();

    let Query(params) = match params {
        Ok(query) => query,
        Err(rejection) => {
            let body_text = rejection.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "Query rejection"
            );
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(ApiError::new("INVALID_QUERY", body_text)),
            )
                .into_response();
        }
    };

    info!(
        correlation_id = %correlation_id,
        start_date = %params.start_date,
        end_date = %params.end_date,
        "Processing calculation request"
    );

    let mode = match params
        .mode
        .as_deref()
        .unwrap_or("settled")
        .parse::<CalcMode>()
    {
        Ok(mode) => mode,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Unknown calculation mode"
            );
            let api_error: ApiErrorResponse = err.into();
            return (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response();
        }
    };

    // Perform the calculation
    let start_time = Instant::now();
    let result = state
        .store()
        .fetch_records(params.start_date, params.end_date)
        .and_then(|records| aggregate_pay(&records, mode));

    match result {
        Ok(totals) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                mode = %mode,
                gross_pay = totals.gross_with_allowance,
                duration_us = duration.as_micros(),
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(CalculationResponse {
                    calculation_id: Uuid::new_v4(),
                    timestamp: Utc::now(),
                    engine_version: env!("CARGO_PKG_VERSION").to_string(),
                    start_date: params.start_date,
                    end_date: params.end_date,
                    mode: mode.to_string(),
                    totals,
                }),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for POST /manual-calculate endpoint.
///
/// Estimates pay from a synthetic work profile without touching stored
/// records. The estimate itself cannot fail, so any error here is a
/// malformed request body.
async fn manual_calculate_handler(
    payload: Result<Json<ManualProfile>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing manual calculation request");

    // Handle JSON parsing errors
    let profile = match payload {
        Ok(Json(profile)) => profile,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // The body text carries the detailed serde error
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Distinguish missing required fields from shape errors
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let result = calculate_manual_pay(&profile);
    info!(
        correlation_id = %correlation_id,
        gross_pay = result.gross_pay,
        net_pay = result.net_pay,
        "Manual calculation completed"
    );
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(result),
    )
        .into_response()
}

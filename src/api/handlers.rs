//! HTTP request handlers for the shift rotation API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::NaiveDate;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::AssignmentDecision;
use crate::rotation::plant_date;

use super::request::{DateQuery, ValidateAssignmentRequest};
use super::response::{
    ActiveResponse, ApiError, ApiErrorResponse, GroupSlotResponse, RosterResponse,
    SlotHolderResponse, ValidationResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/slots", get(slots_handler))
        .route("/slots/:slot/group", get(slot_holder_handler))
        .route("/groups/:group/slot", get(group_slot_handler))
        .route("/roster", get(roster_handler))
        .route("/active", get(active_handler))
        .route("/assignments/validate", post(validate_handler))
        .with_state(state)
}

/// Handler for GET /slots.
async fn slots_handler(State(state): State<AppState>) -> Response {
    Json(state.rotation().catalog()).into_response()
}

/// Handler for GET /groups/:group/slot.
async fn group_slot_handler(
    State(state): State<AppState>,
    Path(group): Path<String>,
    query: Result<Query<DateQuery>, QueryRejection>,
) -> Result<Response, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let date = state.date_or_today(date_param(query, correlation_id)?);
    let rotation = state.rotation();

    let slot = rotation.slot_for_group(&group, date).map_err(|err| {
        warn!(correlation_id = %correlation_id, error = %err, "Slot lookup failed");
        ApiErrorResponse::from(err)
    })?;
    info!(
        correlation_id = %correlation_id,
        group = %group,
        %date,
        slot = %slot.id,
        "Resolved slot for group"
    );

    Ok(Json(GroupSlotResponse {
        group: group.trim(),
        date,
        week_index: rotation.week_index(date),
        slot,
    })
    .into_response())
}

/// Handler for GET /slots/:slot/group.
///
/// `:slot` accepts a slot id or a display name.
async fn slot_holder_handler(
    State(state): State<AppState>,
    Path(slot_key): Path<String>,
    query: Result<Query<DateQuery>, QueryRejection>,
) -> Result<Response, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let date = state.date_or_today(date_param(query, correlation_id)?);
    let rotation = state.rotation();

    let unknown_slot = || {
        warn!(correlation_id = %correlation_id, slot = %slot_key, "Unknown slot");
        ApiErrorResponse::from(EngineError::UnknownSlot {
            slot: slot_key.clone(),
        })
    };
    let slot = rotation.catalog().find(&slot_key).ok_or_else(unknown_slot)?;
    let group = rotation
        .group_for_slot(&slot.id, date)
        .ok_or_else(unknown_slot)?;
    info!(correlation_id = %correlation_id, slot = %slot.id, %date, group, "Resolved group for slot");

    Ok(Json(SlotHolderResponse { slot, date, group }).into_response())
}

/// Handler for GET /roster.
async fn roster_handler(
    State(state): State<AppState>,
    query: Result<Query<DateQuery>, QueryRejection>,
) -> Result<Response, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let date = state.date_or_today(date_param(query, correlation_id)?);
    let rotation = state.rotation();

    Ok(Json(RosterResponse {
        date,
        week_index: rotation.week_index(date),
        entries: rotation.roster_for(date),
    })
    .into_response())
}

/// Handler for GET /active.
async fn active_handler(State(state): State<AppState>) -> Result<Response, ApiErrorResponse> {
    let now = state.clock().now();
    let rotation = state.rotation();

    let slot = rotation.active_slot(now).ok_or_else(|| {
        ApiErrorResponse::from(EngineError::UnknownSlot {
            slot: format!("active at {}", now),
        })
    })?;
    let group = rotation.active_group(now).ok_or_else(|| {
        ApiErrorResponse::from(EngineError::UnknownSlot {
            slot: slot.id.clone(),
        })
    })?;

    Ok(Json(ActiveResponse {
        now,
        date: plant_date(now, rotation.zone()),
        slot,
        group,
    })
    .into_response())
}

/// Handler for POST /assignments/validate.
///
/// Always answers 200 for a well-formed body: blocked assignments are a
/// normal outcome, and unknown groups fail open.
async fn validate_handler(
    State(state): State<AppState>,
    payload: Result<Json<ValidateAssignmentRequest>, JsonRejection>,
) -> Result<Response, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing assignment validation");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(correlation_id = %correlation_id, error = %body_text, "JSON data error");
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return Err(ApiErrorResponse::bad_request(error));
        }
    };

    let employee = &request.employee;
    let group = request
        .group
        .as_deref()
        .or(employee.default_group.as_deref())
        .unwrap_or_default();

    let validator = state.validator();
    let evaluation = validator.evaluate(employee, group, request.date);
    let indeterminate = evaluation.is_indeterminate();
    if indeterminate {
        warn!(
            correlation_id = %correlation_id,
            employee_id = %employee.id,
            group,
            "Slot not resolved; allowing assignment"
        );
    }

    let tags = evaluation.tags.clone();
    let slot_id = evaluation.slot_id.clone();
    let decision = AssignmentDecision::from(evaluation);
    info!(
        correlation_id = %correlation_id,
        employee_id = %employee.id,
        group,
        date = %request.date,
        allowed = decision.allowed,
        "Assignment validated"
    );

    Ok(Json(ValidationResponse {
        decision,
        tags,
        slot_id,
        indeterminate,
    })
    .into_response())
}

/// Extracts the optional date, turning a bad query into a 400.
fn date_param(
    query: Result<Query<DateQuery>, QueryRejection>,
    correlation_id: Uuid,
) -> Result<Option<NaiveDate>, ApiErrorResponse> {
    match query {
        Ok(Query(q)) => Ok(q.date),
        Err(rejection) => {
            warn!(correlation_id = %correlation_id, error = %rejection, "Invalid query");
            Err(ApiErrorResponse::bad_request(ApiError::with_details(
                "INVALID_DATE",
                "date must be formatted as YYYY-MM-DD",
                rejection.body_text(),
            )))
        }
    }
}

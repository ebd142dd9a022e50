//! Response types for the shift rotation API.
//!
//! This module defines the success payloads and the error response
//! structures for the HTTP API.

use std::collections::BTreeSet;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{AssignmentDecision, RestrictionTag, Slot};
use crate::rotation::RosterEntry;

/// Body of `GET /groups/:group/slot`.
#[derive(Debug, Clone, Serialize)]
pub struct GroupSlotResponse<'a> {
    /// The group asked about.
    pub group: &'a str,
    /// The plant calendar day.
    pub date: NaiveDate,
    /// Weeks since the anchor week.
    pub week_index: i64,
    /// The slot the group works.
    pub slot: &'a Slot,
}

/// Body of `GET /slots/:slot/group`.
#[derive(Debug, Clone, Serialize)]
pub struct SlotHolderResponse<'a> {
    /// The resolved slot.
    pub slot: &'a Slot,
    /// The plant calendar day.
    pub date: NaiveDate,
    /// The group holding the slot.
    pub group: &'a str,
}

/// Body of `GET /roster`.
#[derive(Debug, Clone, Serialize)]
pub struct RosterResponse<'a> {
    /// The plant calendar day.
    pub date: NaiveDate,
    /// Weeks since the anchor week.
    pub week_index: i64,
    /// One entry per group, in slot order.
    pub entries: Vec<RosterEntry<'a>>,
}

/// Body of `GET /active`.
#[derive(Debug, Clone, Serialize)]
pub struct ActiveResponse<'a> {
    /// The instant the clock reported.
    pub now: DateTime<Utc>,
    /// That instant's plant calendar day.
    pub date: NaiveDate,
    /// The slot on duty.
    pub slot: &'a Slot,
    /// The group on duty.
    pub group: &'a str,
}

/// Body of `POST /assignments/validate`.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResponse {
    /// The fail-open decision.
    #[serde(flatten)]
    pub decision: AssignmentDecision,
    /// Tags derived from the note.
    pub tags: BTreeSet<RestrictionTag>,
    /// Slot the group works on the date, when resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot_id: Option<String>,
    /// True when the slot could not be resolved and the decision failed open.
    pub indeterminate: bool,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::UnknownGroup { group } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "UNKNOWN_GROUP",
                    message,
                    format!("Group '{}' is not part of the rotation", group),
                ),
            },
            EngineError::UnknownSlot { slot } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "UNKNOWN_SLOT",
                    message,
                    format!("'{}' matches neither a slot id nor a display name", slot),
                ),
            },
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidConfig { .. }
            | EngineError::InvalidTimeZone { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
        }
    }
}

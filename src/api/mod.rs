//! HTTP API module for the shift rotation engine.
//!
//! This is the process boundary: the only layer that reads the real clock,
//! through the [`Clock`](crate::rotation::Clock) held in [`AppState`].

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{DateQuery, ValidateAssignmentRequest};
pub use response::{ApiError, ApiErrorResponse, ValidationResponse};
pub use state::AppState;

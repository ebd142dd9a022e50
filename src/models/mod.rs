//! Core data models for the shift rotation engine.
//!
//! This module contains the domain values shared by the rotation engine,
//! the constraint validator and the HTTP layer.

mod decision;
mod employee;
mod restriction;
mod slot;

pub use decision::{AssignmentDecision, Evaluation, Outcome};
pub use employee::Employee;
pub use restriction::RestrictionTag;
pub use slot::Slot;

pub(crate) use slot::second_of_day;

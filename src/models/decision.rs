//! Assignment decision types.
//!
//! [`Evaluation`] is the full tri-state answer of the validator;
//! [`AssignmentDecision`] is the fail-open view callers persist against.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::RestrictionTag;

/// Whether an assignment may be saved.
///
/// `reason` is present exactly when `allowed` is false. A `warning` may
/// accompany either outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentDecision {
    /// True if the assignment may be saved.
    pub allowed: bool,
    /// Why the assignment was blocked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Something the planner should double-check.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl AssignmentDecision {
    /// An unconditional approval.
    pub fn allow() -> Self {
        Self {
            allowed: true,
            reason: None,
            warning: None,
        }
    }

    /// A rejection with the given reason.
    pub fn block(reason: impl Into<String>) -> Self {
        Self {
            allowed: false,
            reason: Some(reason.into()),
            warning: None,
        }
    }

    /// Attaches a warning.
    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warning = Some(warning.into());
        self
    }
}

/// The three ways a validation can end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// No rule blocks the assignment.
    Allowed,
    /// A restriction rule blocks the assignment.
    Blocked {
        /// Message naming the employee and the slot.
        reason: String,
    },
    /// Restrictions exist but the slot could not be resolved.
    Indeterminate {
        /// Why the slot lookup failed.
        cause: String,
    },
}

/// Everything the validator learned about one (employee, group, date).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// The verdict.
    pub outcome: Outcome,
    /// Tags derived from the employee note.
    pub tags: BTreeSet<RestrictionTag>,
    /// Id of the slot the group works on the date, when it was resolved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot_id: Option<String>,
    /// Planner warning, independent of the verdict.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl Evaluation {
    /// Returns true if the slot lookup failed.
    pub fn is_indeterminate(&self) -> bool {
        matches!(self.outcome, Outcome::Indeterminate { .. })
    }
}

impl From<Evaluation> for AssignmentDecision {
    /// Collapses the evaluation, treating an indeterminate outcome as allowed.
    fn from(evaluation: Evaluation) -> Self {
        let decision = match evaluation.outcome {
            Outcome::Allowed | Outcome::Indeterminate { .. } => AssignmentDecision::allow(),
            Outcome::Blocked { reason } => AssignmentDecision::block(reason),
        };
        match evaluation.warning {
            Some(warning) => decision.with_warning(warning),
            None => decision,
        }
    }
}

//! Restriction tags derived from employee notes.

use serde::{Deserialize, Serialize};

/// A medical or contractual limitation category.
///
/// Tags are derived fresh from the employee's free-text note on every
/// validation call and are never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestrictionTag {
    /// The employee is on statutory disability leave arrangements.
    DisabilityLeave,
    /// The employee must not work the night slot.
    NoNightShift,
    /// The employee must not work the slot mapped to chemical exposure.
    NoChemicalRisk,
    /// The employee works reduced hours.
    PartTime,
}

impl RestrictionTag {
    /// All tags, in sort order.
    pub const ALL: [RestrictionTag; 4] = [
        RestrictionTag::DisabilityLeave,
        RestrictionTag::NoNightShift,
        RestrictionTag::NoChemicalRisk,
        RestrictionTag::PartTime,
    ];
}

impl std::fmt::Display for RestrictionTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RestrictionTag::DisabilityLeave => write!(f, "disability leave"),
            RestrictionTag::NoNightShift => write!(f, "no night shift"),
            RestrictionTag::NoChemicalRisk => write!(f, "no chemical risk"),
            RestrictionTag::PartTime => write!(f, "part time"),
        }
    }
}

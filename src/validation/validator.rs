//! The assignment constraint validator.
//!
//! Decides whether an employee may be assigned to a group on a date, given
//! the restrictions in their note and the slot the group works that day.
//!
//! Rules, checked in order against the resolved slot:
//! 1. `no_night_shift` on the night slot blocks.
//! 2. `no_chemical_risk` on the chemical exposure slot blocks.
//! 3. `part_time`, when nothing blocked, allows with a warning.
//!
//! If the slot cannot be resolved (unknown group) the evaluation is
//! [`Outcome::Indeterminate`], and [`ConstraintValidator::can_assign`]
//! treats it as allowed: a lookup gap must not stop planners from saving.
//! Callers that want to refuse instead should use
//! [`ConstraintValidator::evaluate`].

use std::collections::BTreeSet;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::config::PlantConfig;
use crate::models::{AssignmentDecision, Employee, Evaluation, Outcome, RestrictionTag, Slot};
use crate::rotation::Rotation;

use super::tags::{KeywordTagDeriver, TagDeriver};

/// Stateless validator over a rotation and a tag deriver.
#[derive(Debug, Clone)]
pub struct ConstraintValidator<D = KeywordTagDeriver> {
    rotation: Rotation,
    deriver: D,
    night_slot: String,
    chemical_exposure_slot: String,
}

impl ConstraintValidator<KeywordTagDeriver> {
    /// Builds a validator using the configured keyword table.
    pub fn new(config: &PlantConfig) -> Self {
        Self::with_deriver(
            config,
            KeywordTagDeriver::from_config(config.restrictions()),
        )
    }
}

impl Default for ConstraintValidator<KeywordTagDeriver> {
    fn default() -> Self {
        Self::new(&PlantConfig::default())
    }
}

impl<D: TagDeriver> ConstraintValidator<D> {
    /// Builds a validator with a custom tag source.
    pub fn with_deriver(config: &PlantConfig, deriver: D) -> Self {
        let rotation = Rotation::new(config);
        let rules = &config.restrictions().rules;
        // rule slots are checked against the catalog when the config is built
        let canonical = |key: &str| {
            rotation
                .catalog()
                .find(key)
                .map_or_else(|| key.to_string(), |slot| slot.id.clone())
        };
        let night_slot = canonical(&rules.night_slot);
        let chemical_exposure_slot = canonical(&rules.chemical_exposure_slot);

        Self {
            rotation,
            deriver,
            night_slot,
            chemical_exposure_slot,
        }
    }

    /// The rotation the validator resolves slots with.
    pub fn rotation(&self) -> &Rotation {
        &self.rotation
    }

    /// Tags derived from a note.
    pub fn derive_tags(&self, note: Option<&str>) -> BTreeSet<RestrictionTag> {
        self.deriver.derive_tags(note)
    }

    /// Full tri-state evaluation of assigning `employee` to `group` on `date`.
    pub fn evaluate(&self, employee: &Employee, group: &str, date: NaiveDate) -> Evaluation {
        let tags = self.derive_tags(employee.restriction_note.as_deref());
        debug!(employee = %employee.id, group, %date, ?tags, "Derived restriction tags");

        if tags.is_empty() {
            return Evaluation {
                outcome: Outcome::Allowed,
                tags,
                slot_id: None,
                warning: None,
            };
        }

        match self.rotation.slot_for_group(group, date) {
            Ok(slot) => self.apply_rules(employee, tags, slot),
            Err(err) => {
                let warning = part_time_warning(employee, &tags);
                Evaluation {
                    outcome: Outcome::Indeterminate {
                        cause: err.to_string(),
                    },
                    tags,
                    slot_id: None,
                    warning,
                }
            }
        }
    }

    /// Whether `employee` may be assigned to `group` on `date`.
    ///
    /// Never blocks because of a failed slot lookup; see the module docs.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_rota::config::PlantConfig;
    /// use shift_rota::models::Employee;
    /// use shift_rota::validation::ConstraintValidator;
    /// use chrono::NaiveDate;
    ///
    /// let validator = ConstraintValidator::new(&PlantConfig::default());
    /// let employee = Employee::new("emp_001", "Rossi Mario").with_note("no night shifts");
    /// let anchor_monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    ///
    /// // group B works nights during the anchor week
    /// let decision = validator.can_assign(&employee, "B", anchor_monday);
    /// assert!(!decision.allowed);
    /// assert!(decision.reason.unwrap().contains("Rossi Mario"));
    ///
    /// // group C works mornings
    /// assert!(validator.can_assign(&employee, "C", anchor_monday).allowed);
    /// ```
    pub fn can_assign(&self, employee: &Employee, group: &str, date: NaiveDate) -> AssignmentDecision {
        let evaluation = self.evaluate(employee, group, date);
        if let Outcome::Indeterminate { cause } = &evaluation.outcome {
            warn!(
                employee = %employee.id,
                group,
                %date,
                cause = %cause,
                "Slot not resolved; allowing assignment"
            );
        }
        evaluation.into()
    }

    /// Like [`can_assign`](Self::can_assign), using the employee's default group.
    ///
    /// An employee without a default group is treated like an unknown group.
    pub fn can_assign_default_group(&self, employee: &Employee, date: NaiveDate) -> AssignmentDecision {
        let group = employee.default_group.as_deref().unwrap_or_default();
        self.can_assign(employee, group, date)
    }

    fn apply_rules(
        &self,
        employee: &Employee,
        tags: BTreeSet<RestrictionTag>,
        slot: &Slot,
    ) -> Evaluation {
        let blocked_by = if tags.contains(&RestrictionTag::NoNightShift) && slot.id == self.night_slot
        {
            Some("the employee may not work night shifts")
        } else if tags.contains(&RestrictionTag::NoChemicalRisk)
            && slot.id == self.chemical_exposure_slot
        {
            Some("the employee may not be exposed to chemical risk")
        } else {
            None
        };

        let (outcome, warning) = match blocked_by {
            Some(why) => (
                Outcome::Blocked {
                    reason: format!(
                        "{} cannot be assigned to the {}: {}",
                        employee.display_name, slot.display_name, why
                    ),
                },
                None,
            ),
            None => (Outcome::Allowed, part_time_warning(employee, &tags)),
        };

        Evaluation {
            outcome,
            tags,
            slot_id: Some(slot.id.clone()),
            warning,
        }
    }
}

fn part_time_warning(employee: &Employee, tags: &BTreeSet<RestrictionTag>) -> Option<String> {
    tags.contains(&RestrictionTag::PartTime).then(|| {
        format!(
            "{} is part time: verify the schedule before confirming",
            employee.display_name
        )
    })
}

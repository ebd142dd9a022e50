//! Employee model.
//!
//! The employee record is owned by the persistence layer; the scheduler only
//! reads the fields it needs to validate an assignment.

use serde::{Deserialize, Serialize};

/// An employee as seen by the constraint validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Name shown in validation messages.
    pub display_name: String,
    /// Free-text medical or contractual restriction note, as typed by an operator.
    #[serde(default)]
    pub restriction_note: Option<String>,
    /// The group the employee normally works with.
    #[serde(default)]
    pub default_group: Option<String>,
}

impl Employee {
    /// Creates an employee with no restriction note and no default group.
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            restriction_note: None,
            default_group: None,
        }
    }

    /// Sets the restriction note.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_rota::models::Employee;
    ///
    /// let employee = Employee::new("emp_001", "Rossi Mario").with_note("no night shifts");
    /// assert_eq!(employee.restriction_note.as_deref(), Some("no night shifts"));
    /// ```
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.restriction_note = Some(note.into());
        self
    }

    /// Sets the default group.
    pub fn with_default_group(mut self, group: impl Into<String>) -> Self {
        self.default_group = Some(group.into());
        self
    }
}

//! Request types for the shift rotation API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Employee;

/// Optional `?date=YYYY-MM-DD` query parameter.
///
/// When absent the handlers use the plant's current calendar day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DateQuery {
    /// The plant calendar day to resolve.
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Request body for `POST /assignments/validate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateAssignmentRequest {
    /// The employee to assign.
    pub employee: Employee,
    /// Target group; the employee's default group when omitted.
    #[serde(default)]
    pub group: Option<String>,
    /// The plant calendar day of the assignment.
    pub date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_validate_request() {
        let json = r#"{
            "employee": {
                "id": "emp_001",
                "display_name": "Rossi Mario",
                "restriction_note": "no night"
            },
            "group": "B",
            "date": "2024-01-01"
        }"#;

        let request: ValidateAssignmentRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.group.as_deref(), Some("B"));
        assert_eq!(request.date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(request.employee.restriction_note.as_deref(), Some("no night"));
    }

    #[test]
    fn test_group_is_optional() {
        let json = r#"{
            "employee": { "id": "emp_001", "display_name": "Rossi Mario", "default_group": "C" },
            "date": "2024-01-01"
        }"#;

        let request: ValidateAssignmentRequest = serde_json::from_str(json).unwrap();
        assert!(request.group.is_none());
    }

    #[test]
    fn test_missing_date_is_rejected() {
        let json = r#"{ "employee": { "id": "e", "display_name": "E" } }"#;
        let result: Result<ValidateAssignmentRequest, _> = serde_json::from_str(json);
        assert!(result.unwrap_err().to_string().contains("missing field `date`"));
    }
}

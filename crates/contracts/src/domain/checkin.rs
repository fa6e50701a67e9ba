use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Grants a staff account permission to scan tickets at one event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffAssignment {
    pub id: Uuid,
    pub event_id: Uuid,
    pub email: String,
    pub display_name: Option<String>,
    pub assigned_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignStaffDto {
    pub email: String,
}

impl AssignStaffDto {
    pub fn validate(&self) -> Result<(), String> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err("Email is required".into());
        }
        // Server does the real validation; this only catches obvious typos.
        if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
            return Err("Enter a valid email address".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_staff_validation() {
        let ok = AssignStaffDto {
            email: "staff@example.com".into(),
        };
        assert!(ok.validate().is_ok());

        for bad in ["", "   ", "no-at-sign", "@lead", "trail@"] {
            let dto = AssignStaffDto { email: bad.into() };
            assert!(dto.validate().is_err(), "accepted {:?}", bad);
        }
    }
}

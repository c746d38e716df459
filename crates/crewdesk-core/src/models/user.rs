use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// Access level of a dashboard account.
///
/// Super admins manage companies across tenants; admins manage a single
/// company; employees see their own records and company notices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    Admin,
    Employee,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::SuperAdmin => write!(f, "Super Admin"),
            Role::Admin => write!(f, "Admin"),
            Role::Employee => write!(f, "Employee"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Tenant the account belongs to. Absent for super admins.
    #[serde(rename = "companyId")]
    pub company_id: Option<i64>,
    #[serde(rename = "employeeId")]
    pub employee_id: Option<i64>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    /// Whether the account can manage records for the given company.
    pub fn can_manage(&self, company_id: i64) -> bool {
        match self.role {
            Role::SuperAdmin => true,
            Role::Admin => self.company_id == Some(company_id),
            Role::Employee => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parses_snake_case() {
        let role: Role = serde_json::from_str("\"super_admin\"").unwrap();
        assert_eq!(role, Role::SuperAdmin);
        let role: Role = serde_json::from_str("\"employee\"").unwrap();
        assert_eq!(role, Role::Employee);
    }

    #[test]
    fn test_can_manage() {
        let admin = User {
            id: 1,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            role: Role::Admin,
            company_id: Some(7),
            employee_id: None,
            created_at: None,
        };
        assert!(admin.can_manage(7));
        assert!(!admin.can_manage(8));

        let root = User {
            role: Role::SuperAdmin,
            company_id: None,
            ..admin.clone()
        };
        assert!(root.can_manage(8));
    }
}

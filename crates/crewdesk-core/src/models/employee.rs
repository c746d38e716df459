use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, Utc};

use super::{Department, Designation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    Active,
    OnLeave,
    Terminated,
}

impl std::fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmployeeStatus::Active => write!(f, "Active"),
            EmployeeStatus::OnLeave => write!(f, "On Leave"),
            EmployeeStatus::Terminated => write!(f, "Terminated"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    #[serde(rename = "companyId")]
    pub company_id: i64,
    #[serde(rename = "departmentId")]
    pub department_id: Option<i64>,
    #[serde(rename = "designationId")]
    pub designation_id: Option<i64>,
    // Expanded relations, present when the backend joins them in
    pub department: Option<Department>,
    pub designation: Option<Designation>,
    pub status: EmployeeStatus,
    #[serde(rename = "joiningDate")]
    pub joining_date: Option<NaiveDate>,
    pub salary: Option<f64>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Department name for display, falling back to a placeholder when the
    /// relation was not expanded.
    pub fn department_display(&self) -> &str {
        self.department
            .as_ref()
            .map(|d| d.name.as_str())
            .unwrap_or("-")
    }

    pub fn designation_display(&self) -> &str {
        self.designation
            .as_ref()
            .map(|d| d.name.as_str())
            .unwrap_or("-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_employee_with_expanded_relations() {
        let json = r#"{
            "id": 42,
            "firstName": "Priya",
            "lastName": "Nair",
            "email": "priya.nair@acme.test",
            "phone": "5551234567",
            "companyId": 3,
            "departmentId": 9,
            "designationId": 17,
            "department": {"id": 9, "name": "Engineering", "companyId": 3},
            "designation": {"id": 17, "name": "Staff Engineer", "companyId": 3, "departmentId": 9},
            "status": "active",
            "joiningDate": "2021-04-12",
            "salary": 98000.0,
            "createdAt": "2021-04-12T09:30:00Z"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.full_name(), "Priya Nair");
        assert_eq!(employee.status, EmployeeStatus::Active);
        assert_eq!(employee.department_display(), "Engineering");
        assert_eq!(employee.designation_display(), "Staff Engineer");
        assert_eq!(
            employee.joining_date,
            NaiveDate::from_ymd_opt(2021, 4, 12)
        );
    }

    #[test]
    fn test_parse_employee_without_relations() {
        let json = r#"{
            "id": 7,
            "firstName": "Sam",
            "lastName": "Okafor",
            "email": "sam@acme.test",
            "companyId": 3,
            "status": "on_leave"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.status, EmployeeStatus::OnLeave);
        assert_eq!(employee.department_display(), "-");
        assert_eq!(employee.status.to_string(), "On Leave");
    }
}

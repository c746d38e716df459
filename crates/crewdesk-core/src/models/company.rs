use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// A tenant organization. All departments, designations, employees and
/// notices are scoped to one company.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub website: Option<String>,
    #[serde(rename = "employeeCount")]
    pub employee_count: Option<i64>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Company {
    pub fn display_employee_count(&self) -> String {
        match self.employee_count {
            Some(count) => format!("{} employees", count),
            None => "Unknown".to_string(),
        }
    }
}

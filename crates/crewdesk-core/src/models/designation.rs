use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// A job title within a department (e.g. "Senior Engineer" in Engineering).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Designation {
    pub id: i64,
    pub name: String,
    #[serde(rename = "companyId")]
    pub company_id: i64,
    #[serde(rename = "departmentId")]
    pub department_id: Option<i64>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

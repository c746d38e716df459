use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    pub id: i64,
    pub name: String,
    #[serde(rename = "companyId")]
    pub company_id: i64,
    pub description: Option<String>,
    #[serde(rename = "employeeCount")]
    pub employee_count: Option<i64>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

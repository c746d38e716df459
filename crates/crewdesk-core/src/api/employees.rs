//! Employees API.

use chrono::NaiveDate;
use serde::Serialize;

use crate::api::client::ApiClient;
use crate::api::query::SortOrder;
use crate::api::ApiError;
use crate::models::{Employee, EmployeeStatus, Paginated};

/// Query parameters for listing employees.
#[derive(Debug, Default, Serialize)]
pub struct ListEmployeesQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Free-text search over name and email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(rename = "companyId", skip_serializing_if = "Option::is_none")]
    pub company_id: Option<i64>,
    #[serde(rename = "departmentId", skip_serializing_if = "Option::is_none")]
    pub department_id: Option<i64>,
    #[serde(rename = "designationId", skip_serializing_if = "Option::is_none")]
    pub designation_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EmployeeStatus>,
    #[serde(rename = "sortBy", skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
}

#[derive(Debug, Serialize)]
pub struct CreateEmployeeRequest {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "companyId")]
    pub company_id: i64,
    #[serde(rename = "departmentId", skip_serializing_if = "Option::is_none")]
    pub department_id: Option<i64>,
    #[serde(rename = "designationId", skip_serializing_if = "Option::is_none")]
    pub designation_id: Option<i64>,
    #[serde(rename = "joiningDate", skip_serializing_if = "Option::is_none")]
    pub joining_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
}

/// All fields optional; only set fields are sent.
#[derive(Debug, Default, Serialize)]
pub struct UpdateEmployeeRequest {
    #[serde(rename = "firstName", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "departmentId", skip_serializing_if = "Option::is_none")]
    pub department_id: Option<i64>,
    #[serde(rename = "designationId", skip_serializing_if = "Option::is_none")]
    pub designation_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EmployeeStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
}

/// Employees API client.
pub struct EmployeesApi {
    client: ApiClient,
}

impl EmployeesApi {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &ListEmployeesQuery) -> Result<Paginated<Employee>, ApiError> {
        self.client.get_with_query("employees", query).await
    }

    pub async fn get(&self, id: i64) -> Result<Employee, ApiError> {
        self.client.get(&format!("employees/{}", id)).await
    }

    pub async fn create(&self, request: &CreateEmployeeRequest) -> Result<Employee, ApiError> {
        self.client.post("employees", request).await
    }

    pub async fn update(
        &self,
        id: i64,
        request: &UpdateEmployeeRequest,
    ) -> Result<Employee, ApiError> {
        self.client.put(&format!("employees/{}", id), request).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("employees/{}", id)).await
    }
}

//! Departments API.

use serde::Serialize;

use crate::api::client::ApiClient;
use crate::api::query::SortOrder;
use crate::api::ApiError;
use crate::models::{Department, Paginated};

/// Query parameters for listing departments.
#[derive(Debug, Default, Serialize)]
pub struct ListDepartmentsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(rename = "companyId", skip_serializing_if = "Option::is_none")]
    pub company_id: Option<i64>,
    #[serde(rename = "sortBy", skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
}

#[derive(Debug, Serialize)]
pub struct CreateDepartmentRequest {
    pub name: String,
    #[serde(rename = "companyId")]
    pub company_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Default, Serialize)]
pub struct UpdateDepartmentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Departments API client.
pub struct DepartmentsApi {
    client: ApiClient,
}

impl DepartmentsApi {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        query: &ListDepartmentsQuery,
    ) -> Result<Paginated<Department>, ApiError> {
        self.client.get_with_query("departments", query).await
    }

    pub async fn get(&self, id: i64) -> Result<Department, ApiError> {
        self.client.get(&format!("departments/{}", id)).await
    }

    pub async fn create(&self, request: &CreateDepartmentRequest) -> Result<Department, ApiError> {
        self.client.post("departments", request).await
    }

    pub async fn update(
        &self,
        id: i64,
        request: &UpdateDepartmentRequest,
    ) -> Result<Department, ApiError> {
        self.client
            .put(&format!("departments/{}", id), request)
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("departments/{}", id)).await
    }
}

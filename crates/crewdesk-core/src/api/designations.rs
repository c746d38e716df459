//! Designations API.

use serde::Serialize;

use crate::api::client::ApiClient;
use crate::api::query::SortOrder;
use crate::api::ApiError;
use crate::models::{Designation, Paginated};

/// Query parameters for listing designations.
#[derive(Debug, Default, Serialize)]
pub struct ListDesignationsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(rename = "companyId", skip_serializing_if = "Option::is_none")]
    pub company_id: Option<i64>,
    #[serde(rename = "departmentId", skip_serializing_if = "Option::is_none")]
    pub department_id: Option<i64>,
    #[serde(rename = "sortBy", skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
}

#[derive(Debug, Serialize)]
pub struct CreateDesignationRequest {
    pub name: String,
    #[serde(rename = "companyId")]
    pub company_id: i64,
    #[serde(rename = "departmentId", skip_serializing_if = "Option::is_none")]
    pub department_id: Option<i64>,
}

#[derive(Debug, Default, Serialize)]
pub struct UpdateDesignationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "departmentId", skip_serializing_if = "Option::is_none")]
    pub department_id: Option<i64>,
}

/// Designations API client.
pub struct DesignationsApi {
    client: ApiClient,
}

impl DesignationsApi {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        query: &ListDesignationsQuery,
    ) -> Result<Paginated<Designation>, ApiError> {
        self.client.get_with_query("designations", query).await
    }

    pub async fn get(&self, id: i64) -> Result<Designation, ApiError> {
        self.client.get(&format!("designations/{}", id)).await
    }

    pub async fn create(
        &self,
        request: &CreateDesignationRequest,
    ) -> Result<Designation, ApiError> {
        self.client.post("designations", request).await
    }

    pub async fn update(
        &self,
        id: i64,
        request: &UpdateDesignationRequest,
    ) -> Result<Designation, ApiError> {
        self.client
            .put(&format!("designations/{}", id), request)
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("designations/{}", id)).await
    }
}

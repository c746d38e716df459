//! Companies API. Restricted to super admins server-side.

use serde::Serialize;

use crate::api::client::ApiClient;
use crate::api::query::SortOrder;
use crate::api::ApiError;
use crate::models::{Company, Paginated};

/// Query parameters for listing companies.
#[derive(Debug, Default, Serialize)]
pub struct ListCompaniesQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(rename = "sortBy", skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
}

#[derive(Debug, Serialize)]
pub struct CreateCompanyRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

#[derive(Debug, Default, Serialize)]
pub struct UpdateCompanyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// Companies API client.
pub struct CompaniesApi {
    client: ApiClient,
}

impl CompaniesApi {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &ListCompaniesQuery) -> Result<Paginated<Company>, ApiError> {
        self.client.get_with_query("companies", query).await
    }

    pub async fn get(&self, id: i64) -> Result<Company, ApiError> {
        self.client.get(&format!("companies/{}", id)).await
    }

    pub async fn create(&self, request: &CreateCompanyRequest) -> Result<Company, ApiError> {
        self.client.post("companies", request).await
    }

    pub async fn update(
        &self,
        id: i64,
        request: &UpdateCompanyRequest,
    ) -> Result<Company, ApiError> {
        self.client.put(&format!("companies/{}", id), request).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("companies/{}", id)).await
    }
}

//! Notices API.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::api::client::ApiClient;
use crate::api::query::SortOrder;
use crate::api::ApiError;
use crate::models::{Notice, Paginated};

/// Query parameters for listing notices.
#[derive(Debug, Default, Serialize)]
pub struct ListNoticesQuery {
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
pub struct CreateNoticeRequest {
    pub title: String,
    pub description: String,
    #[serde(rename = "companyId")]
    pub company_id: i64,
    #[serde(rename = "expiresAt", skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Default, Serialize)]
pub struct UpdateNoticeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "expiresAt", skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Notices API client.
pub struct NoticesApi {
    client: ApiClient,
}

impl NoticesApi {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &ListNoticesQuery) -> Result<Paginated<Notice>, ApiError> {
        self.client.get_with_query("notices", query).await
    }

    pub async fn get(&self, id: i64) -> Result<Notice, ApiError> {
        self.client.get(&format!("notices/{}", id)).await
    }

    pub async fn create(&self, request: &CreateNoticeRequest) -> Result<Notice, ApiError> {
        self.client.post("notices", request).await
    }

    pub async fn update(&self, id: i64, request: &UpdateNoticeRequest) -> Result<Notice, ApiError> {
        self.client.put(&format!("notices/{}", id), request).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("notices/{}", id)).await
    }
}

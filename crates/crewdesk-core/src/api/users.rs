//! Users API. Manages dashboard accounts, not employee records.

use serde::Serialize;

use crate::api::client::ApiClient;
use crate::api::query::SortOrder;
use crate::api::ApiError;
use crate::models::{Paginated, Role, User};

/// Query parameters for listing users.
#[derive(Debug, Default, Serialize)]
pub struct ListUsersQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(rename = "companyId", skip_serializing_if = "Option::is_none")]
    pub company_id: Option<i64>,
    #[serde(rename = "sortBy", skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
}

#[derive(Debug, Serialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    #[serde(rename = "companyId", skip_serializing_if = "Option::is_none")]
    pub company_id: Option<i64>,
    #[serde(rename = "employeeId", skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<i64>,
}

#[derive(Debug, Default, Serialize)]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// Setting a new password invalidates the user's other sessions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(rename = "companyId", skip_serializing_if = "Option::is_none")]
    pub company_id: Option<i64>,
}

/// Users API client.
pub struct UsersApi {
    client: ApiClient,
}

impl UsersApi {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &ListUsersQuery) -> Result<Paginated<User>, ApiError> {
        self.client.get_with_query("users", query).await
    }

    pub async fn get(&self, id: i64) -> Result<User, ApiError> {
        self.client.get(&format!("users/{}", id)).await
    }

    pub async fn create(&self, request: &CreateUserRequest) -> Result<User, ApiError> {
        self.client.post("users", request).await
    }

    pub async fn update(&self, id: i64, request: &UpdateUserRequest) -> Result<User, ApiError> {
        self.client.put(&format!("users/{}", id), request).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("users/{}", id)).await
    }
}

//! REST API client module for the CrewDesk backend.
//!
//! The backend authenticates with an HttpOnly session cookie and renews
//! it through `POST /auth/refresh`. `ApiClient` owns that protocol: every
//! request carries the cookie jar, a 401 triggers a single shared refresh
//! and one retry, and the auth endpoints themselves opt out via
//! [`RetryPolicy::Passthrough`].
//!
//! Typed endpoint clients hang off the accessors, e.g.
//! `client.employees().list(&query)`.

pub mod auth;
pub mod client;
pub mod companies;
pub mod departments;
pub mod designations;
pub mod employees;
pub mod error;
pub mod notices;
pub mod query;
pub mod users;

pub use auth::{AuthApi, LoginResponse};
pub use client::{ApiClient, ClientBuilder, RetryPolicy};
pub use companies::{CompaniesApi, CreateCompanyRequest, ListCompaniesQuery, UpdateCompanyRequest};
pub use departments::{
    CreateDepartmentRequest, DepartmentsApi, ListDepartmentsQuery, UpdateDepartmentRequest,
};
pub use designations::{
    CreateDesignationRequest, DesignationsApi, ListDesignationsQuery, UpdateDesignationRequest,
};
pub use employees::{
    CreateEmployeeRequest, EmployeesApi, ListEmployeesQuery, UpdateEmployeeRequest,
};
pub use error::{ApiError, ErrorBody, ErrorMessage};
pub use notices::{CreateNoticeRequest, ListNoticesQuery, NoticesApi, UpdateNoticeRequest};
pub use query::SortOrder;
pub use users::{CreateUserRequest, ListUsersQuery, UpdateUserRequest, UsersApi};

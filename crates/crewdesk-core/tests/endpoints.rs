//! Integration tests for the typed endpoint clients: query-parameter
//! serialization, request bodies, and error-shape normalization.

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crewdesk_core::api::{
    ApiClient, ApiError, CreateDepartmentRequest, CreateEmployeeRequest, ListEmployeesQuery,
    ListNoticesQuery, SortOrder, UpdateEmployeeRequest,
};
use crewdesk_core::models::EmployeeStatus;

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::builder()
        .base_url(server.uri())
        .build()
        .expect("failed to build client")
}

fn priya() -> serde_json::Value {
    json!({
        "id": 42,
        "firstName": "Priya",
        "lastName": "Nair",
        "email": "priya.nair@acme.test",
        "companyId": 3,
        "status": "active"
    })
}

#[tokio::test]
async fn list_serializes_only_set_query_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/employees"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "25"))
        .and(query_param("search", "nair"))
        .and(query_param("departmentId", "9"))
        .and(query_param("status", "active"))
        .and(query_param("order", "desc"))
        .and(query_param_is_missing("companyId"))
        .and(query_param_is_missing("designationId"))
        .and(query_param_is_missing("sortBy"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [priya()],
            "total": 1,
            "page": 2,
            "limit": 25
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let page = client
        .employees()
        .list(&ListEmployeesQuery {
            page: Some(2),
            limit: Some(25),
            search: Some("nair".to_string()),
            department_id: Some(9),
            status: Some(EmployeeStatus::Active),
            order: Some(SortOrder::Desc),
            ..Default::default()
        })
        .await
        .expect("list failed");

    assert_eq!(page.total, 1);
    assert_eq!(page.data[0].full_name(), "Priya Nair");
    assert_eq!(page.total_pages(), 1);
}

#[tokio::test]
async fn create_employee_sends_camel_case_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/employees"))
        .and(body_json(json!({
            "firstName": "Priya",
            "lastName": "Nair",
            "email": "priya.nair@acme.test",
            "companyId": 3,
            "departmentId": 9
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(priya()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let employee = client
        .employees()
        .create(&CreateEmployeeRequest {
            first_name: "Priya".to_string(),
            last_name: "Nair".to_string(),
            email: "priya.nair@acme.test".to_string(),
            phone: None,
            company_id: 3,
            department_id: Some(9),
            designation_id: None,
            joining_date: None,
            salary: None,
        })
        .await
        .expect("create failed");

    assert_eq!(employee.id, 42);
}

#[tokio::test]
async fn update_sends_only_set_fields() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/employees/42"))
        .and(body_json(json!({ "status": "terminated" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 42,
            "firstName": "Priya",
            "lastName": "Nair",
            "email": "priya.nair@acme.test",
            "companyId": 3,
            "status": "terminated"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let employee = client
        .employees()
        .update(
            42,
            &UpdateEmployeeRequest {
                status: Some(EmployeeStatus::Terminated),
                ..Default::default()
            },
        )
        .await
        .expect("update failed");

    assert_eq!(employee.status, EmployeeStatus::Terminated);
}

#[tokio::test]
async fn delete_accepts_no_content() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/employees/42"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.employees().delete(42).await.expect("delete failed");
}

#[tokio::test]
async fn not_found_error_carries_backend_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/employees/9999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Employee with id 9999 not found",
            "statusCode": 404,
            "error": "Not Found"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.employees().get(9999).await.expect_err("should 404");
    match err {
        ApiError::NotFound(message) => assert_eq!(message, "Employee with id 9999 not found"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn validation_error_takes_first_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/departments"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "message": ["name should not be empty", "companyId must be a number"],
            "statusCode": 400,
            "error": "Bad Request"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .departments()
        .create(&CreateDepartmentRequest {
            name: String::new(),
            company_id: 3,
            description: None,
        })
        .await
        .expect_err("should fail validation");
    match err {
        ApiError::BadRequest(message) => assert_eq!(message, "name should not be empty"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn notices_list_filters_by_company() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/notices"))
        .and(query_param("companyId", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "id": 7,
                "title": "Office closed",
                "description": "Closed for the holiday.",
                "companyId": 3
            }],
            "total": 1,
            "page": 1,
            "limit": 10
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let page = client
        .notices()
        .list(&ListNoticesQuery {
            company_id: Some(3),
            ..Default::default()
        })
        .await
        .expect("list failed");

    assert_eq!(page.data[0].title, "Office closed");
    assert!(!page.data[0].is_expired());
}

//! End-to-end HTTP tests over the in-memory store.

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use customer_service::{app, AppState, CustomerService, MemoryCustomerStore, StoreKind};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

const CUSTOMER_URI: &str = "/api/v1/customers";

fn test_app() -> Router {
    let state = AppState {
        customers: CustomerService::new(Arc::new(MemoryCustomerStore::new())),
        store: StoreKind::Memory,
        pool: None,
    };
    app(state)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(b) => builder
            .header("content-type", "application/json")
            .body(Body::from(b.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn register(app: &Router, name: &str, email: &str, age: i32) -> (StatusCode, Value) {
    send(
        app,
        Method::POST,
        CUSTOMER_URI,
        Some(json!({"name": name, "email": email, "age": age})),
    )
    .await
}

#[tokio::test]
async fn can_register_get_and_delete_a_customer() {
    let app = test_app();

    let (status, created) = register(&app, "Alex", "alex@x.com", 21).await;
    assert_eq!(status, StatusCode::OK);
    let id = created["id"].as_i64().expect("assigned id");

    let (status, all) = send(&app, Method::GET, CUSTOMER_URI, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        all,
        json!([{"id": id, "name": "Alex", "email": "alex@x.com", "age": 21}])
    );

    let uri = format!("{CUSTOMER_URI}/{id}");
    let (status, one) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(one, all[0]);

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "not_found");
    assert_eq!(
        body["error"]["message"],
        format!("customer with id [{id}] not found")
    );
}

#[tokio::test]
async fn duplicate_registration_is_a_conflict() {
    let app = test_app();
    register(&app, "Alex", "alex@x.com", 21).await;

    let (status, body) = register(&app, "Alexis", "alex@x.com", 30).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "duplicate_email");

    let (_, all) = send(&app, Method::GET, CUSTOMER_URI, None).await;
    assert_eq!(all.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn update_name_only_changes_name() {
    let app = test_app();
    let (_, created) = register(&app, "Alex", "alex@x.com", 21).await;
    let uri = format!("{CUSTOMER_URI}/{}", created["id"]);

    let (status, updated) = send(&app, Method::PUT, &uri, Some(json!({"name": "foo"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "foo");
    assert_eq!(updated["email"], created["email"]);
    assert_eq!(updated["age"], created["age"]);
    assert_eq!(updated["id"], created["id"]);

    let (_, fetched) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn update_status_mapping() {
    let app = test_app();
    let (_, alex) = register(&app, "Alex", "alex@x.com", 21).await;
    register(&app, "Sam", "sam@x.com", 30).await;
    let uri = format!("{CUSTOMER_URI}/{}", alex["id"]);

    let (status, body) = send(&app, Method::PUT, &uri, Some(json!({"email": "sam@x.com"}))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "duplicate_email");

    let (status, body) = send(
        &app,
        Method::PUT,
        &uri,
        Some(json!({"name": "Alex", "email": "alex@x.com", "age": 21})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "no data changes found");

    let (status, _) = send(
        &app,
        Method::PUT,
        &format!("{CUSTOMER_URI}/999"),
        Some(json!({"age": 5})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, Method::PUT, &uri, Some(json!({"email": "not-an-email"}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "validation_error");
}

#[tokio::test]
async fn delete_missing_customer_is_not_found() {
    let app = test_app();
    let (status, _) = send(&app, Method::DELETE, &format!("{CUSTOMER_URI}/1"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn common_routes_report_health() {
    let app = test_app();
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));

    let (status, body) = send(&app, Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok", "store": "memory"}));

    let (_, body) = send(&app, Method::GET, "/version", None).await;
    assert_eq!(body["name"], "customer-service");
}

#[tokio::test]
async fn info_describes_the_customer_api() {
    let app = test_app();
    let (status, body) = send(&app, Method::GET, "/info", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "customer-service");
    assert_eq!(body["store"], "memory");
    assert_eq!(body["customers"], "/api/v1/customers");
}

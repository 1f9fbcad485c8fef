//! Handler tests for the Items domain
//!
//! These drive the items router directly (no `/api` prefix, no middleware)
//! and check status codes and JSON payloads.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum_helpers::ErrorResponse;
use domain_items::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn app() -> (ItemService<InMemoryItemRepository>, Router) {
    let service = ItemService::new(InMemoryItemRepository::new());
    let router = handlers::router(service.clone());
    (service, router)
}

fn laptop() -> Value {
    json!({
        "name": "Laptop",
        "description": "desc",
        "price": 1299.99,
        "category": "Electronics",
        "stockQuantity": 15
    })
}

#[tokio::test]
async fn test_add_item_returns_201_with_assigned_id() {
    let (_, app) = app();

    let response = app
        .oneshot(json_request("POST", "/addItem", laptop()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let item: Item = json_body(response.into_body()).await;
    assert_eq!(item.id, 1);
    assert_eq!(item.name, "Laptop");
    assert_eq!(item.stock_quantity, 15);
}

#[tokio::test]
async fn test_add_item_ignores_client_id_and_defaults_stock() {
    let (_, app) = app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/addItem",
            json!({
                "id": 500,
                "name": "Phone",
                "description": "desc",
                "price": 899.99,
                "category": "Electronics"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["stockQuantity"], 0);
}

#[tokio::test]
async fn test_add_item_validation_failures_return_400() {
    let invalid_bodies = [
        json!({ "description": "desc", "price": 1.0, "category": "Electronics" }),
        json!({ "name": " ", "description": "desc", "price": 1.0, "category": "Electronics" }),
        json!({ "name": "Laptop", "description": "desc", "category": "Electronics" }),
        json!({ "name": "Laptop", "description": "desc", "price": 0, "category": "Electronics" }),
        json!({ "name": "Laptop", "description": "desc", "price": -10.5, "category": "" }),
        json!({ "name": "Laptop", "description": "desc", "price": "cheap", "category": "Electronics" }),
    ];

    let (service, app) = app();

    for body in invalid_bodies {
        let response = app
            .clone()
            .oneshot(json_request("POST", "/addItem", body.clone()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
    }

    // Nothing reached the store
    assert_eq!(service.count_items().await.unwrap(), 0);
}

#[tokio::test]
async fn test_validation_error_body_lists_fields() {
    let (_, app) = app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/addItem",
            json!({
                "name": "",
                "description": "desc",
                "price": -1,
                "category": "Electronics",
                "stockQuantity": -1
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.error, "VALIDATION_ERROR");
    let details = error.details.unwrap();
    assert!(details.get("name").is_some());
    assert!(details.get("price").is_some());
    // Field names match the request body, not the Rust struct
    assert!(details.get("stockQuantity").is_some());
    assert!(details.get("stock_quantity").is_none());
}

#[tokio::test]
async fn test_missing_price_reports_price_field() {
    let (_, app) = app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/addItem",
            json!({ "name": "Laptop", "description": "desc", "category": "Electronics" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.code, 1001);
    assert!(error.details.unwrap().get("price").is_some());
}

#[tokio::test]
async fn test_get_item_returns_200() {
    let (service, app) = app();
    let created = service
        .create_item(CreateItem {
            name: "Headphones".to_string(),
            description: "desc".to_string(),
            price: Some(299.99),
            category: "Electronics".to_string(),
            stock_quantity: Some(50),
        })
        .await
        .unwrap();

    let response = app
        .oneshot(empty_request("GET", &format!("/{}", created.id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let item: Item = json_body(response.into_body()).await;
    assert_eq!(item, created);
}

#[tokio::test]
async fn test_get_item_returns_404_for_missing() {
    let (_, app) = app();

    let response = app.oneshot(empty_request("GET", "/99")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.error, "NOT_FOUND");
    assert_eq!(error.message, "Item not found with id: 99");
}

#[tokio::test]
async fn test_get_item_with_non_numeric_id_returns_400() {
    let (_, app) = app();

    let response = app.oneshot(empty_request("GET", "/laptop")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_items_returns_insertion_order() {
    let (service, app) = app();
    service.seed_sample_data().await.unwrap();

    let response = app.oneshot(empty_request("GET", "/all")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let items: Vec<Item> = json_body(response.into_body()).await;
    let names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["Laptop", "Smartphone", "Headphones"]);
}

#[tokio::test]
async fn test_summary_reports_item_count() {
    let (service, app) = app();
    service.seed_sample_data().await.unwrap();
    service.delete_item(2).await.unwrap();

    let response = app.oneshot(empty_request("GET", "/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let summary: Value = json_body(response.into_body()).await;
    assert_eq!(summary["message"], "Welcome to E-commerce API");
    assert_eq!(summary["totalItems"], 2);
    assert_eq!(summary["endpoints"].as_object().unwrap().len(), 6);
    assert!(summary["endpoints"].get("POST /api/items/addItem").is_some());
}

#[tokio::test]
async fn test_update_item_overwrites_fields_and_keeps_stock() {
    let (_, app) = app();

    app.clone()
        .oneshot(json_request("POST", "/addItem", laptop()))
        .await
        .unwrap();

    let response = app
        .oneshot(json_request(
            "PUT",
            "/1",
            json!({
                "name": "Laptop Pro",
                "description": "Refreshed",
                "price": 1499.0,
                "category": "Computers",
                "stockQuantity": null
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let item: Item = json_body(response.into_body()).await;
    assert_eq!(item.id, 1);
    assert_eq!(item.name, "Laptop Pro");
    assert_eq!(item.price, 1499.0);
    assert_eq!(item.category, "Computers");
    assert_eq!(item.stock_quantity, 15);
}

#[tokio::test]
async fn test_update_missing_item_returns_404() {
    let (_, app) = app();

    let response = app
        .oneshot(json_request("PUT", "/5", laptop()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_missing_item_with_invalid_body_returns_400() {
    let (_, app) = app();

    let response = app
        .oneshot(json_request(
            "PUT",
            "/5",
            json!({ "name": "Laptop", "description": "desc", "price": 0, "category": "Electronics" }),
        ))
        .await
        .unwrap();

    // Validation runs before the store is consulted
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.error, "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_update_and_delete_with_non_numeric_id_return_400() {
    let (service, app) = app();
    service.seed_sample_data().await.unwrap();

    let response = app
        .clone()
        .oneshot(json_request("PUT", "/abc", laptop()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.error, "INVALID_ID");

    let response = app.oneshot(empty_request("DELETE", "/1.5")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.error, "INVALID_ID");

    assert_eq!(service.count_items().await.unwrap(), 3);
}

#[tokio::test]
async fn test_update_with_blank_name_returns_400() {
    let (service, app) = app();
    service.seed_sample_data().await.unwrap();

    let response = app
        .oneshot(json_request(
            "PUT",
            "/1",
            json!({ "name": "", "description": "desc", "price": 10.0, "category": "Electronics" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(service.get_item(1).await.unwrap().name, "Laptop");
}

#[tokio::test]
async fn test_delete_item_returns_confirmation_then_404() {
    let (service, app) = app();
    service.seed_sample_data().await.unwrap();

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", "/1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let confirmation: DeleteConfirmation = json_body(response.into_body()).await;
    assert_eq!(confirmation.deleted_id, 1);
    assert_eq!(confirmation.message, "Item deleted successfully");

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(empty_request("DELETE", "/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    assert_eq!(service.count_items().await.unwrap(), 2);
}

#[tokio::test]
async fn test_ids_keep_increasing_after_delete() {
    let (_, app) = app();

    for _ in 0..2 {
        app.clone()
            .oneshot(json_request("POST", "/addItem", laptop()))
            .await
            .unwrap();
    }
    app.clone()
        .oneshot(empty_request("DELETE", "/2"))
        .await
        .unwrap();

    let response = app
        .oneshot(json_request("POST", "/addItem", laptop()))
        .await
        .unwrap();

    let item: Item = json_body(response.into_body()).await;
    assert_eq!(item.id, 3);
}

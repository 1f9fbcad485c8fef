use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use axum_helpers::{
    IdPath, ValidatedJson,
    errors::responses::{BadRequestIdResponse, BadRequestValidationResponse, NotFoundResponse},
};
use std::collections::BTreeMap;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ItemResult;
use crate::models::{CreateItem, DeleteConfirmation, Item, ItemsSummary, UpdateItem};
use crate::repository::ItemRepository;
use crate::service::ItemService;

/// OpenAPI documentation for Items API
#[derive(OpenApi)]
#[openapi(
    paths(
        items_summary,
        list_items,
        create_item,
        get_item,
        update_item,
        delete_item,
    ),
    components(
        schemas(Item, CreateItem, UpdateItem, ItemsSummary, DeleteConfirmation),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse
        )
    ),
    tags(
        (name = "Items", description = "In-memory inventory item endpoints")
    )
)]
pub struct ApiDoc;

const ENDPOINTS: [(&str, &str); 6] = [
    ("GET /api/items", "Get this welcome message"),
    ("GET /api/items/all", "Get all items"),
    ("POST /api/items/addItem", "Add a new item"),
    ("GET /api/items/{id}", "Get item by ID"),
    ("PUT /api/items/{id}", "Update an item"),
    ("DELETE /api/items/{id}", "Delete an item"),
];

/// Create the items router with all HTTP endpoints
pub fn router<R: ItemRepository + 'static>(service: ItemService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(items_summary))
        .route("/all", get(list_items))
        .route("/addItem", post(create_item))
        .route("/{id}", get(get_item).put(update_item).delete(delete_item))
        .with_state(shared_service)
}

/// Service summary with the current item count
#[utoipa::path(
    get,
    path = "",
    tag = "Items",
    responses(
        (status = 200, description = "Welcome message and item count", body = ItemsSummary)
    )
)]
async fn items_summary<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
) -> ItemResult<Json<ItemsSummary>> {
    let total_items = service.count_items().await?;

    let endpoints = ENDPOINTS
        .iter()
        .map(|(route, description)| (route.to_string(), description.to_string()))
        .collect::<BTreeMap<_, _>>();

    Ok(Json(ItemsSummary {
        message: "Welcome to E-commerce API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        total_items,
        endpoints,
    }))
}

/// List all items
#[utoipa::path(
    get,
    path = "/all",
    tag = "Items",
    responses(
        (status = 200, description = "All items in insertion order", body = Vec<Item>)
    )
)]
async fn list_items<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
) -> ItemResult<Json<Vec<Item>>> {
    let items = service.list_items().await?;
    Ok(Json(items))
}

/// Create a new item
#[utoipa::path(
    post,
    path = "/addItem",
    tag = "Items",
    request_body = CreateItem,
    responses(
        (status = 201, description = "Item created successfully", body = Item),
        (status = 400, response = BadRequestValidationResponse)
    )
)]
async fn create_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateItem>,
) -> ItemResult<impl IntoResponse> {
    let item = service.create_item(input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Get an item by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn get_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    IdPath(id): IdPath,
) -> ItemResult<Json<Item>> {
    let item = service.get_item(id).await?;
    Ok(Json(item))
}

/// Update an item
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    request_body = UpdateItem,
    responses(
        (status = 200, description = "Item updated successfully", body = Item),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn update_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateItem>,
) -> ItemResult<Json<Item>> {
    let item = service.update_item(id, input).await?;
    Ok(Json(item))
}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item deleted successfully", body = DeleteConfirmation),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn delete_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    IdPath(id): IdPath,
) -> ItemResult<Json<DeleteConfirmation>> {
    service.delete_item(id).await?;
    Ok(Json(DeleteConfirmation::new(id)))
}

//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Inventory API",
        version = "1.0.0",
        description = "In-memory REST API for managing inventory items",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/items", api = domain_items::ApiDoc)
    ),
    tags(
        (name = "Items", description = "Item management endpoints")
    )
)]
pub struct ApiDoc;

use axum::http::{HeaderValue, Method, header, header::InvalidHeaderValue};
use core_config::cors::CorsConfig;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

const ALLOWED_METHODS: [Method; 5] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::DELETE,
    Method::OPTIONS,
];

/// Creates the CORS layer described by `config`.
///
/// - [`CorsConfig::AnyOrigin`]: `Access-Control-Allow-Origin: *`, no credentials.
/// - [`CorsConfig::Origins`]: explicit allow-list with credentials allowed.
///
/// Both variants allow GET, POST, PUT, DELETE and OPTIONS with a 1 hour max age.
///
/// # Errors
/// Returns an error if an origin is not a valid header value.
pub fn create_cors_layer(config: &CorsConfig) -> Result<CorsLayer, InvalidHeaderValue> {
    let layer = CorsLayer::new()
        .allow_methods(ALLOWED_METHODS)
        .max_age(Duration::from_secs(3600));

    match config {
        CorsConfig::AnyOrigin => Ok(layer.allow_origin(Any).allow_headers(Any)),
        CorsConfig::Origins(origins) => {
            let origins = origins
                .iter()
                .map(|o| o.parse::<HeaderValue>())
                .collect::<Result<Vec<_>, _>>()?;

            Ok(layer
                .allow_origin(AllowOrigin::list(origins))
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
                .allow_credentials(true))
        }
    }
}

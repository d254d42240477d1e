pub mod middleware;
pub mod page;
pub mod rest;
pub mod state;

pub use middleware::trace_requests;
pub use page::index_handler;
pub use rest::{generate_flashcards_handler, health_handler};

use crate::error::ApiError;
use axum::{
    extract::DefaultBodyLimit,
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use rest::ApiDoc;
use state::AppState;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Upper bound on a request body. Topics are not length-checked, so this
/// is only a guard against abuse.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Builds the complete application router: form page, API, health check and Swagger UI.
pub fn build_router(app_state: Arc<AppState>) -> Result<Router, ApiError> {
    let mut api_router = Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/api/flashcards", post(generate_flashcards_handler))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES));

    if let Some(origin) = &app_state.config.cors_allowed_origin {
        let origin = origin.parse::<HeaderValue>().map_err(|e| {
            ApiError::Internal(format!("Invalid CORS_ALLOWED_ORIGIN '{}': {}", origin, e))
        })?;
        let cors = CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([CONTENT_TYPE]);
        api_router = api_router.layer(cors);
    }

    // Merge the API router with the Swagger UI router for a complete application.
    let app = Router::new()
        .merge(api_router.with_state(app_state))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(axum_middleware::from_fn(trace_requests));

    Ok(app)
}

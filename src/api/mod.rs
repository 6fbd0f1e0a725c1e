//! REST API layer: route handlers, DTOs, OpenAPI document and router
//! composition.
//!
//! Customer endpoints are mounted under `/api`; system endpoints at the root.

pub mod dto;
pub mod handlers;
pub mod openapi;

use std::any::Any;

use axum::Router;
use axum::response::{IntoResponse, Response};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;
use crate::error::ApiError;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    let router = Router::new()
        .nest("/api", handlers::routes())
        .merge(handlers::system::routes());

    #[cfg(feature = "swagger-ui")]
    let router = {
        use utoipa::OpenApi;
        router.merge(
            utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", openapi::ApiDoc::openapi()),
        )
    };

    router
}

/// Builds the served application: all routes plus panic recovery, HTTP
/// tracing and CORS, bound to `state`.
pub fn build_app(state: AppState) -> Router {
    build_router()
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Turns a handler panic into a 500 failed envelope.
fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("handler panicked");
    tracing::error!(detail, "handler panicked");
    ApiError::Internal(detail.to_owned()).into_response()
}

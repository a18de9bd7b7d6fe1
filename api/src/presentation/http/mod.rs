use std::any::Any;

use axum::{
    Router,
    response::{IntoResponse, Response},
};
use http::{HeaderName, HeaderValue, header};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::bootstrap::app_context::AppContext;
use crate::presentation::http::error::{ApiError, not_found_fallback};

pub mod categories;
pub mod error;
pub mod json;
pub mod questions;
pub mod quizzes;

const ALLOW_HEADERS: &str = "Content-Type, Authorization";
const ALLOW_METHODS: &str = "GET, POST, PATCH, DELETE, OPTIONS";

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([
            http::Method::GET,
            http::Method::POST,
            http::Method::PATCH,
            http::Method::DELETE,
            http::Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

fn handle_panic(_: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!("handler_panicked");
    ApiError::Internal.into_response()
}

/// Every catalog route plus the envelope fallback and cross-origin headers.
pub fn router(ctx: AppContext) -> Router {
    Router::new()
        .merge(categories::routes(ctx.clone()))
        .merge(questions::routes(ctx.clone()))
        .merge(quizzes::routes(ctx))
        .fallback(not_found_fallback)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors())
        // CorsLayer only lists these on preflight; the client expects them everywhere
        .layer(SetResponseHeaderLayer::if_not_present(
            HeaderName::from_static("access-control-allow-headers"),
            HeaderValue::from_static(ALLOW_HEADERS),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            HeaderName::from_static("access-control-allow-methods"),
            HeaderValue::from_static(ALLOW_METHODS),
        ))
}

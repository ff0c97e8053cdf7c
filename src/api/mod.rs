//! HTTP API
//!
//! This module maps the fruit endpoints onto the service and translates
//! service errors into status codes.

pub mod error;
pub mod handlers;

use axum::{routing::get, Router};
use std::sync::Arc;

use crate::service::FruitService;

pub use error::{ApiError, ErrorResponse};

/// State shared by every handler
pub struct AppState {
    pub service: FruitService,
}

impl AppState {
    pub fn new(service: FruitService) -> Self {
        Self { service }
    }
}

/// Build the application router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/fruits",
            get(handlers::list_fruits).post(handlers::create_fruit),
        )
        .route("/fruits/:id", get(handlers::get_fruit))
        .with_state(state)
}

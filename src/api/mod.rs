//! API routes and response envelope.

pub mod health;
pub mod reservations;
pub mod tables;

use axum::Router;
use axum::http::Uri;
use axum::routing::{get, put};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use crate::state::AppState;

/// Success envelope: every 2xx body is `{ "data": ... }`.
#[derive(Debug, Serialize)]
pub struct Data<T> {
    pub data: T,
}

impl<T> Data<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route(
            "/reservations",
            get(reservations::list).post(reservations::create),
        )
        .route(
            "/reservations/{reservation_id}",
            get(reservations::read).put(reservations::update),
        )
        .route(
            "/reservations/{reservation_id}/status",
            put(reservations::update_status),
        )
        .route("/tables", get(tables::list).post(tables::create))
        .route("/tables/{table_id}/seat", put(tables::seat).delete(tables::finish))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn not_found(uri: Uri) -> AppError {
    AppError::not_found(format!("Path not found: {}", uri.path()))
}

use std::time::Duration;

use axum::{
    http::{Method, StatusCode},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod extract;
pub mod feeds;
pub mod params;
pub mod pricing;
pub mod quote;
pub mod state;
pub mod telemetry;

pub use quote::{QuoteRequest, QuoteService};
pub use state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health).fallback(error::method_not_allowed))
        .merge(pricing::routes())
        .merge(feeds::routes())
        .layer(timeout_layer(state.request_timeout))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Requests running longer than `timeout` are answered with 408.
fn timeout_layer(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "UP" }))
}

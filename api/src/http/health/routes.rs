use axum::{Router, routing::get};

use crate::http::server::AppState;

async fn health_check() -> &'static str {
    "OK"
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

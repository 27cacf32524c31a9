use axum::{Router, routing::get};

use super::controller::{auth_probe, health, index};
use crate::state::AppState;

pub fn init_status_router() -> Router<AppState> {
    Router::new().route("/", get(index))
}

pub fn init_test_router() -> Router<AppState> {
    Router::new()
        .route("/", get(health))
        .route("/auth", get(auth_probe))
}

use axum::{
    Router,
    routing::{get, post},
};

use super::controller::{login, refresh, verify};
use crate::state::AppState;

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/refresh", post(refresh))
        .route("/verify", get(verify))
}

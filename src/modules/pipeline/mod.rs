use axum::Router;
use axum::routing::{get, post};
use crate::state::AppState;

pub mod dto;
pub mod handler;
pub mod model;
pub mod render;
pub mod service;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/run", post(handler::run_pipeline))
        .route("/log", get(handler::tail_log))
}

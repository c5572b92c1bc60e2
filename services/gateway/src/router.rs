use crate::handlers::ws;
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/ws", get(ws::ws_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

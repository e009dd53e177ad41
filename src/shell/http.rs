use axum::{
    Router,
    routing::{delete, get},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::diagnostics::inbound::http as diagnostics_http;
use crate::modules::expenses::inbound::http as expenses_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(diagnostics_http::health))
        .route(
            "/api/expenses",
            get(expenses_http::list).post(expenses_http::create),
        )
        .route("/api/expenses/{id}", delete(expenses_http::delete_by_id))
        .route("/api/test-load", get(diagnostics_http::test_load))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

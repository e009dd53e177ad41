use axum::{Json, extract::State, response::IntoResponse};

use crate::modules::diagnostics::load;
use crate::shell::state::AppState;

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    // The report shows how many calls were handled before this one, so a
    // fresh process reports zero.
    let handled_before = state.counter.record();
    Json(state.monitor.report(handled_before))
}

pub async fn test_load(State(state): State<AppState>) -> impl IntoResponse {
    let request_number = state.counter.record() + 1;
    Json(load::run(request_number))
}

use axum::{
    Json,
    extract::rejection::JsonRejection,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;

use crate::modules::expenses::core::expense::{Expense, NewExpense};
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct CreateExpenseResponse {
    pub success: bool,
    pub expense: Expense,
}

#[derive(Serialize)]
pub struct DeleteExpenseResponse {
    pub success: bool,
    pub message: String,
}

pub async fn list(State(state): State<AppState>) -> impl IntoResponse {
    state.counter.record();
    match state.expenses.list().await {
        Ok(expenses) => Json(expenses).into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<NewExpense>, JsonRejection>,
) -> impl IntoResponse {
    state.counter.record();
    let Json(input) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.expenses.create(input).await {
        Ok(expense) => Json(CreateExpenseResponse {
            success: true,
            expense,
        })
        .into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

pub async fn delete_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    state.counter.record();
    // An id that matches nothing still deletes successfully; the contract
    // is idempotent and has no not-found arm.
    match state.expenses.delete_by_id(&id).await {
        Ok(()) => Json(DeleteExpenseResponse {
            success: true,
            message: "Expense deleted".to_string(),
        })
        .into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

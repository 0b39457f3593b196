//! Expenses API endpoints

use api_types::{AddExpenseRequest, AddExpenseResponse, ListExpensesRequest, ListExpensesResponse};
use axum::{Json, body::Bytes, extract::State};

use crate::{ServerError, server::ServerState};

/// `POST /v1/expenses` → `AddExpense`
///
/// The body is decoded as JSON whatever its `Content-Type`.
pub async fn add(
    State(state): State<ServerState>,
    body: Bytes,
) -> Result<Json<AddExpenseResponse>, ServerError> {
    let payload: AddExpenseRequest = serde_json::from_slice(&body)?;
    let mut client = state.client.clone();

    let response = client.add_expense(payload).await?;
    Ok(Json(response.into_inner()))
}

/// `GET /v1/expenses` → `ListExpenses`
pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<ListExpensesResponse>, ServerError> {
    let mut client = state.client.clone();

    let response = client.list_expenses(ListExpensesRequest {}).await?;
    Ok(Json(response.into_inner()))
}

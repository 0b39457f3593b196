//! Summary API endpoint

use api_types::{SummaryRequest, SummaryResponse};
use axum::{Json, extract::State};

use crate::{ServerError, server::ServerState};

/// `GET /v1/expenses/summary` → `GetSummary`
pub async fn get_summary(
    State(state): State<ServerState>,
) -> Result<Json<SummaryResponse>, ServerError> {
    let mut client = state.client.clone();

    let response = client.get_summary(SummaryRequest {}).await?;
    Ok(Json(response.into_inner()))
}

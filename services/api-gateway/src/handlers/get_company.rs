use std::time::Instant;

use axum::{
    extract::{Path, State},
    Json,
};
use common::metrics::record_use_case;

use crate::dto::CompanyResponse;
use crate::error::{ApiResult, RequestContext};
use crate::state::AppState;

/// Get a single company by id
pub async fn handle(
    State(state): State<AppState>,
    request: RequestContext,
    Path(id): Path<String>,
) -> ApiResult<Json<CompanyResponse>> {
    let started = Instant::now();
    let result = state.get_company.execute(&id).await;
    record_use_case("get_company_by_id", result.is_ok(), started.elapsed().as_secs_f64());

    result
        .map(|output| Json(CompanyResponse::from_output(output, state.display_offset)))
        .map_err(|e| state.reject(e, request))
}

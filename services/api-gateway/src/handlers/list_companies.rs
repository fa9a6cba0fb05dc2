use std::time::Instant;

use axum::{extract::State, Json};
use common::metrics::record_use_case;

use crate::dto::{CompanyResponse, ListCompaniesResponse};
use crate::error::{ApiResult, RequestContext};
use crate::state::AppState;

/// List every company in storage order
pub async fn handle(
    State(state): State<AppState>,
    request: RequestContext,
) -> ApiResult<Json<ListCompaniesResponse>> {
    let started = Instant::now();
    let result = state.list_companies.execute().await;
    record_use_case("list_companies", result.is_ok(), started.elapsed().as_secs_f64());

    let companies = result.map_err(|e| state.reject(e, request))?;
    Ok(Json(ListCompaniesResponse {
        companies: companies
            .into_iter()
            .map(|output| CompanyResponse::from_output(output, state.display_offset))
            .collect(),
    }))
}

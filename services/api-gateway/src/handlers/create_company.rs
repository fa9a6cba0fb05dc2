use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use common::metrics::record_use_case;
use domain::CreateCompanyCommand;
use domain_errors::DomainError;
use tracing::info;

use crate::dto::{CompanyResponse, CreateCompanyRequest};
use crate::error::{ApiResult, RequestContext};
use crate::state::AppState;

/// Handle create company request
pub async fn handle(
    State(state): State<AppState>,
    request: RequestContext,
    body: Result<Json<CreateCompanyRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<CompanyResponse>)> {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => {
            let error = DomainError::validation(format!("Invalid request body: {}", rejection.body_text()));
            return Err(state.reject(error, request));
        }
    };
    info!("Received create company request");

    let started = Instant::now();
    let result = state
        .create_company
        .execute(CreateCompanyCommand::from(body))
        .await;
    record_use_case("create_company", result.is_ok(), started.elapsed().as_secs_f64());

    match result {
        Ok(output) => Ok((
            StatusCode::CREATED,
            Json(CompanyResponse::from_output(output, state.display_offset)),
        )),
        Err(e) => Err(state.reject(e, request)),
    }
}

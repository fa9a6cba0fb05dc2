use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRequestParts, OriginalUri},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use common::metrics::{record_error_response, record_rejected_input};
use domain_errors::{DomainError, ErrorHandlerChain, ErrorResponse};
use serde::Serialize;
use serde_json::Value;
use tracing::error;

/// Path and method of the request being served, attached to error bodies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub path: String,
    pub method: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let path = parts
            .extensions
            .get::<OriginalUri>()
            .map(|OriginalUri(uri)| uri.path().to_string())
            .unwrap_or_else(|| parts.uri.path().to_string());

        Ok(Self {
            path,
            method: parts.method.to_string(),
        })
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    #[serde(flatten)]
    response: ErrorResponse,
    path: String,
    method: String,
}

/// Domain error already mapped by the handler chain
#[derive(Debug)]
pub struct ApiError {
    response: ErrorResponse,
    request: RequestContext,
}

impl ApiError {
    pub fn new(error: &DomainError, chain: &ErrorHandlerChain, request: RequestContext) -> Self {
        let response = chain.handle(error);

        error!(
            code = %response.code,
            status = response.status_code,
            path = %request.path,
            method = %request.method,
            context = %serde_json::Value::Object(error.context().clone()),
            "{}",
            error.message()
        );
        record_error_response(&response.code, response.status_code);
        record_rejections(error);

        Self { response, request }
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.response.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

fn record_rejections(error: &DomainError) {
    if error.is_validation_errors() {
        for detail in error.errors() {
            record_rejected_input(&detail.field, &detail.code);
        }
    } else if let Some(Value::String(field)) = error.context().get("field") {
        record_rejected_input(field, error.name());
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            response: self.response,
            path: self.request.path,
            method: self.request.method,
        };
        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

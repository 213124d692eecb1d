use axum::http::StatusCode;
use axum::{response::IntoResponse, Json};
use serde::Serialize;
use tracing::{error, warn};

use crate::errors::codes::ErrorCode;
use crate::errors::runtime::RuntimeError;
use crate::errors::service::ServiceStatusError;
use crate::errors::{HasErrorCode, MonitorError};

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
    code: &'a str,
}

fn map_error(err: &MonitorError) -> StatusCode {
    use MonitorError::*;
    match err {
        Service(ServiceStatusError::ServiceNotFound { .. }) => StatusCode::NOT_FOUND,
        Service(_) => StatusCode::BAD_REQUEST,
        Runtime(RuntimeError::ContainerNotFound { .. }) => StatusCode::NOT_FOUND,
        Runtime(_) => StatusCode::INTERNAL_SERVER_ERROR,
        Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        Probe(_) => StatusCode::INTERNAL_SERVER_ERROR,
        Request(_) => StatusCode::BAD_REQUEST,
        Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for MonitorError {
    fn into_response(self) -> axum::response::Response {
        let status = map_error(&self);
        let body = ErrorBody {
            error: self.to_string(),
            details: self.details(),
            code: self.error_code(),
        };

        if status.is_server_error() {
            error!(
                code = body.code,
                error = %body.error,
                details = ?body.details,
                "Request failed"
            );
        } else {
            warn!(code = body.code, error = %body.error, "Request rejected");
        }

        (status, Json(body)).into_response()
    }
}

pub async fn route_not_found() -> impl IntoResponse {
    let body = ErrorBody {
        error: "Not found".to_string(),
        details: None,
        code: ErrorCode::ROUTE_NOT_FOUND,
    };
    (StatusCode::NOT_FOUND, Json(body))
}

pub async fn method_not_allowed() -> impl IntoResponse {
    let body = ErrorBody {
        error: "Method not allowed".to_string(),
        details: None,
        code: ErrorCode::METHOD_NOT_ALLOWED,
    };
    (StatusCode::METHOD_NOT_ALLOWED, Json(body))
}

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use service::errors::ServiceError;
use tracing::{error, warn};

/// JSON error body `{"error": ..., "received": ...}` with a status.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub message: String,
    pub received: Option<Value>,
}

/// What an unexpected (storage) failure turns into on a given route group.
#[derive(Debug, Clone, Copy)]
pub enum Fallback {
    /// 500 with a fixed message; the cause is only logged.
    Internal(&'static str),
    /// 400 carrying the underlying message.
    BadRequest,
}

impl JsonApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into(), received: None }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn from_service(err: ServiceError, fallback: Fallback) -> Self {
        match err {
            ServiceError::Validation { message, received } => {
                Self { status: StatusCode::BAD_REQUEST, message, received }
            }
            ServiceError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            ServiceError::Conflict(msg) => Self::new(StatusCode::CONFLICT, msg),
            ServiceError::Gateway(cause) => {
                error!(error = %cause, "persistence failure");
                match fallback {
                    Fallback::Internal(msg) => Self::new(StatusCode::INTERNAL_SERVER_ERROR, msg),
                    Fallback::BadRequest => Self::bad_request(cause.to_string()),
                }
            }
        }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = match self.received {
            Some(received) => json!({ "error": self.message, "received": received }),
            None => json!({ "error": self.message }),
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(error = %rejection.body_text(), "rejected request body");
        Self::bad_request(rejection.body_text())
    }
}

impl From<PathRejection> for JsonApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use service::gateway::GatewayError;

    #[test]
    fn storage_failure_depends_on_fallback() {
        let err = || ServiceError::Gateway(GatewayError::Persistence("pool closed".into()));
        let internal = JsonApiError::from_service(err(), Fallback::Internal("Erro ao listar usuários"));
        assert_eq!(internal.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(internal.message, "Erro ao listar usuários");

        let bad = JsonApiError::from_service(err(), Fallback::BadRequest);
        assert_eq!(bad.status, StatusCode::BAD_REQUEST);
        assert_eq!(bad.message, "pool closed");
    }

    #[test]
    fn validation_keeps_received() {
        let err = ServiceError::missing_fields("faltando", json!({ "name": null }));
        let mapped = JsonApiError::from_service(err, Fallback::BadRequest);
        assert_eq!(mapped.status, StatusCode::BAD_REQUEST);
        assert_eq!(mapped.received, Some(json!({ "name": null })));
    }
}

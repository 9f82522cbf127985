use serde_json::Value;
use thiserror::Error;

use crate::gateway::GatewayError;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Client input rejected before touching storage; `received` echoes the offending fields.
    #[error("{message}")]
    Validation { message: String, received: Option<Value> },
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl ServiceError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation { message: message.into(), received: None }
    }

    pub fn missing_fields(message: impl Into<String>, received: Value) -> Self {
        Self::Validation { message: message.into(), received: Some(received) }
    }
}

impl From<models::errors::ModelError> for ServiceError {
    fn from(e: models::errors::ModelError) -> Self {
        Self::validation(e.to_string())
    }
}

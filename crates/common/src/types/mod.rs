use serde::{Deserialize, Serialize};

/// Payload of the root healthcheck.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ServiceInfo {
    pub ok: bool,
    pub service: String,
}

impl ServiceInfo {
    pub fn new(service: impl Into<String>) -> Self {
        Self { ok: true, service: service.into() }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StatusMessage {
    pub message: String,
}

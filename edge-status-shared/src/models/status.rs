use serde::{Deserialize, Serialize};
use crate::models::request::StatusRequest;
use crate::utilities::clock::iso_timestamp;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Online,
}

/// Body returned on success.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StatusPayload {
    pub message: String,
    pub status: ServiceStatus,
    pub path: String,
    pub method: String,
    pub timestamp: String,
}

impl StatusPayload {
    pub fn new(message: &str, request: &StatusRequest) -> Self {
        StatusPayload {
            message: message.to_string(),
            status: ServiceStatus::Online,
            path: request.path().to_string(),
            method: request.method().to_string(),
            timestamp: iso_timestamp(),
        }
    }
}

/// Body returned when the response could not be built.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorPayload {
    pub error: String,
}

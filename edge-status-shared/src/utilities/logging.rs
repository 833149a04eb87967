use serde_json::json;
use log::{info, error};

/// Logs an informational event to CloudWatch in JSON format.
pub fn log_info(event: &str, message: &str) {
    info!("{}", json!({
        "event": event,
        "message": message
    }));
}

/// Logs an error event to CloudWatch in JSON format.
pub fn log_error(event: &str, error_message: &str) {
    error!("{}", json!({
        "event": event,
        "error": error_message
    }));
}

/// Logs a handled request with its echoed method/path and the resulting status code.
pub fn log_request(method: &str, path: &str, status_code: u16) {
    info!("{}", json!({
        "event": "status_request",
        "method": method,
        "path": path,
        "status_code": status_code
    }));
}

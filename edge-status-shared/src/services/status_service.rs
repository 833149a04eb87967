use serde_json::Value;
use crate::models::errors::StatusError;
use crate::models::request::StatusRequest;
use crate::models::status::StatusPayload;
use crate::utilities::config::get_status_message;
use crate::utilities::logging::log_request;
use crate::utilities::responses::{respond, Reply};

/// Builds the status reply for an already extracted request.
pub fn status_reply(request: &StatusRequest) -> Reply {
    let message = get_status_message();
    let reply = respond(|| Ok(StatusPayload::new(&message, request)));
    log_request(request.method(), request.path(), reply.status_code);
    reply
}

/// Builds the status reply for a raw proxy event. Extraction failures are
/// reported the same way as serialization failures.
pub fn event_status_reply(event: &Value) -> Reply {
    match StatusRequest::from_event(event) {
        Ok(request) => status_reply(&request),
        Err(err) => failed_reply(err),
    }
}

fn failed_reply(err: StatusError) -> Reply {
    respond::<StatusPayload, _>(|| Err(err))
}

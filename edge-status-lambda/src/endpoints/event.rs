use lambda_runtime::LambdaEvent;
use serde_json::Value;
use edge_status_shared::services::status_service::event_status_reply;
use edge_status_shared::utilities::logging::log_info;
use edge_status_shared::utilities::responses::Reply;

/// Entry point for the event/context variant: returns `{statusCode, headers, body}`.
pub async fn handler(event: LambdaEvent<Value>) -> Result<Reply, lambda_runtime::Error> {
    log_info("invocation_received", &event.context.request_id);
    Ok(handle_event(&event.payload))
}

pub fn handle_event(payload: &Value) -> Reply {
    event_status_reply(payload)
}

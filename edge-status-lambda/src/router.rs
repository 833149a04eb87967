use lambda_http::{Body, Request, Response};
use edge_status_shared::utilities::logging::log_info;
use crate::endpoints::status;

/// Entry point for the HTTP variant. Every method and path gets the status payload.
pub async fn handle_lambda(event: Request) -> Result<Response<Body>, lambda_http::Error> {
    log_info("request_received", &format!("{} {}", event.method(), event.uri()));
    status::handler(event).await
}

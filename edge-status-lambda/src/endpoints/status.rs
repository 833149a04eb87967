use lambda_http::{Body, Request, RequestExt, Response};
use edge_status_shared::models::request::StatusRequest;
use edge_status_shared::services::status_service::status_reply;
use edge_status_shared::utilities::logging::log_error;

pub async fn handler(event: Request) -> Result<Response<Body>, lambda_http::Error> {
    let request = StatusRequest::from_http(event.method().as_str(), request_path(&event));
    status_reply(&request).into_response().map_err(|e| {
        log_error("build_response", &e.to_string());
        lambda_http::Error::from("Failed to construct HTTP response")
    })
}

/// Path as the proxy event carried it. The URI built by the runtime has the
/// API Gateway stage prepended, the raw path does not.
fn request_path(event: &Request) -> &str {
    let raw_path = event.raw_http_path();
    if raw_path.is_empty() {
        event.uri().path()
    } else {
        raw_path
    }
}

use lambda_runtime::{Context, LambdaEvent};
use serde_json::{json, Value};
use edge_status_lambda::endpoints::event::{handle_event, handler};
use edge_status_shared::utilities::responses::Reply;
use edge_status_shared::utilities::test::init_tracing;

fn body(reply: &Reply) -> Value {
    serde_json::from_str(&reply.body).expect("body is not JSON")
}

#[test]
fn test_event_echoes_rest_proxy_fields() {
    init_tracing();
    let reply = handle_event(&json!({ "httpMethod": "POST", "path": "/chat" }));

    assert_eq!(reply.status_code, 200);
    assert_eq!(reply.header("Content-Type"), Some("application/json"));
    assert_eq!(reply.header("Access-Control-Allow-Origin"), Some("*"));

    let body = body(&reply);
    assert_eq!(body["status"], "online");
    assert_eq!(body["method"], "POST");
    assert_eq!(body["path"], "/chat");
}

#[test]
fn test_event_missing_method_defaults_to_get() {
    init_tracing();
    let reply = handle_event(&json!({ "path": "/chat" }));
    assert_eq!(body(&reply)["method"], "GET");
}

#[test]
fn test_event_missing_path_defaults_to_root() {
    init_tracing();
    let reply = handle_event(&json!({ "httpMethod": "DELETE" }));
    assert_eq!(body(&reply)["path"], "/");
}

#[test]
fn test_event_result_object_shape() {
    init_tracing();
    let reply = handle_event(&json!({}));
    let value = serde_json::to_value(&reply).unwrap();

    assert_eq!(value["statusCode"], 200);
    assert!(value["headers"].is_object());
    assert!(value["body"].is_string());
}

#[test]
fn test_event_bad_url_returns_error_payload() {
    init_tracing();
    let reply = handle_event(&json!({ "httpMethod": "GET", "url": "not a url" }));

    assert_eq!(reply.status_code, 500);
    assert_eq!(reply.headers.len(), 1);
    let error = body(&reply)["error"].as_str().unwrap().to_string();
    assert!(!error.is_empty());
}

#[test]
fn test_event_staged_rest_event_echoes_event_path() {
    init_tracing();
    let event: Value = serde_json::from_str(include_str!("data/apigw_rest_staged_request.json")).unwrap();
    let reply = handle_event(&event);

    let body = body(&reply);
    assert_eq!(body["method"], "POST");
    assert_eq!(body["path"], "/chat");
}

#[tokio::test]
async fn test_event_handler_accepts_lambda_event() {
    init_tracing();
    let event = LambdaEvent::new(json!({ "httpMethod": "POST", "path": "/chat" }), Context::default());

    let reply = handler(event).await.unwrap();

    assert_eq!(reply.status_code, 200);
    let body = body(&reply);
    assert_eq!(body["status"], "online");
    assert_eq!(body["path"], "/chat");
}

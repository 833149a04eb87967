use std::collections::BTreeMap;
use http::StatusCode;
use lambda_http::{Response, Body};
use serde::{Deserialize, Serialize};
use serde_json::json;
use crate::models::errors::StatusError;
use crate::utilities::logging::log_error;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const APPLICATION_JSON: &str = "application/json";

pub const CORS_HEADERS: [(&str, &str); 3] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "GET, POST, OPTIONS"),
    ("Access-Control-Allow-Headers", "Content-Type, Authorization"),
];

/// Host-neutral response: what the event/context variant returns as-is and
/// what the HTTP variant converts into a native response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl Reply {
    fn json_text(code: StatusCode, body: String) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string());
        Reply { status_code: code.as_u16(), headers, body }
    }

    /// 200 with the serialized payload and the CORS headers.
    pub fn success<T: Serialize>(data: &T) -> Result<Self, StatusError> {
        let body = serde_json::to_string(data)?;
        let mut reply = Reply::json_text(StatusCode::OK, body);
        for (name, value) in CORS_HEADERS {
            reply.headers.insert(name.to_string(), value.to_string());
        }
        Ok(reply)
    }

    /// 500 carrying the failure description. Only `Content-Type` is set.
    pub fn internal_error(err: &StatusError) -> Self {
        let body = json!({ "error": err.to_string() }).to_string();
        Reply::json_text(StatusCode::INTERNAL_SERVER_ERROR, body)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    pub fn into_response(self) -> Result<Response<Body>, StatusError> {
        let mut builder = Response::builder().status(self.status_code);
        for (name, value) in &self.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        Ok(builder.body(Body::Text(self.body))?)
    }
}

/// Runs `build` and renders its payload; any failure becomes a 500 reply.
pub fn respond<T, F>(build: F) -> Reply
where
    T: Serialize,
    F: FnOnce() -> Result<T, StatusError>,
{
    match build().and_then(|data| Reply::success(&data)) {
        Ok(reply) => reply,
        Err(err) => {
            log_error("status_response_failed", &err.to_string());
            Reply::internal_error(&err)
        }
    }
}

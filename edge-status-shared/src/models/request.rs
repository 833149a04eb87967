use serde_json::Value;
use url::Url;
use crate::models::errors::StatusError;

pub const DEFAULT_METHOD: &str = "GET";
pub const DEFAULT_PATH: &str = "/";

/// The parts of an inbound request the status handler echoes back.
/// Absent fields fall back to `GET` and `/` when read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusRequest {
    method: Option<String>,
    path: Option<String>,
}

impl StatusRequest {
    pub fn new(method: Option<&str>, path: Option<&str>) -> Self {
        StatusRequest {
            method: non_empty(method),
            path: non_empty(path),
        }
    }

    /// Builds a request from the method and path of a native HTTP request.
    /// The path is expected without its query string.
    pub fn from_http(method: &str, path: &str) -> Self {
        Self::new(Some(method), Some(path))
    }

    /// Builds a request from a full URL, keeping only its pathname.
    pub fn from_url(method: Option<&str>, url: &str) -> Result<Self, StatusError> {
        let parsed = Url::parse(url)?;
        Ok(Self::new(method, Some(parsed.path())))
    }

    /// Builds a request from a Lambda-style proxy event.
    ///
    /// REST (v1) events carry `httpMethod` and `path`, HTTP API (v2) events
    /// carry `requestContext.http.method` and `rawPath`. A bare `url` field
    /// is accepted as a last resort for the path.
    pub fn from_event(event: &Value) -> Result<Self, StatusError> {
        let method = str_field(event, &["httpMethod"])
            .or_else(|| str_field(event, &["requestContext", "http", "method"]));

        if let Some(path) = str_field(event, &["path"]).or_else(|| str_field(event, &["rawPath"])) {
            return Ok(Self::new(method, Some(path)));
        }

        match str_field(event, &["url"]) {
            Some(url) => Self::from_url(method, url),
            None => Ok(Self::new(method, None)),
        }
    }

    pub fn method(&self) -> &str {
        self.method.as_deref().unwrap_or(DEFAULT_METHOD)
    }

    pub fn path(&self) -> &str {
        self.path.as_deref().unwrap_or(DEFAULT_PATH)
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

fn str_field<'a>(event: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .try_fold(event, |node, key| node.get(key))
        .and_then(Value::as_str)
        .filter(|v| !v.is_empty())
}

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One inbound invocation in the serverless flow. The canonical shape is
/// `httpMethod`/`path`/`pathParameters`/`queryStringParameters`; the
/// parameter maps may be absent or null on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RequestEvent {
    pub http_method: String,
    pub path: String,
    pub path_parameters: Option<HashMap<String, String>>,
    pub query_string_parameters: Option<HashMap<String, String>>,
}

impl RequestEvent {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        RequestEvent {
            http_method: method.into(),
            path: path.into(),
            path_parameters: None,
            query_string_parameters: None,
        }
    }

    pub fn with_query(mut self, params: HashMap<String, String>) -> Self {
        self.query_string_parameters = Some(params);
        self
    }
}

/// The structured output wrapping status, headers and serialized body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

/// Response content that varied across the upstream handler versions,
/// collapsed into a single configurable source of truth.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    pub service: String,
    pub version: String,
    pub environment: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        RouterConfig {
            service: "taskserver-router".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: "production".to_string(),
        }
    }
}

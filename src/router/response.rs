use serde_json::{json, Value};
use std::collections::HashMap;

use super::types::{RequestEvent, ResponseEnvelope};

fn default_headers() -> HashMap<String, String> {
    let mut headers = HashMap::new();
    headers.insert("Content-Type".to_string(), "application/json".to_string());
    headers.insert(
        "Access-Control-Allow-Origin".to_string(),
        "*".to_string(),
    );
    headers
}

fn serialize_body(value: &Value) -> String {
    // Pretty-printing a Value cannot fail; fall back to a literal just in case.
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

pub fn success_response(data: Value) -> ResponseEnvelope {
    ResponseEnvelope {
        status_code: 200,
        headers: default_headers(),
        body: serialize_body(&data),
    }
}

pub fn error_response(status_code: u16, message: &str, event: &RequestEvent) -> ResponseEnvelope {
    let body = json!({
        "error": message,
        "status_code": status_code,
        "path": event.path,
        "method": event.http_method,
    });
    ResponseEnvelope {
        status_code,
        headers: default_headers(),
        body: serialize_body(&body),
    }
}

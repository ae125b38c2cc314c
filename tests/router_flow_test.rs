use std::collections::HashMap;

use taskserver::router::{EventRouter, RequestEvent, ResponseEnvelope, RouterConfig};

fn router() -> EventRouter {
    EventRouter::new(RouterConfig::default())
}

fn body(envelope: &ResponseEnvelope) -> serde_json::Value {
    serde_json::from_str(&envelope.body).expect("envelope body must be valid JSON")
}

#[test]
fn test_every_literal_route_returns_200() {
    for path in ["/", "/health", "/api/status", "/api/echo", "/api/info"] {
        let response = router().handle(&RequestEvent::new("GET", path));
        assert_eq!(response.status_code, 200, "path {path}");
        assert_eq!(
            response.headers.get("Content-Type").map(String::as_str),
            Some("application/json"),
            "path {path}"
        );
        body(&response);
    }
}

#[test]
fn test_name_value_round_trips_verbatim() {
    let response = router().handle(&RequestEvent::new("GET", "/name/Ada Lovelace"));
    assert_eq!(response.status_code, 200);
    let body = body(&response);
    assert_eq!(body["name"], "Ada Lovelace");
    assert_eq!(body["message"], "Hello, Ada Lovelace!");
}

#[test]
fn test_blank_name_is_rejected() {
    for path in ["/name/", "/name/ ", "/name/\t"] {
        let response = router().handle(&RequestEvent::new("GET", path));
        assert_eq!(response.status_code, 400, "path {path:?}");
        let body = body(&response);
        assert_eq!(body["error"], "Name parameter is required");
        assert_eq!(body["path"], path);
    }
}

#[test]
fn test_echo_cardinality_matches_query_map() {
    let mut params = HashMap::new();
    for i in 0..5 {
        params.insert(format!("k{i}"), format!("v{i}"));
    }
    let event = RequestEvent::new("GET", "/api/echo").with_query(params.clone());
    let response = router().handle(&event);
    let body = body(&response);
    assert_eq!(body["total_params"], 5);
    for (k, v) in params {
        assert_eq!(body["query_parameters"][&k], v.as_str());
    }
}

#[test]
fn test_unmatched_path_echoes_path_in_error() {
    let response = router().handle(&RequestEvent::new("POST", "/tasks"));
    assert_eq!(response.status_code, 404);
    let body = body(&response);
    assert_eq!(body["path"], "/tasks");
    assert_eq!(body["method"], "POST");
    assert_eq!(body["status_code"], 404);
}

#[test]
fn test_error_envelope_keeps_invariants() {
    let response = router().handle(&RequestEvent::new("GET", "/missing"));
    assert_eq!(
        response.headers.get("Access-Control-Allow-Origin").map(String::as_str),
        Some("*")
    );
    assert_eq!(
        response.headers.get("Content-Type").map(String::as_str),
        Some("application/json")
    );
}

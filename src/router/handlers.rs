use log::{error, info};
use serde_json::json;
use std::collections::HashMap;
use std::panic::{catch_unwind, AssertUnwindSafe};

use super::response::{error_response, success_response};
use super::types::{RequestEvent, ResponseEnvelope, RouterConfig};

/// Stateless dispatcher for serverless-style events. Every invocation is
/// independent; the only state is the configured response content.
#[derive(Debug, Clone, Default)]
pub struct EventRouter {
    config: RouterConfig,
}

impl EventRouter {
    pub fn new(config: RouterConfig) -> Self {
        Self { config }
    }

    /// Produce exactly one envelope per event. Panics raised while building
    /// a response are caught here and mapped to a 500 envelope.
    pub fn handle(&self, event: &RequestEvent) -> ResponseEnvelope {
        info!(
            "Received event: method={} path={}",
            event.http_method, event.path
        );

        match catch_unwind(AssertUnwindSafe(|| self.route(event))) {
            Ok(envelope) => envelope,
            Err(_) => {
                error!("Handler panicked for path {}", event.path);
                error_response(500, "Internal Server Error", event)
            }
        }
    }

    // First matching rule wins: health, status, name prefix, echo, info,
    // then not-found.
    fn route(&self, event: &RequestEvent) -> ResponseEnvelope {
        let path = event.path.as_str();

        if path == "/" || path == "/health" {
            self.handle_health(event)
        } else if path == "/api/status" {
            self.handle_status()
        } else if let Some(name) = path.strip_prefix("/name/") {
            self.handle_name(name, event)
        } else if path == "/api/echo" {
            self.handle_echo(event)
        } else if path == "/api/info" {
            self.handle_info()
        } else {
            error_response(404, "Endpoint not found", event)
        }
    }

    fn handle_health(&self, event: &RequestEvent) -> ResponseEnvelope {
        success_response(json!({
            "status": "healthy",
            "message": "Service is running",
            "path": event.path,
            "version": self.config.version,
        }))
    }

    fn handle_status(&self) -> ResponseEnvelope {
        success_response(json!({
            "status": "operational",
            "service": self.config.service,
            "version": self.config.version,
            "environment": self.config.environment,
        }))
    }

    fn handle_name(&self, name: &str, event: &RequestEvent) -> ResponseEnvelope {
        if name.trim().is_empty() {
            return error_response(400, "Name parameter is required", event);
        }

        success_response(json!({
            "message": format!("Hello, {name}!"),
            "name": name,
            "path": event.path,
            "greeting": format!("Welcome to {}, {name}!", self.config.service),
        }))
    }

    fn handle_echo(&self, event: &RequestEvent) -> ResponseEnvelope {
        let empty = HashMap::new();
        let query = event.query_string_parameters.as_ref().unwrap_or(&empty);

        success_response(json!({
            "message": "Echo service",
            "query_parameters": query,
            "total_params": query.len(),
        }))
    }

    fn handle_info(&self) -> ResponseEnvelope {
        success_response(json!({
            "application": self.config.service,
            "version": self.config.version,
            "endpoints": [
                "/ or /health - Health check",
                "/api/status - API status",
                "/name/{name} - Greeting with name",
                "/api/echo?param=value - Echo parameters",
                "/api/info - This endpoint",
            ],
        }))
    }
}

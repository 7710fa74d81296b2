//! Common test utilities for harness integration tests
//!
//! This module provides:
//! - A seeded stub backend standing in for the public object API
//! - An echoing responder for create and update requests
//! - Helpers for building runners against the stub

use restful_objects_client::ClientConfig;
use restful_objects_harness::{Expectations, ScenarioRunner};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

// ============================================================================
// Seed Data
// ============================================================================

/// The thirteen objects the public service ships with.
#[allow(dead_code)]
pub fn seeded_objects() -> Vec<Value> {
    vec![
        json!({ "id": "1", "name": "Google Pixel 6 Pro", "data": { "color": "Cloudy White", "capacity": "128 GB" } }),
        json!({ "id": "2", "name": "Apple iPhone 12 Mini, 256GB, Blue", "data": null }),
        json!({ "id": "3", "name": "Apple iPhone 12 Pro Max", "data": { "color": "Cloudy White", "capacity GB": 512 } }),
        json!({ "id": "4", "name": "Apple iPhone 11, 64GB", "data": { "price": 389.99, "color": "Purple" } }),
        json!({ "id": "5", "name": "Samsung Galaxy Z Fold2", "data": { "price": 689.99, "color": "Brown" } }),
        json!({ "id": "6", "name": "Apple AirPods", "data": { "generation": "3rd", "price": 120 } }),
        json!({ "id": "7", "name": "Apple MacBook Pro 16", "data": { "year": 2019, "price": 1849.99, "CPU model": "Intel Core i9", "Hard disk size": "1 TB" } }),
        json!({ "id": "8", "name": "Apple Watch Series 8", "data": { "Strap Colour": "Elderberry", "Case Size": "41mm" } }),
        json!({ "id": "9", "name": "Beats Studio3 Wireless", "data": { "Color": "Red", "Description": "High-performance wireless noise cancelling headphones" } }),
        json!({ "id": "10", "name": "Apple iPad Mini 5th Gen", "data": { "Capacity": "64 GB", "Screen size": 7.9 } }),
        json!({ "id": "11", "name": "Apple iPad Mini 5th Gen", "data": { "Capacity": "254 GB", "Screen size": 7.9 } }),
        json!({ "id": "12", "name": "Apple iPad Air", "data": { "Generation": "4th", "Price": "419.99", "Capacity": "64 GB" } }),
        json!({ "id": "13", "name": "Apple iPad Air", "data": { "Generation": "4th", "Price": "519.99", "Capacity": "256 GB" } }),
    ]
}

// ============================================================================
// Echo Responder
// ============================================================================

/// Echoes the request body back as the stored object.
///
/// Accepts either a JSON object or a JSON string literal holding an encoded
/// object, so both update encodings round-trip.
#[derive(Clone)]
#[allow(dead_code)]
pub struct EchoItem {
    id: String,
}

impl EchoItem {
    #[allow(dead_code)]
    pub fn with_id(id: &str) -> Self {
        Self { id: id.to_string() }
    }
}

impl Respond for EchoItem {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let body = match serde_json::from_slice::<Value>(&request.body) {
            Ok(Value::String(encoded)) => serde_json::from_str::<Value>(&encoded),
            other => other,
        };

        match body {
            Ok(Value::Object(mut object)) => {
                object.insert("id".to_string(), Value::String(self.id.clone()));
                ResponseTemplate::new(200).set_body_json(Value::Object(object))
            }
            _ => ResponseTemplate::new(400).set_body_json(json!({
                "error": "400 Bad Request. If you are trying to create or update the data, potential issue is that you are sending incorrect body json or it is missing at all."
            })),
        }
    }
}

// ============================================================================
// Seeded Backend
// ============================================================================

/// Stub object API with fixed seeded data.
#[allow(dead_code)]
pub struct SeededBackend {
    pub server: MockServer,
}

#[allow(dead_code)]
impl SeededBackend {
    /// Start a backend serving all thirteen seeded objects.
    pub async fn start() -> Self {
        Self::start_with_objects(seeded_objects()).await
    }

    /// Start a backend whose list endpoint returns `objects`.
    ///
    /// The single-object, create, update and delete routes behave the same
    /// regardless of what the list returns.
    pub async fn start_with_objects(objects: Vec<Value>) -> Self {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/objects"))
            .respond_with(ResponseTemplate::new(200).set_body_json(Value::Array(objects)))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/objects/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&seeded_objects()[0]))
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/objects"))
            .respond_with(EchoItem::with_id("ff80818196f2a23f0197a1b2c3d40001"))
            .mount(&server)
            .await;

        Mock::given(method("PUT"))
            .and(path("/objects/1"))
            .respond_with(EchoItem::with_id("1"))
            .mount(&server)
            .await;

        Mock::given(method("DELETE"))
            .and(path("/objects/6"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "message": "Object with id = 6, has been deleted." })),
            )
            .mount(&server)
            .await;

        Self { server }
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::default().with_base_url(self.server.uri())
    }

    pub fn runner(&self) -> ScenarioRunner {
        ScenarioRunner::from_parts(self.client_config(), Expectations::default())
    }

    /// Bodies of every received request matching `http_method` and `request_path`.
    pub async fn received_bodies(&self, http_method: &str, request_path: &str) -> Vec<Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|r| r.method.as_str() == http_method && r.url.path() == request_path)
            .map(|r| serde_json::from_slice(&r.body).unwrap_or(Value::Null))
            .collect()
    }
}

/// Start a bare mock server with no routes mounted.
#[allow(dead_code)]
pub async fn empty_server() -> MockServer {
    MockServer::start().await
}

/// Runner against `server` with default expectations.
#[allow(dead_code)]
pub fn runner_for(server: &MockServer) -> ScenarioRunner {
    ScenarioRunner::from_parts(
        ClientConfig::default().with_base_url(server.uri()),
        Expectations::default(),
    )
}

//! Shared fixtures: a scripted transport and lot builders.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};

use client::shared::api::{ApiClient, ApiError, ApiTransport, HttpMethod};
use contracts::domain::a003_lot::Lot;

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: HttpMethod,
    pub path: String,
    pub query: Option<String>,
    pub body: Option<Value>,
}

/// Transport answering from a fixed script and recording every call
#[derive(Default)]
pub struct FakeTransport {
    routes: Mutex<Vec<(HttpMethod, String, Result<Value, ApiError>)>>,
    calls: Mutex<Vec<Call>>,
    delay: Option<Duration>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, method: HttpMethod, path: &str, result: Result<Value, ApiError>) -> Self {
        self.routes
            .lock()
            .unwrap()
            .push((method, path.to_string(), result));
        self
    }

    pub fn ok(self, method: HttpMethod, path: &str, value: Value) -> Self {
        self.respond(method, path, Ok(value))
    }

    /// Every response is delayed (tokio time, so paused clocks advance it)
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, method: HttpMethod, path: &str) -> usize {
        self.calls()
            .iter()
            .filter(|c| c.method == method && c.path == path)
            .count()
    }
}

#[async_trait]
impl ApiTransport for FakeTransport {
    async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        query: Option<&str>,
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        self.calls.lock().unwrap().push(Call {
            method,
            path: path.to_string(),
            query: query.map(str::to_string),
            body,
        });

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let routes = self.routes.lock().unwrap();
        routes
            .iter()
            .find(|(m, p, _)| *m == method && p == path)
            .map(|(_, _, result)| result.clone())
            .unwrap_or_else(|| {
                Err(ApiError::Http {
                    status: 404,
                    body: json!({"error": format!("no route for {} {}", method.as_str(), path)}).to_string(),
                })
            })
    }
}

pub fn client_with(transport: FakeTransport) -> (Arc<FakeTransport>, Arc<ApiClient>) {
    let transport = Arc::new(transport);
    let api = Arc::new(ApiClient::new(transport.clone()));
    (transport, api)
}

/// Lot JSON as the backend sends it
pub fn lot_json(name: &str, extra: Value) -> Value {
    let mut lot = json!({
        "id": uuid::Uuid::new_v4(),
        "nameOrNumber": name,
        "status": [],
        "isActive": true,
    });
    if let (Some(lot), Some(extra)) = (lot.as_object_mut(), extra.as_object()) {
        lot.extend(extra.clone());
    }
    lot
}

pub fn lot(name: &str, extra: Value) -> Lot {
    serde_json::from_value(lot_json(name, extra)).unwrap()
}

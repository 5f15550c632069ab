use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

use super::api_utils::api_url;
use super::error::ApiError;
use crate::shared::config::ApiConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }

    fn to_reqwest(self) -> reqwest::Method {
        match self {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One request/response exchange with the backend.
///
/// `query` is an already encoded query string without the leading `?`.
/// Empty response bodies come back as `Value::Null`.
#[async_trait]
pub trait ApiTransport: Send + Sync {
    async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        query: Option<&str>,
        body: Option<Value>,
    ) -> Result<Value, ApiError>;
}

/// HTTP client for the dashboard REST API
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>, token: Option<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(format!("failed to create HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            token,
        })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        let token = config.token();
        if token.is_none() {
            tracing::warn!(
                "No API token in ${}; requests will be unauthenticated",
                config.token_env
            );
        }
        Self::new(
            config.base_url.clone(),
            token,
            Duration::from_secs(config.timeout_secs),
        )
    }
}

#[async_trait]
impl ApiTransport for HttpTransport {
    async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        query: Option<&str>,
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        let mut url = api_url(&self.base_url, path);
        if let Some(qs) = query {
            url.push('?');
            url.push_str(qs);
        }

        let started = std::time::Instant::now();
        let mut request = self
            .client
            .request(method.to_reqwest(), &url)
            .header("Accept", "application/json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!("{} {} failed: {}", method, path, e);
            ApiError::from(e)
        })?;

        let status = response.status();
        let text = response.text().await?;
        tracing::debug!(
            "{} {} -> {} ({} bytes, {}ms)",
            method,
            path,
            status.as_u16(),
            text.len(),
            started.elapsed().as_millis()
        );

        if !status.is_success() {
            tracing::warn!("{} {} returned {}: {}", method, path, status.as_u16(), text);
            return Err(ApiError::Http {
                status: status.as_u16(),
                body: text,
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}

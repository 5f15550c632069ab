use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use super::error::ApiError;
use super::transport::{ApiTransport, HttpMethod, HttpTransport};
use crate::shared::config::ApiConfig;
use crate::shared::data::QueryCache;

/// Transport plus query cache; every API module goes through this
pub struct ApiClient {
    transport: Arc<dyn ApiTransport>,
    cache: QueryCache,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self {
            transport,
            cache: QueryCache::new(),
        }
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        Ok(Self::new(Arc::new(HttpTransport::from_config(config)?)))
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// Cached GET; a response is only cached once it decodes
    pub async fn query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&str>,
    ) -> Result<T, ApiError> {
        let key = QueryCache::key(path, query);
        if let Some(cached) = self.cache.get(&key) {
            tracing::trace!("cache hit {}", key);
            return Ok(serde_json::from_value(cached)?);
        }

        let value = self
            .transport
            .send(HttpMethod::Get, path, query, None)
            .await?;
        let decoded = serde_json::from_value::<T>(value.clone())?;
        self.cache.insert(key, value);
        Ok(decoded)
    }

    /// GET bypassing (and refreshing) the cache entry
    pub async fn refetch<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&str>,
    ) -> Result<T, ApiError> {
        self.cache.remove(&QueryCache::key(path, query));
        self.query(path, query).await
    }

    /// Non-GET request; on success every cache entry under `invalidate` is dropped.
    /// A failed mutation leaves the cache untouched.
    pub async fn mutate<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
        invalidate: &[&str],
    ) -> Result<T, ApiError> {
        let value = self.transport.send(method, path, None, body).await?;
        for prefix in invalidate {
            self.cache.invalidate_prefix(prefix);
        }
        Ok(serde_json::from_value(value)?)
    }

    /// `mutate` with a serializable body
    pub async fn send_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        body: &B,
        invalidate: &[&str],
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body)?;
        self.mutate(method, path, Some(body), invalidate).await
    }
}

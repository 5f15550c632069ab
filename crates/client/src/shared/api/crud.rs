//! Generic CRUD over an aggregate's collection endpoint (`/api/<collection>[/:id]`)

use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;

use contracts::domain::common::{AggregateId, AggregateRoot};

use super::api_utils::{item_path, ListEnvelope};
use super::{ApiClient, ApiError, HttpMethod};

pub async fn list<T>(api: &ApiClient, query: Option<&str>) -> Result<Vec<T>, ApiError>
where
    T: AggregateRoot + DeserializeOwned,
{
    let envelope: ListEnvelope<T> = api.query(&T::api_path(), query).await?;
    let items = envelope.into_vec();
    tracing::debug!("Fetched {} {}", items.len(), T::list_name());
    Ok(items)
}

pub async fn get<T>(api: &ApiClient, id: &T::Id) -> Result<T, ApiError>
where
    T: AggregateRoot + DeserializeOwned,
    T::Id: AggregateId,
{
    api.query(&item_path(&T::api_path(), &id.as_string()), None)
        .await
}

pub async fn create<T, D>(api: &ApiClient, dto: &D) -> Result<T, ApiError>
where
    T: AggregateRoot + DeserializeOwned,
    D: Serialize,
{
    let path = T::api_path();
    let created: T = api
        .send_json(HttpMethod::Post, &path, dto, &[&path])
        .await?;
    tracing::info!("Created {} {}", T::element_name(), created.display_name());
    Ok(created)
}

pub async fn update<T, D>(api: &ApiClient, id: &T::Id, dto: &D) -> Result<T, ApiError>
where
    T: AggregateRoot + DeserializeOwned,
    T::Id: AggregateId,
    D: Serialize,
{
    let collection = T::api_path();
    let path = item_path(&collection, &id.as_string());
    api.send_json(HttpMethod::Patch, &path, dto, &[&collection])
        .await
}

pub async fn delete<T>(api: &ApiClient, id: &T::Id) -> Result<(), ApiError>
where
    T: AggregateRoot,
    T::Id: AggregateId,
{
    let collection = T::api_path();
    let path = item_path(&collection, &id.as_string());
    let _: IgnoredAny = api
        .mutate(HttpMethod::Delete, &path, None, &[&collection])
        .await?;
    tracing::info!("Deleted {} {}", T::element_name(), id.as_string());
    Ok(())
}

use contracts::domain::a002_park::{Park, ParkDto, ParkId};
use contracts::domain::a004_special_status::SpecialStatus;
use contracts::domain::common::{AggregateId, AggregateRoot};

use crate::shared::api::api_utils::{item_path, ListEnvelope};
use crate::shared::api::{crud, ApiClient, ApiError};

pub async fn fetch_parks(api: &ApiClient) -> Result<Vec<Park>, ApiError> {
    crud::list::<Park>(api, None).await
}

pub async fn fetch_park(api: &ApiClient, id: &ParkId) -> Result<Park, ApiError> {
    crud::get::<Park>(api, id).await
}

pub async fn create_park(api: &ApiClient, dto: &ParkDto) -> Result<Park, ApiError> {
    dto.validate().map_err(ApiError::Validation)?;
    crud::create::<Park, _>(api, dto).await
}

pub async fn update_park(api: &ApiClient, id: &ParkId, dto: &ParkDto) -> Result<Park, ApiError> {
    dto.validate().map_err(ApiError::Validation)?;
    let park = crud::update::<Park, _>(api, id, dto).await?;
    // Lots embed a park summary
    api.cache().invalidate_prefix("/api/lots");
    Ok(park)
}

/// `/api/parks/:id/special-statuses`
pub fn special_statuses_path(park_id: &ParkId) -> String {
    format!(
        "{}/special-statuses",
        item_path(&Park::api_path(), &park_id.as_string())
    )
}

/// Special statuses defined for one park
pub async fn fetch_special_statuses(
    api: &ApiClient,
    park_id: &ParkId,
) -> Result<Vec<SpecialStatus>, ApiError> {
    let envelope: ListEnvelope<SpecialStatus> =
        api.query(&special_statuses_path(park_id), None).await?;
    Ok(envelope.into_vec())
}

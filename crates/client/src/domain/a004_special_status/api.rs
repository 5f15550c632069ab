use serde::de::IgnoredAny;

use contracts::domain::a002_park::ParkId;
use contracts::domain::a003_lot::Lot;
use contracts::domain::a004_special_status::{SpecialStatus, SpecialStatusDto, SpecialStatusId};
use contracts::domain::common::{AggregateId, AggregateRoot};

use crate::domain::a002_park::api::special_statuses_path;
use crate::shared::api::api_utils::item_path;
use crate::shared::api::{ApiClient, ApiError, HttpMethod};

/// Cache prefixes touched by a status change; lots embed their special status
fn affected_paths(park_id: &ParkId) -> [String; 2] {
    [special_statuses_path(park_id), Lot::api_path()]
}

pub async fn create_special_status(
    api: &ApiClient,
    dto: &SpecialStatusDto,
) -> Result<SpecialStatus, ApiError> {
    dto.validate().map_err(ApiError::Validation)?;
    let [park_path, lots_path] = affected_paths(&dto.park_id);
    let created: SpecialStatus = api
        .send_json(
            HttpMethod::Post,
            &SpecialStatus::api_path(),
            dto,
            &[&park_path, &lots_path],
        )
        .await?;
    tracing::info!("Created special status {}", created.name);
    Ok(created)
}

pub async fn update_special_status(
    api: &ApiClient,
    id: &SpecialStatusId,
    dto: &SpecialStatusDto,
) -> Result<SpecialStatus, ApiError> {
    dto.validate().map_err(ApiError::Validation)?;
    let [park_path, lots_path] = affected_paths(&dto.park_id);
    api.send_json(
        HttpMethod::Patch,
        &item_path(&SpecialStatus::api_path(), &id.as_string()),
        dto,
        &[&park_path, &lots_path],
    )
    .await
}

/// Lots carrying the deleted status lose their tag server-side
pub async fn delete_special_status(api: &ApiClient, status: &SpecialStatus) -> Result<(), ApiError> {
    let [park_path, lots_path] = affected_paths(&status.park_id);
    let _: IgnoredAny = api
        .mutate(
            HttpMethod::Delete,
            &item_path(&SpecialStatus::api_path(), &status.id.as_string()),
            None,
            &[&park_path, &lots_path],
        )
        .await?;
    tracing::info!("Deleted special status {}", status.name);
    Ok(())
}

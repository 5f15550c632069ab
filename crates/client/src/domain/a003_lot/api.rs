use serde::Serialize;

use contracts::domain::a003_lot::{Lot, LotDto, LotId, SetSpecialStatusRequest};
use contracts::domain::a004_special_status::SpecialStatusId;
use contracts::domain::common::{AggregateId, AggregateRoot};
use contracts::usecases::u501_bulk_import_lots::{
    BulkImportRequest, BulkImportResponse, BULK_IMPORT_PATH,
};

use crate::shared::api::api_utils::{encode_query, item_path};
use crate::shared::api::{crud, ApiClient, ApiError, HttpMethod};

/// Upper bound the server accepts for one list page
pub const MAX_FETCH_LIMIT: usize = 10_000;

/// Query parameters of `GET /api/lots`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LotListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl LotListParams {
    /// Whole list in one page, optionally narrowed by server-side search
    pub fn all(limit: usize, search: Option<&str>) -> Self {
        Self {
            limit: Some(limit.clamp(1, MAX_FETCH_LIMIT)),
            search: search
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        }
    }

    pub fn to_query(&self) -> Option<String> {
        encode_query(self)
    }
}

pub async fn fetch_lots(api: &ApiClient, params: &LotListParams) -> Result<Vec<Lot>, ApiError> {
    crud::list::<Lot>(api, params.to_query().as_deref()).await
}

pub async fn fetch_lot(api: &ApiClient, id: &LotId) -> Result<Lot, ApiError> {
    crud::get::<Lot>(api, id).await
}

pub async fn create_lot(api: &ApiClient, dto: &LotDto) -> Result<Lot, ApiError> {
    dto.validate().map_err(ApiError::Validation)?;
    crud::create::<Lot, _>(api, dto).await
}

pub async fn update_lot(api: &ApiClient, id: &LotId, dto: &LotDto) -> Result<Lot, ApiError> {
    dto.validate().map_err(ApiError::Validation)?;
    crud::update::<Lot, _>(api, id, dto).await
}

pub async fn delete_lot(api: &ApiClient, id: &LotId) -> Result<(), ApiError> {
    crud::delete::<Lot>(api, id).await
}

fn lot_action_path(id: &LotId, action: &str) -> String {
    format!("{}/{}", item_path(&Lot::api_path(), &id.as_string()), action)
}

/// `PATCH /api/lots/:id/toggle-active`
pub async fn toggle_active(api: &ApiClient, id: &LotId) -> Result<Lot, ApiError> {
    let collection = Lot::api_path();
    let lot: Lot = api
        .mutate(
            HttpMethod::Patch,
            &lot_action_path(id, "toggle-active"),
            None,
            &[&collection],
        )
        .await?;
    tracing::info!(
        "Lot {} is now {}",
        lot.name_or_number,
        if lot.is_active { "active" } else { "inactive" }
    );
    Ok(lot)
}

/// `PUT /api/lots/:id/special-status`; `None` clears the tag
pub async fn set_special_status(
    api: &ApiClient,
    id: &LotId,
    special_status_id: Option<SpecialStatusId>,
) -> Result<Lot, ApiError> {
    let collection = Lot::api_path();
    let body = SetSpecialStatusRequest { special_status_id };
    api.send_json(
        HttpMethod::Put,
        &lot_action_path(id, "special-status"),
        &body,
        &[&collection],
    )
    .await
}

/// `POST /api/admin/lots/bulk`. Cached lot lists are not invalidated here;
/// the caller merges the created lots into them.
pub async fn bulk_create_lots(
    api: &ApiClient,
    request: &BulkImportRequest,
) -> Result<BulkImportResponse, ApiError> {
    tracing::info!("Submitting {} lots for bulk import", request.len());
    api.send_json(HttpMethod::Post, BULK_IMPORT_PATH, request, &[])
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_params_query() {
        assert_eq!(
            LotListParams::all(10_000, None).to_query().as_deref(),
            Some("limit=10000")
        );
        assert_eq!(
            LotListParams::all(50_000, Some(" oakwood ")).to_query().as_deref(),
            Some("limit=10000&search=oakwood")
        );
        assert_eq!(LotListParams::all(100, Some("  ")).search, None);
        assert_eq!(LotListParams::default().to_query(), None);
    }

    #[test]
    fn test_action_path() {
        let id = LotId::new(uuid::Uuid::nil());
        assert_eq!(
            lot_action_path(&id, "toggle-active"),
            "/api/lots/00000000-0000-0000-0000-000000000000/toggle-active"
        );
    }
}

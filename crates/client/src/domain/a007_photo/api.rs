use serde::de::IgnoredAny;

use contracts::domain::a003_lot::{Lot, LotId};
use contracts::domain::a007_photo::{sort_gallery, Photo, PhotoId, PhotoOrderRequest};
use contracts::domain::common::{AggregateId, AggregateRoot};

use crate::shared::api::api_utils::{item_path, ListEnvelope};
use crate::shared::api::{ApiClient, ApiError, HttpMethod};

/// `/api/lots/:id/photos`
pub fn lot_photos_path(lot_id: &LotId) -> String {
    format!("{}/photos", item_path(&Lot::api_path(), &lot_id.as_string()))
}

/// Gallery of one lot in display order
pub async fn fetch_photos(api: &ApiClient, lot_id: &LotId) -> Result<Vec<Photo>, ApiError> {
    let envelope: ListEnvelope<Photo> = api.query(&lot_photos_path(lot_id), None).await?;
    let mut photos = envelope.into_vec();
    sort_gallery(&mut photos);
    Ok(photos)
}

pub async fn delete_photo(api: &ApiClient, photo: &Photo) -> Result<(), ApiError> {
    let gallery = lot_photos_path(&photo.lot_id);
    let _: IgnoredAny = api
        .mutate(
            HttpMethod::Delete,
            &item_path(&Photo::api_path(), &photo.id.as_string()),
            None,
            &[&gallery],
        )
        .await?;
    tracing::info!("Deleted photo {}", photo.id.as_string());
    Ok(())
}

/// Persist a new gallery order; `photo_ids` lists every photo of the lot
pub async fn reorder_photos(
    api: &ApiClient,
    lot_id: &LotId,
    photo_ids: Vec<PhotoId>,
) -> Result<(), ApiError> {
    let gallery = lot_photos_path(lot_id);
    let body = PhotoOrderRequest { photo_ids };
    let _: IgnoredAny = api
        .send_json(
            HttpMethod::Put,
            &format!("{}/order", gallery),
            &body,
            &[&gallery],
        )
        .await?;
    Ok(())
}

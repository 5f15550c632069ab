use serde::{Deserialize, Serialize};

use crate::domain::a003_lot::LotId;
use crate::domain::common::wire::opt_non_empty;
use crate::domain::common::AggregateRoot;

crate::define_id!(
    /// Photo id
    PhotoId
);

/// Gallery photo of a lot. Storage and resizing happen server-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: PhotoId,
    pub lot_id: LotId,
    pub url: String,
    #[serde(default, deserialize_with = "opt_non_empty")]
    pub caption: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
}

impl AggregateRoot for Photo {
    type Id = PhotoId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn display_name(&self) -> String {
        self.caption.clone().unwrap_or_else(|| self.url.clone())
    }

    fn aggregate_index() -> &'static str {
        "a007"
    }

    fn collection_name() -> &'static str {
        "photos"
    }

    fn element_name() -> &'static str {
        "Photo"
    }

    fn list_name() -> &'static str {
        "Photos"
    }
}

/// Body of `PUT /api/lots/:id/photos/order`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PhotoOrderRequest {
    pub photo_ids: Vec<PhotoId>,
}

/// Gallery order: by `sort_order`, ties keep server order
pub fn sort_gallery(photos: &mut [Photo]) {
    photos.sort_by_key(|p| p.sort_order);
}

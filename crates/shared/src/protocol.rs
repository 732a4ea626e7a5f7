//! Wire records of the remote photo collection.

use serde::{Deserialize, Serialize};

use crate::domain::{GroupId, Item, ItemId};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoRecord {
    pub album_id: i64,
    pub id: i64,
    pub title: String,
    pub url: String,
    pub thumbnail_url: String,
}

impl From<PhotoRecord> for Item {
    fn from(value: PhotoRecord) -> Self {
        Self {
            id: ItemId(value.id),
            group_id: GroupId(value.album_id),
            title: value.title,
            image_url: value.url,
            thumbnail_url: value.thumbnail_url,
        }
    }
}

/// Range query understood by the collection (`_start`/`_limit`), plus an
/// optional cache-defeating token.
#[derive(Debug, Clone, Serialize)]
pub struct PageQuery {
    #[serde(rename = "_start")]
    pub start: u64,
    #[serde(rename = "_limit")]
    pub limit: u32,
    #[serde(rename = "_cb", skip_serializing_if = "Option::is_none")]
    pub cache_token: Option<String>,
}

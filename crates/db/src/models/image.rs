//! Image model and DTOs.

use pcshowdown_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `images` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub image_id: DbId,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub link: String,
    pub pc_id: DbId,
}

/// An image reference submitted with a create or update request.
///
/// As with parts, ids from a previously fetched image are accepted and
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewImage {
    #[serde(rename = "imageId", default, skip_serializing)]
    pub image_id: Option<DbId>,
    #[serde(default)]
    pub link: String,
    #[serde(rename = "pcId", default, skip_serializing)]
    pub pc_id: Option<DbId>,
}

impl NewImage {
    pub fn new(link: impl Into<String>) -> Self {
        Self {
            link: link.into(),
            ..Self::default()
        }
    }
}

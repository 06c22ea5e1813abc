//! Part model and DTOs.

use pcshowdown_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::is_zero;

/// A row from the `parts` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    pub part_id: DbId,
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub part_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub brand: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub model: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub qty: i32,
    pub pc_id: DbId,
}

/// A part submitted with a create or update request.
///
/// `partId` and `pcId` are accepted so that parts read from a build can be
/// submitted again, but they are ignored: replacement parts always get
/// fresh ids under the addressed build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewPart {
    #[serde(rename = "partId", default, skip_serializing)]
    pub part_id: Option<DbId>,
    #[serde(rename = "type", default)]
    pub part_type: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub qty: i32,
    #[serde(rename = "pcId", default, skip_serializing)]
    pub pc_id: Option<DbId>,
}

impl NewPart {
    pub fn new(part_type: &str, brand: &str, model: &str, qty: i32) -> Self {
        Self {
            part_type: part_type.to_string(),
            brand: brand.to_string(),
            model: model.to_string(),
            qty,
            ..Self::default()
        }
    }

    /// Whether a stored part carries the same attributes as this input.
    pub fn matches(&self, part: &Part) -> bool {
        self.part_type == part.part_type
            && self.brand == part.brand
            && self.model == part.model
            && self.qty == part.qty
    }
}

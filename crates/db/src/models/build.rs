//! PC build model and DTOs.

use pcshowdown_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::image::{Image, NewImage};
use super::link::Links;
use super::part::{NewPart, Part};

/// Name and description columns of a `builds` row.
#[derive(Debug, Clone, FromRow)]
pub struct BuildRow {
    pub id: DbId,
    pub name: String,
    pub info: String,
}

/// A build with everything attached to it, as returned to token holders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullBuild {
    pub pc_id: DbId,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub info: String,
    pub parts: Vec<Part>,
    pub images: Vec<Image>,
    pub links: Links,
}

/// Result of inserting a build: its new id and the freshly minted links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedBuild {
    pub pc_id: DbId,
    pub links: Links,
}

/// One entry of the public listing. Always carries the view token so the
/// entry can be opened, and the build id so the next page can be requested.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildSummary {
    pub pc_id: DbId,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub info: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub view_id: String,
}

/// DTO for submitting a new build. Unknown fields are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateBuild {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub info: String,
    #[serde(default)]
    pub parts: Vec<NewPart>,
    #[serde(default)]
    pub images: Vec<NewImage>,
}

/// DTO for replacing a build. Every field is replaced; omitted part or
/// image lists clear the existing ones.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBuild {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub info: String,
    #[serde(default)]
    pub parts: Vec<NewPart>,
    #[serde(default)]
    pub images: Vec<NewImage>,
}

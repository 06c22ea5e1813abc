//! Capability link models.

use pcshowdown_core::error::CoreError;
use pcshowdown_core::permission::Permission;
use pcshowdown_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The token pair visible to a caller.
///
/// `edit_id` is empty when the caller only holds the view token; the edit
/// token is never disclosed to a view holder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Links {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub edit_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub view_id: String,
}

/// The outcome of resolving a token: which build it addresses and what it
/// may do there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedLink {
    pub build_id: DbId,
    pub permission: Permission,
}

/// Raw lookup row; `permission` arrives as the text form of the
/// `link_permission` enum.
#[derive(Debug, FromRow)]
pub(crate) struct LinkRow {
    pub build_id: DbId,
    pub permission: String,
}

impl LinkRow {
    pub(crate) fn into_resolved(self) -> Result<ResolvedLink, CoreError> {
        Ok(ResolvedLink {
            build_id: self.build_id,
            permission: self.permission.parse()?,
        })
    }
}

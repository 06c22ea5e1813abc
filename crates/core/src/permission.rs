//! Capability permissions carried by build links.
//!
//! Every build owns exactly two links: one granting [`Permission::Edit`]
//! and one granting [`Permission::View`]. The string forms are the labels of
//! the `link_permission` enum in the database schema; queries bind them from
//! here rather than spelling them out.

use std::str::FromStr;

use crate::error::CoreError;

/// The right a link token grants over its build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    /// May read, replace, and delete the build.
    Edit,
    /// May only read the build.
    View,
}

impl Permission {
    /// Return the `link_permission` label.
    pub fn as_str(self) -> &'static str {
        match self {
            Permission::Edit => "edit",
            Permission::View => "view",
        }
    }
}

impl FromStr for Permission {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "edit" => Ok(Permission::Edit),
            "view" => Ok(Permission::View),
            other => Err(CoreError::Internal(format!(
                "unknown link permission '{other}'"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Keyset pagination bounds for the public build listing.

use crate::error::CoreError;

/// Hard ceiling on a single listing page.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Validate a requested page size and cap it at `max`.
///
/// Zero is a legal request for an empty page. Negative sizes are rejected.
pub fn clamp_page_size(requested: i64, max: i64) -> Result<i64, CoreError> {
    if requested < 0 {
        return Err(CoreError::Validation(format!(
            "page size must not be negative, got {requested}"
        )));
    }
    Ok(requested.min(max.max(0)))
}

/// Clamp a keyset cursor to non-negative. Build ids start at 1, so a cursor
/// of 0 means "from the beginning".
pub fn clamp_after_id(after_id: i64) -> i64 {
    after_id.max(0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

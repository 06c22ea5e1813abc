//! Boundary validation for submitted PC builds.
//!
//! The store trusts its inputs; these checks run in the gateway before any
//! create or update reaches the database.

use crate::error::CoreError;

/// Validate the top-level build fields.
///
/// Both `name` and `info` must contain at least one non-whitespace character.
pub fn validate_build_fields(name: &str, info: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("name must not be empty".to_string()));
    }
    if info.trim().is_empty() {
        return Err(CoreError::Validation("info must not be empty".to_string()));
    }
    Ok(())
}

/// Validate a part quantity. Quantities are counts and cannot be negative.
pub fn validate_part_qty(qty: i32) -> Result<(), CoreError> {
    if qty < 0 {
        return Err(CoreError::Validation(format!(
            "qty must be >= 0, got {qty}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Link token generation.
//!
//! Tokens are the only handle a client ever holds on a build, so they must
//! be unguessable. A v4 UUID carries 122 random bits; the simple (hyphen-free)
//! form keeps URLs short.

use uuid::Uuid;

/// Length of a generated token in characters.
pub const TOKEN_LEN: usize = 32;

/// Generate a fresh opaque link token.
pub fn generate_token() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Cheap shape check run before touching the database.
///
/// Accepts anything that could have come from [`generate_token`]. Tokens
/// failing this check can never resolve, so callers may treat them as
/// unknown without a query.
pub fn is_well_formed(token: &str) -> bool {
    token.len() == TOKEN_LEN && token.bytes().all(|b| b.is_ascii_hexdigit())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

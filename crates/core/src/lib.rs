//! Domain core for the PC build catalog.
//!
//! Pure types and rules with no database or HTTP dependencies: the
//! capability [`permission::Permission`], token generation, input
//! validation, and the shared [`error::CoreError`].

pub mod build;
pub mod error;
pub mod pagination;
pub mod permission;
pub mod token;
pub mod types;

//! Domain model structs and DTOs.
//!
//! Row structs derive `FromRow` + `Serialize` and use the camelCase field
//! names of the public JSON API. Empty strings and zero values are omitted
//! on the wire. Create DTOs decode strictly; update DTOs ignore unknown
//! fields so a fetched build can be edited and sent straight back.

pub mod build;
pub mod image;
pub mod link;
pub mod part;

pub(crate) fn is_zero(value: &i32) -> bool {
    *value == 0
}

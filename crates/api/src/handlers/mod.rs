//! Request handlers.
//!
//! Handlers validate request input, delegate to the repositories in
//! `pcshowdown_db`, and map errors via [`AppError`](crate::error::AppError).
//! They hold no business logic of their own.

pub mod build;
pub mod link;

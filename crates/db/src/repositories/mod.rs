//! Repository layer: one zero-sized struct per aggregate, each taking an
//! explicit pool or connection.

pub mod build_repo;
pub mod link_repo;

pub use build_repo::BuildRepo;
pub use link_repo::LinkRepo;

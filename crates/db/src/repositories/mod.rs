//! Repository layer.
//!
//! Repositories wrap an injected `PgPool` and implement the gateway traits
//! from [`crate::store`].

pub mod project_repo;

pub use project_repo::ProjectRepo;

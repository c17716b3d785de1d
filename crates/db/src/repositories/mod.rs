//! Repository layer.
//!
//! Each repository is a zero-sized struct whose async methods take
//! `&PgPool` as their first argument, so callers decide pooling and
//! transactions.

pub mod project_repo;

pub use project_repo::ProjectRepo;

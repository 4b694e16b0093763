//! Portfolio Core - project model and in-memory store.
//!
//! This crate provides:
//! - The `Project` record and its create/update payloads
//! - `ProjectStore`, an ordered in-memory collection with CRUD operations
//! - `StoreError`, the typed failures those operations return

pub mod error;
pub mod project;
pub mod store;

pub use error::{Result, StoreError};
pub use project::{NewProject, Project, ProjectPatch, DEFAULT_CATEGORY};
pub use store::{sample_projects, ProjectStore};

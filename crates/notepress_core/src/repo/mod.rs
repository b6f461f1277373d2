//! Content access layer.
//!
//! # Responsibility
//! - Isolate filesystem details from service orchestration.
//! - Parse raw note files into metadata and body.
//!
//! # Invariants
//! - Repositories only read. Content is immutable for a build.
//! - Not-found and IO failures are reported as distinct error kinds.

pub mod asset_repo;
pub mod note_source;

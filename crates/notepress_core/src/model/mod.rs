//! Content domain model.
//!
//! # Responsibility
//! - Define assets, relative paths and the naming convention.
//! - Define links, static path records and route payloads.
//!
//! # Invariants
//! - Models are plain values; nothing here touches the filesystem.

pub mod asset;
pub mod content;
pub mod link;

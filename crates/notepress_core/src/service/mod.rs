//! Content resolution use-cases.
//!
//! # Responsibility
//! - Orchestrate repository calls into route-level operations.
//! - Keep the page generation layer decoupled from filesystem details.

pub mod category_service;
pub mod enumerator;
pub mod note_service;
pub mod page_service;
pub mod separator;

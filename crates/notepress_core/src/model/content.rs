//! Route payload records consumed by the presentation layer.
//!
//! Field names serialize in camelCase to match the page props contract.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Summary of one note, used in folder listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteDescription {
    pub title: String,
    pub description: String,
    pub publication_date: DateTime<Utc>,
    /// Rendered note href, e.g. `/notes/guides/intro`.
    pub link: String,
}

/// Full note body plus title, for single-note rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteContent {
    pub title: String,
    pub content: String,
}

/// Display entry for a navigable sub-folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryDescription {
    pub title: String,
    /// Rendered folder href, e.g. `/folders/guides`.
    pub link: String,
}

/// Folder route payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderPage {
    pub categories: Vec<CategoryDescription>,
    pub notes: Vec<NoteDescription>,
}

/// Note route payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotePage {
    pub note: NoteContent,
}

//! Filesystem content resolver for the notepress static site.
//! This crate owns the visibility rules, path/link mapping and route
//! enumeration that every published page depends on.

pub mod codec;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use codec::path_codec::PathCodec;
pub use config::{ConfigError, ContentRoot, SiteConfig};
pub use error::{ContentError, ContentResult};
pub use logging::{default_log_level, init_logging, logging_status, LogTarget};
pub use model::asset::{
    classify, is_note, is_private, is_public, Asset, AssetKind, RelativePath, Visibility,
    NOTE_SUFFIX,
};
pub use model::content::{CategoryDescription, FolderPage, NoteContent, NoteDescription, NotePage};
pub use model::link::{Link, RouteFamily, StaticPath};
pub use repo::asset_repo::{AssetRepository, FsAssetRepository};
pub use repo::note_source::{parse_note_source, NoteFrontMatter, NoteSource};
pub use service::category_service::{humanize, CategoryService};
pub use service::enumerator::PathEnumerator;
pub use service::note_service::NoteService;
pub use service::page_service::PageService;
pub use service::separator::{ContentSeparator, SeparatedAssets};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

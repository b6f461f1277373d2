//! Route payload assembly for the page generation layer.
//!
//! # Responsibility
//! - Provide static path registrations for folder and note routes.
//! - Build folder and note page payloads from route parameters.
//!
//! # Invariants
//! - A missing folder `id` addresses the root folder.
//! - A missing note `noteKey` is a build-time error.
//! - Services hold no mutable state; one instance may serve many threads.

use crate::codec::path_codec::PathCodec;
use crate::config::{ConfigError, ContentRoot, SiteConfig};
use crate::error::{ContentError, ContentResult};
use crate::model::content::{FolderPage, NotePage};
use crate::model::link::{RouteFamily, StaticPath};
use crate::repo::asset_repo::{display_dir, AssetRepository, FsAssetRepository};
use crate::service::category_service::CategoryService;
use crate::service::enumerator::PathEnumerator;
use crate::service::note_service::NoteService;
use crate::service::separator::ContentSeparator;
use log::info;

/// Page payload facade.
pub struct PageService<R: AssetRepository> {
    notes: NoteService<R>,
    categories: CategoryService,
}

impl PageService<FsAssetRepository> {
    /// Opens the configured content root and builds a filesystem-backed service.
    pub fn from_config(config: &SiteConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let root = ContentRoot::open(config)?;
        Ok(Self::new(FsAssetRepository::new(root), PathCodec::new(config)))
    }
}

impl<R: AssetRepository> PageService<R> {
    pub fn new(repo: R, codec: PathCodec) -> Self {
        Self {
            categories: CategoryService::new(codec.clone()),
            notes: NoteService::new(repo, codec),
        }
    }

    pub fn notes(&self) -> &NoteService<R> {
        &self.notes
    }

    /// Static paths for the folder route family, root included.
    pub fn folder_paths(&self) -> ContentResult<Vec<StaticPath>> {
        let links = PathEnumerator::new(
            RouteFamily::Folders,
            self.notes.repo(),
            self.notes.codec().clone(),
        )
        .enumerate()?;
        Ok(links.into_iter().map(StaticPath::from).collect())
    }

    /// Static paths for the note route family.
    pub fn note_paths(&self) -> ContentResult<Vec<StaticPath>> {
        self.notes.get_all_notes_paths()
    }

    /// Folder payload for route parameter `id`; `None` is the root folder.
    pub fn folder_page(&self, id: Option<&[String]>) -> ContentResult<FolderPage> {
        let folder = self.notes.codec().decode_folder_link(id.unwrap_or_default())?;
        let separated = ContentSeparator::new(self.notes.repo()).separate(&folder)?;
        let page = FolderPage {
            categories: self.categories.describe(&separated.categories),
            notes: self.notes.get_folder_notes_details(&folder)?,
        };
        info!(
            "event=build_route module=service status=ok family=folders path={} categories={} notes={}",
            display_dir(&folder),
            page.categories.len(),
            page.notes.len()
        );
        Ok(page)
    }

    /// Note payload for route parameter `noteKey`.
    ///
    /// # Errors
    /// - `BuildTime` when `note_key` is absent.
    pub fn note_page(&self, note_key: Option<&[String]>) -> ContentResult<NotePage> {
        let note_key = note_key.ok_or_else(|| {
            ContentError::BuildTime("note page requested without `noteKey` parameter".to_string())
        })?;
        let path = self.notes.codec().decode_note_link(note_key)?;
        let note = self.notes.get_note_content(&path)?;
        info!("event=build_route module=service status=ok family=notes path={path}");
        Ok(NotePage { note })
    }
}

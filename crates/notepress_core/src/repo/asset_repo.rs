//! Asset scanning contracts and filesystem implementation.
//!
//! # Responsibility
//! - List and classify the entries of one content directory.
//! - Read note files as UTF-8 text.
//! - Keep every resolved path inside the content root.
//!
//! # Invariants
//! - Listing order is the native `read_dir` order; nothing is sorted here.
//! - Every call re-reads the disk. There is no cache.
//! - A path whose canonical form leaves the content root is rejected.
//! - A path whose canonical form passes through a Private segment is
//!   `NotFound`, so a Public symlink never exposes a Private subtree.

use crate::config::ContentRoot;
use crate::error::{ContentError, ContentResult};
use crate::model::asset::{is_private, is_public, Asset, AssetKind, RelativePath};
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Repository interface over the content tree.
pub trait AssetRepository {
    /// Lists and classifies the children of one directory.
    fn list_children(&self, dir: &RelativePath) -> ContentResult<Vec<Asset>>;
    /// Reads one file as UTF-8 text.
    fn read_text(&self, file: &RelativePath) -> ContentResult<String>;
    /// Returns a stable identity for one directory, used to detect revisits.
    fn directory_identity(&self, dir: &RelativePath) -> ContentResult<PathBuf>;
}

impl<R: AssetRepository + ?Sized> AssetRepository for &R {
    fn list_children(&self, dir: &RelativePath) -> ContentResult<Vec<Asset>> {
        (**self).list_children(dir)
    }

    fn read_text(&self, file: &RelativePath) -> ContentResult<String> {
        (**self).read_text(file)
    }

    fn directory_identity(&self, dir: &RelativePath) -> ContentResult<PathBuf> {
        (**self).directory_identity(dir)
    }
}

/// Filesystem-backed asset repository rooted at one content directory.
#[derive(Debug, Clone)]
pub struct FsAssetRepository {
    root: ContentRoot,
}

impl FsAssetRepository {
    pub fn new(root: ContentRoot) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &ContentRoot {
        &self.root
    }

    /// Canonicalizes `relative` under the root.
    fn resolve(&self, relative: &RelativePath) -> ContentResult<PathBuf> {
        let joined = self.root.path().join(relative.to_path_buf());
        let canonical = joined.canonicalize().map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => ContentError::not_found(relative),
            _ => ContentError::io(relative, err),
        })?;
        if !canonical.starts_with(self.root.path()) {
            return Err(ContentError::invalid_path(
                relative,
                "resolves outside the content root",
            ));
        }
        if !self.is_published(&canonical) {
            return Err(ContentError::not_found(relative));
        }
        Ok(canonical)
    }

    /// `true` when every component of `canonical` below the root is Public.
    fn is_published(&self, canonical: &Path) -> bool {
        canonical
            .strip_prefix(self.root.path())
            .map(|rest| {
                rest.components()
                    .all(|component| is_public(&component.as_os_str().to_string_lossy()))
            })
            .unwrap_or(false)
    }

    /// `true` for a symlink resolving inside the root through a Private segment.
    fn links_into_private(&self, link: &Path) -> bool {
        match link.canonicalize() {
            Ok(target) => target.starts_with(self.root.path()) && !self.is_published(&target),
            Err(_) => false,
        }
    }

    fn resolve_dir(&self, dir: &RelativePath) -> ContentResult<PathBuf> {
        let path = self.resolve(dir)?;
        if !path.is_dir() {
            return Err(ContentError::not_found(dir));
        }
        Ok(path)
    }
}

impl AssetRepository for FsAssetRepository {
    fn list_children(&self, dir: &RelativePath) -> ContentResult<Vec<Asset>> {
        let started_at = Instant::now();
        let path = self.resolve_dir(dir)?;
        let entries = fs::read_dir(&path).map_err(|err| ContentError::io(dir, err))?;

        let mut assets = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|err| ContentError::io(dir, err))?;
            let raw_name = entry.file_name();
            if raw_name.to_str().is_none() && is_private(&raw_name.to_string_lossy()) {
                continue;
            }
            let name = raw_name.into_string().map_err(|raw| {
                ContentError::io(
                    dir,
                    io::Error::new(
                        io::ErrorKind::InvalidData,
                        format!("entry name is not valid UTF-8: {raw:?}"),
                    ),
                )
            })?;
            let file_type = entry
                .file_type()
                .map_err(|err| ContentError::io(format!("{dir}/{name}"), err))?;
            // Symlinks are classified by their target; dangling ones count as files.
            let is_dir = if file_type.is_symlink() {
                fs::metadata(entry.path())
                    .map(|meta| meta.is_dir())
                    .unwrap_or(false)
            } else {
                file_type.is_dir()
            };
            let mut asset = Asset::child_of(dir, &name, is_dir)?;
            if file_type.is_symlink() && self.links_into_private(&entry.path()) {
                asset.kind = AssetKind::Unknown;
            }
            assets.push(asset);
        }

        debug!(
            "event=scan_dir module=repo status=ok path={} entries={} duration_us={}",
            display_dir(dir),
            assets.len(),
            started_at.elapsed().as_micros()
        );
        Ok(assets)
    }

    fn read_text(&self, file: &RelativePath) -> ContentResult<String> {
        let path = self.resolve(file)?;
        if !path.is_file() {
            return Err(ContentError::not_found(file));
        }
        fs::read_to_string(&path).map_err(|err| ContentError::io(file, err))
    }

    fn directory_identity(&self, dir: &RelativePath) -> ContentResult<PathBuf> {
        self.resolve_dir(dir)
    }
}

pub(crate) fn display_dir(dir: &RelativePath) -> String {
    if dir.is_root() {
        "/".to_string()
    } else {
        dir.to_string()
    }
}

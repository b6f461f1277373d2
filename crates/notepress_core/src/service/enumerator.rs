//! Exhaustive route enumeration over the public content tree.
//!
//! # Responsibility
//! - Collect every folder link or every note link reachable from the root.
//!
//! # Invariants
//! - Only Public categories are entered; Private subtrees are never listed.
//! - Each reachable folder/note yields exactly one link.
//! - Output is depth-first pre-order following separator order.
//! - A directory reached twice (symlink cycle or alias) fails the walk.

use crate::codec::path_codec::PathCodec;
use crate::error::{ContentError, ContentResult};
use crate::model::asset::RelativePath;
use crate::model::link::{Link, RouteFamily};
use crate::repo::asset_repo::AssetRepository;
use crate::service::separator::ContentSeparator;
use log::{error, info};
use std::collections::HashSet;
use std::time::Instant;

/// Route enumerator for one route family.
pub struct PathEnumerator<R: AssetRepository> {
    family: RouteFamily,
    repo: R,
    codec: PathCodec,
}

impl<R: AssetRepository> PathEnumerator<R> {
    pub fn new(family: RouteFamily, repo: R, codec: PathCodec) -> Self {
        Self {
            family,
            repo,
            codec,
        }
    }

    /// Enumerator collecting the root folder plus every reachable sub-folder.
    pub fn folders(repo: R, codec: PathCodec) -> Self {
        Self::new(RouteFamily::Folders, repo, codec)
    }

    /// Enumerator collecting every reachable note.
    pub fn notes(repo: R, codec: PathCodec) -> Self {
        Self::new(RouteFamily::Notes, repo, codec)
    }

    pub fn family(&self) -> RouteFamily {
        self.family
    }

    /// Walks the tree and returns every link of this enumerator's family.
    pub fn enumerate(&self) -> ContentResult<Vec<Link>> {
        let started_at = Instant::now();
        match self.walk() {
            Ok(links) => {
                info!(
                    "event=enumerate module=service status=ok family={} links={} duration_ms={}",
                    self.family.as_str(),
                    links.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(links)
            }
            Err(err) => {
                error!(
                    "event=enumerate module=service status=error family={} error_code={} error={}",
                    self.family.as_str(),
                    err.code(),
                    err
                );
                Err(err)
            }
        }
    }

    fn walk(&self) -> ContentResult<Vec<Link>> {
        let separator = ContentSeparator::new(&self.repo);
        let mut links = Vec::new();
        let mut visited = HashSet::new();
        let mut pending = vec![RelativePath::root()];

        while let Some(dir) = pending.pop() {
            let identity = self.repo.directory_identity(&dir)?;
            if !visited.insert(identity) {
                return Err(ContentError::CycleDetected {
                    path: dir.to_string(),
                });
            }

            let separated = separator.separate(&dir)?;
            match self.family {
                RouteFamily::Folders => links.push(self.codec.encode_folder_link(&dir)),
                RouteFamily::Notes => {
                    for note in &separated.notes {
                        links.push(self.codec.encode_note_link(&note.relative_path)?);
                    }
                }
            }

            pending.extend(
                separated
                    .categories
                    .into_iter()
                    .rev()
                    .map(|category| category.relative_path),
            );
        }

        Ok(links)
    }
}

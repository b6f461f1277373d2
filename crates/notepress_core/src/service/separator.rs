//! Folder content separation into categories and notes.
//!
//! # Invariants
//! - Private entries never appear in either partition.
//! - Partition order follows the repository listing order.
//! - An empty folder yields two empty partitions, not an error.

use crate::error::{ContentError, ContentResult};
use crate::model::asset::{Asset, AssetKind, RelativePath};
use crate::repo::asset_repo::{display_dir, AssetRepository};
use log::debug;

/// Public children of one folder, split by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeparatedAssets {
    pub categories: Vec<Asset>,
    pub notes: Vec<Asset>,
}

/// Splits folder children into sub-categories and notes.
pub struct ContentSeparator<R: AssetRepository> {
    repo: R,
}

impl<R: AssetRepository> ContentSeparator<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Separates the Public children of `folder`.
    ///
    /// # Errors
    /// - `NotFound` when `folder` is missing, not a directory, or has a
    ///   Private segment.
    /// - `Io` when the directory cannot be listed.
    pub fn separate(&self, folder: &RelativePath) -> ContentResult<SeparatedAssets> {
        if !folder.is_public() {
            return Err(ContentError::not_found(folder));
        }

        let mut separated = SeparatedAssets::default();
        let mut skipped = 0usize;
        for asset in self.repo.list_children(folder)? {
            if !asset.is_public() {
                skipped += 1;
                continue;
            }
            match asset.kind {
                AssetKind::Category => separated.categories.push(asset),
                AssetKind::Note => separated.notes.push(asset),
                AssetKind::Unknown => skipped += 1,
            }
        }

        debug!(
            "event=separate module=service status=ok path={} categories={} notes={} skipped={}",
            display_dir(folder),
            separated.categories.len(),
            separated.notes.len(),
            skipped
        );
        Ok(separated)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::ContentSeparator;
    use crate::error::{ContentError, ContentResult};
    use crate::model::asset::{Asset, RelativePath};
    use crate::repo::asset_repo::AssetRepository;
    use std::collections::HashMap;
    use std::path::PathBuf;

    /// In-memory tree with explicit, non-alphabetical listing order.
    #[derive(Default)]
    pub(crate) struct MemoryRepo {
        dirs: HashMap<String, Vec<(String, bool)>>,
        files: HashMap<String, String>,
    }

    impl MemoryRepo {
        pub(crate) fn dir(mut self, path: &str, children: &[(&str, bool)]) -> Self {
            self.dirs.insert(
                path.to_string(),
                children
                    .iter()
                    .map(|(name, is_dir)| (name.to_string(), *is_dir))
                    .collect(),
            );
            self
        }

        pub(crate) fn file(mut self, path: &str, text: &str) -> Self {
            self.files.insert(path.to_string(), text.to_string());
            self
        }
    }

    impl AssetRepository for MemoryRepo {
        fn list_children(&self, dir: &RelativePath) -> ContentResult<Vec<Asset>> {
            let children = self
                .dirs
                .get(&dir.to_string())
                .ok_or_else(|| ContentError::not_found(dir))?;
            children
                .iter()
                .map(|(name, is_dir)| Asset::child_of(dir, name, *is_dir))
                .collect()
        }

        fn read_text(&self, file: &RelativePath) -> ContentResult<String> {
            self.files
                .get(&file.to_string())
                .cloned()
                .ok_or_else(|| ContentError::not_found(file))
        }

        fn directory_identity(&self, dir: &RelativePath) -> ContentResult<PathBuf> {
            if self.dirs.contains_key(&dir.to_string()) {
                Ok(dir.to_path_buf())
            } else {
                Err(ContentError::not_found(dir))
            }
        }
    }

    fn names(assets: &[Asset]) -> Vec<&str> {
        assets.iter().map(|asset| asset.name.as_str()).collect()
    }

    #[test]
    fn separate_drops_private_and_unknown_entries() {
        let repo = MemoryRepo::default().dir(
            "guides",
            &[
                ("intro.md", false),
                ("_draft.md", false),
                (".cache", true),
                ("logo.png", false),
            ],
        );
        let separated = ContentSeparator::new(repo)
            .separate(&RelativePath::parse("guides").unwrap())
            .unwrap();
        assert!(separated.categories.is_empty());
        assert_eq!(names(&separated.notes), ["intro.md"]);
    }

    #[test]
    fn separate_preserves_listing_order() {
        let repo = MemoryRepo::default().dir(
            "",
            &[
                ("zeta.md", false),
                ("beta", true),
                ("alpha.md", false),
                ("alpha", true),
            ],
        );
        let separator = ContentSeparator::new(repo);
        let first = separator.separate(&RelativePath::root()).unwrap();
        assert_eq!(names(&first.notes), ["zeta.md", "alpha.md"]);
        assert_eq!(names(&first.categories), ["beta", "alpha"]);
        assert_eq!(separator.separate(&RelativePath::root()).unwrap(), first);
    }

    #[test]
    fn empty_folder_is_not_an_error() {
        let repo = MemoryRepo::default().dir("empty", &[("_hidden.md", false)]);
        let separated = ContentSeparator::new(repo)
            .separate(&RelativePath::parse("empty").unwrap())
            .unwrap();
        assert!(separated.categories.is_empty());
        assert!(separated.notes.is_empty());
    }

    #[test]
    fn private_or_missing_folder_is_not_found() {
        let repo = MemoryRepo::default().dir("_drafts", &[("intro.md", false)]);
        let separator = ContentSeparator::new(repo);
        assert!(matches!(
            separator.separate(&RelativePath::parse("_drafts").unwrap()),
            Err(ContentError::NotFound { .. })
        ));
        assert!(matches!(
            separator.separate(&RelativePath::parse("missing").unwrap()),
            Err(ContentError::NotFound { .. })
        ));
    }
}

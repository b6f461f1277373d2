//! Asset naming convention and relative path model.
//!
//! # Responsibility
//! - Classify directory entry names by visibility and kind.
//! - Represent content-root-relative paths as validated segment lists.
//!
//! # Invariants
//! - Visibility depends only on the leading character of the name.
//! - Kind is evaluated after visibility: a Private name is never a Note.
//! - A `RelativePath` can never name anything outside the content root.

use crate::error::{ContentError, ContentResult};
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// File name suffix identifying a note.
pub const NOTE_SUFFIX: &str = ".md";

const PRIVATE_PREFIXES: [char; 2] = ['.', '_'];

/// Returns `true` unless `name` starts with `.` or `_`.
pub fn is_public(name: &str) -> bool {
    !name.starts_with(PRIVATE_PREFIXES)
}

/// Exact complement of [`is_public`].
pub fn is_private(name: &str) -> bool {
    !is_public(name)
}

/// Returns `true` when `name` carries the note suffix after a non-empty stem.
///
/// Visibility is not checked here; use [`classify`] for the full rule.
pub fn is_note(name: &str) -> bool {
    name.len() > NOTE_SUFFIX.len() && name.ends_with(NOTE_SUFFIX)
}

/// Entry visibility derived from the naming convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
}

/// Entry kind derived from the naming convention and entry type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// Public file carrying the note suffix.
    Note,
    /// Public directory.
    Category,
    /// Anything else: private entries and public non-note files.
    Unknown,
}

/// Classifies one directory entry.
///
/// Kind follows the entry type: any Public directory is a Category, even one
/// named like a note, and a Public file without the note suffix is Unknown.
pub fn classify(name: &str, is_dir: bool) -> (Visibility, AssetKind) {
    if is_private(name) {
        return (Visibility::Private, AssetKind::Unknown);
    }
    let kind = if is_dir {
        AssetKind::Category
    } else if is_note(name) {
        AssetKind::Note
    } else {
        AssetKind::Unknown
    };
    (Visibility::Public, kind)
}

/// One filesystem entry under the content root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub name: String,
    pub relative_path: RelativePath,
    pub kind: AssetKind,
    pub visibility: Visibility,
}

impl Asset {
    /// Builds an asset for child `name` of `parent`, classifying it.
    pub fn child_of(parent: &RelativePath, name: &str, is_dir: bool) -> ContentResult<Self> {
        let (visibility, kind) = classify(name, is_dir);
        Ok(Self {
            name: name.to_string(),
            relative_path: parent.join(name)?,
            kind,
            visibility,
        })
    }

    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }
}

/// Ordered path segments from the content root.
///
/// The empty path denotes the content root itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelativePath {
    segments: Vec<String>,
}

impl RelativePath {
    /// The content root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Builds a path from segments, rejecting any that could escape the root.
    pub fn from_segments<I, S>(segments: I) -> ContentResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments = segments.into_iter().map(Into::into).collect::<Vec<_>>();
        for segment in &segments {
            validate_segment(segment).map_err(|reason| {
                ContentError::invalid_path(segments.join("/"), reason)
            })?;
        }
        Ok(Self { segments })
    }

    /// Parses a `/`-separated path. Leading and trailing slashes are ignored.
    pub fn parse(path: &str) -> ContentResult<Self> {
        let trimmed = path.trim_matches('/');
        if trimmed.is_empty() {
            return Ok(Self::root());
        }
        Self::from_segments(trimmed.split('/'))
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Final segment, `None` for the root.
    pub fn file_name(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Returns a new path with `name` appended.
    pub fn join(&self, name: &str) -> ContentResult<Self> {
        validate_segment(name)
            .map_err(|reason| ContentError::invalid_path(format!("{self}/{name}"), reason))?;
        let mut segments = self.segments.clone();
        segments.push(name.to_string());
        Ok(Self { segments })
    }

    /// `true` when every segment is Public. The root is public.
    pub fn is_public(&self) -> bool {
        self.segments.iter().all(|segment| is_public(segment))
    }

    /// Native relative path, to be joined onto the content root.
    pub fn to_path_buf(&self) -> PathBuf {
        self.segments.iter().collect()
    }
}

impl Display for RelativePath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.segments.join("/"))
    }
}

fn validate_segment(segment: &str) -> Result<(), &'static str> {
    if segment.is_empty() {
        return Err("empty path segment");
    }
    if segment == "." || segment == ".." {
        return Err("relative traversal segment");
    }
    if segment.contains('\0') || segment.chars().any(std::path::is_separator) {
        return Err("segment contains a path separator");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visibility_follows_leading_character() {
        assert!(is_public("intro.md"));
        assert!(is_public("guides"));
        assert!(!is_public(".git"));
        assert!(!is_public("_draft.md"));
        assert!(is_public("a_b.md"));
        for name in ["intro.md", ".hidden", "_draft", "x.y"] {
            assert_eq!(is_private(name), !is_public(name));
        }
    }

    #[test]
    fn note_suffix_rules() {
        assert!(is_note("intro.md"));
        assert!(!is_note("intro.txt"));
        assert!(!is_note(".md"));
        assert!(!is_note("intro.md.bak"));
    }

    #[test]
    fn private_note_name_is_not_a_note() {
        assert_eq!(
            classify(".draft.md", false),
            (Visibility::Private, AssetKind::Unknown)
        );
        assert_eq!(
            classify("_draft.md", false),
            (Visibility::Private, AssetKind::Unknown)
        );
        assert_eq!(
            classify("intro.md", false),
            (Visibility::Public, AssetKind::Note)
        );
        assert_eq!(
            classify("guides", true),
            (Visibility::Public, AssetKind::Category)
        );
        assert_eq!(
            classify("image.png", false),
            (Visibility::Public, AssetKind::Unknown)
        );
    }

    #[test]
    fn kind_follows_entry_type_before_suffix() {
        assert_eq!(
            classify("archive.md", true),
            (Visibility::Public, AssetKind::Category)
        );
        assert_eq!(
            classify("README", false),
            (Visibility::Public, AssetKind::Unknown)
        );
        assert_eq!(
            classify("_archive.md", true),
            (Visibility::Private, AssetKind::Unknown)
        );
    }

    #[test]
    fn relative_path_rejects_traversal() {
        assert!(RelativePath::from_segments(["guides", ".."]).is_err());
        assert!(RelativePath::from_segments(["a/b"]).is_err());
        assert!(RelativePath::from_segments([""]).is_err());
        assert!(RelativePath::root().join("..").is_err());
    }

    #[test]
    fn relative_path_parse_and_display() {
        let path = RelativePath::parse("/guides/intro.md").unwrap();
        assert_eq!(path.segments(), ["guides", "intro.md"]);
        assert_eq!(path.to_string(), "guides/intro.md");
        assert_eq!(path.file_name(), Some("intro.md"));
        assert!(RelativePath::parse("").unwrap().is_root());
        assert!(RelativePath::parse("a//b").is_err());
    }

    #[test]
    fn relative_path_publicity_checks_every_segment() {
        assert!(RelativePath::parse("guides/intro.md").unwrap().is_public());
        assert!(!RelativePath::parse("_drafts/intro.md").unwrap().is_public());
        assert!(RelativePath::root().is_public());
    }
}

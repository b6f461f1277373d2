//! Bidirectional mapping between relative paths and route links.
//!
//! # Invariants
//! - `decode_*(encode_*(p)) == p` for every relative path of Public segments.
//! - Folder links are the identity over segments; note links drop the note
//!   suffix of the final segment.

use crate::config::SiteConfig;
use crate::error::{ContentError, ContentResult};
use crate::model::asset::{is_note, RelativePath, NOTE_SUFFIX};
use crate::model::link::{Link, RouteFamily};

/// Path/link codec for both route families.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathCodec {
    folders_route_root: String,
    notes_route_root: String,
}

impl Default for PathCodec {
    fn default() -> Self {
        Self::new(&SiteConfig::default())
    }
}

impl PathCodec {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            folders_route_root: config.folders_route_root.clone(),
            notes_route_root: config.notes_route_root.clone(),
        }
    }

    /// Maps a note file path to its note link.
    pub fn encode_note_link(&self, path: &RelativePath) -> ContentResult<Link> {
        let mut segments = path.segments().to_vec();
        let stem = match segments.last_mut() {
            Some(last) if is_note(last) => last,
            _ => {
                return Err(ContentError::invalid_path(
                    path,
                    format!("note path must end with a `{NOTE_SUFFIX}` file"),
                ))
            }
        };
        stem.truncate(stem.len() - NOTE_SUFFIX.len());
        Ok(Link::new(RouteFamily::Notes, segments))
    }

    /// Maps note link segments back to the note file path.
    pub fn decode_note_link(&self, segments: &[String]) -> ContentResult<RelativePath> {
        let Some((last, parents)) = segments.split_last() else {
            return Err(ContentError::invalid_path("", "note link has no segments"));
        };
        let mut file_segments = parents.to_vec();
        file_segments.push(format!("{last}{NOTE_SUFFIX}"));
        RelativePath::from_segments(file_segments)
    }

    /// Maps a folder path to its folder link. The root maps to no segments.
    pub fn encode_folder_link(&self, path: &RelativePath) -> Link {
        Link::new(RouteFamily::Folders, path.segments().to_vec())
    }

    /// Maps folder link segments back to the folder path.
    pub fn decode_folder_link(&self, segments: &[String]) -> ContentResult<RelativePath> {
        RelativePath::from_segments(segments.iter().cloned())
    }

    /// Renders `link` as an href under its family's route root.
    pub fn href(&self, link: &Link) -> String {
        let root = match link.family() {
            RouteFamily::Folders => &self.folders_route_root,
            RouteFamily::Notes => &self.notes_route_root,
        };
        let mut href = root.clone();
        for segment in link.segments() {
            href.push('/');
            href.push_str(segment);
        }
        href
    }
}

#[cfg(test)]
mod tests {
    use super::PathCodec;
    use crate::config::SiteConfig;
    use crate::error::ContentError;
    use crate::model::asset::RelativePath;

    fn segments(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn note_link_round_trips() {
        let codec = PathCodec::default();
        for raw in ["intro.md", "guides/intro.md", "a/b.c/readme.md.md"] {
            let path = RelativePath::parse(raw).unwrap();
            let link = codec.encode_note_link(&path).unwrap();
            assert_eq!(codec.decode_note_link(link.segments()).unwrap(), path);
        }
    }

    #[test]
    fn folder_link_round_trips_including_root() {
        let codec = PathCodec::default();
        for raw in ["", "guides", "guides/sub"] {
            let path = RelativePath::parse(raw).unwrap();
            let link = codec.encode_folder_link(&path);
            assert_eq!(codec.decode_folder_link(link.segments()).unwrap(), path);
        }
    }

    #[test]
    fn note_link_strips_only_trailing_suffix() {
        let codec = PathCodec::default();
        let link = codec
            .encode_note_link(&RelativePath::parse("my.md.notes/intro.md").unwrap())
            .unwrap();
        assert_eq!(link.segments(), segments(&["my.md.notes", "intro"]));
        assert_eq!(codec.href(&link), "/notes/my.md.notes/intro");
    }

    #[test]
    fn encode_note_link_requires_note_file() {
        let codec = PathCodec::default();
        for raw in ["", "guides", "guides/intro.txt"] {
            let err = codec
                .encode_note_link(&RelativePath::parse(raw).unwrap())
                .unwrap_err();
            assert!(matches!(err, ContentError::InvalidPath { .. }), "{raw}");
        }
    }

    #[test]
    fn decode_rejects_empty_and_traversal_links() {
        let codec = PathCodec::default();
        assert!(codec.decode_note_link(&[]).is_err());
        assert!(codec.decode_note_link(&segments(&["..", "intro"])).is_err());
        assert!(codec.decode_folder_link(&segments(&["a/b"])).is_err());
    }

    #[test]
    fn families_share_segments_without_collision() {
        let codec = PathCodec::default();
        let folder = codec.encode_folder_link(&RelativePath::parse("guides").unwrap());
        let note = codec
            .encode_note_link(&RelativePath::parse("guides.md").unwrap())
            .unwrap();
        assert_eq!(folder.segments(), note.segments());
        assert_ne!(folder, note);
        assert_eq!(codec.href(&folder), "/folders/guides");
        assert_eq!(codec.href(&note), "/notes/guides");
    }

    #[test]
    fn href_uses_configured_roots() {
        let config = SiteConfig {
            folders_route_root: "/docs/browse".to_string(),
            ..SiteConfig::default()
        };
        let codec = PathCodec::new(&config);
        assert_eq!(
            codec.href(&codec.encode_folder_link(&RelativePath::root())),
            "/docs/browse"
        );
    }
}

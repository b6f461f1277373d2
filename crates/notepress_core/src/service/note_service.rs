//! Note loading use-cases.
//!
//! # Responsibility
//! - Load one note's title and body for single-note pages.
//! - Summarize every note of one folder for listings.
//! - Expose the note static path list.
//!
//! # Invariants
//! - Private or non-note paths are `NotFound`, even if a file exists there.
//! - Folder summaries keep separator order.
//! - Missing metadata fails the call; nothing is defaulted.

use crate::codec::path_codec::PathCodec;
use crate::error::{ContentError, ContentResult};
use crate::model::asset::{is_note, RelativePath};
use crate::model::content::{NoteContent, NoteDescription};
use crate::model::link::StaticPath;
use crate::repo::asset_repo::{display_dir, AssetRepository};
use crate::repo::note_source::{parse_note_source, NoteSource};
use crate::service::enumerator::PathEnumerator;
use crate::service::separator::ContentSeparator;
use log::{debug, error};

/// Note service facade over an asset repository.
pub struct NoteService<R: AssetRepository> {
    repo: R,
    codec: PathCodec,
}

impl<R: AssetRepository> NoteService<R> {
    pub fn new(repo: R, codec: PathCodec) -> Self {
        Self { repo, codec }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub fn codec(&self) -> &PathCodec {
        &self.codec
    }

    /// Loads title and body of the note at `path`.
    ///
    /// # Errors
    /// - `NotFound` when the note is absent, Private, or not a note file.
    /// - `Malformed` when the front matter is missing or has no title.
    pub fn get_note_content(&self, path: &RelativePath) -> ContentResult<NoteContent> {
        let result = self.load_source(path).and_then(|source| {
            Ok(NoteContent {
                title: source.front_matter.require_title(path)?,
                content: source.body,
            })
        });
        match &result {
            Ok(_) => debug!("event=note_load module=service status=ok path={path}"),
            Err(err) => error!(
                "event=note_load module=service status=error path={path} error_code={} error={err}",
                err.code()
            ),
        }
        result
    }

    /// Summarizes every Public note directly inside `folder`.
    pub fn get_folder_notes_details(
        &self,
        folder: &RelativePath,
    ) -> ContentResult<Vec<NoteDescription>> {
        let separated = ContentSeparator::new(&self.repo).separate(folder)?;
        let mut details = Vec::with_capacity(separated.notes.len());
        for note in &separated.notes {
            let path = &note.relative_path;
            let front_matter = self.load_source(path)?.front_matter;
            details.push(NoteDescription {
                title: front_matter.require_title(path)?,
                description: front_matter.require_description(path)?,
                publication_date: front_matter.require_publication_date(path)?,
                link: self.codec.href(&self.codec.encode_note_link(path)?),
            });
        }
        debug!(
            "event=folder_notes module=service status=ok path={} notes={}",
            display_dir(folder),
            details.len()
        );
        Ok(details)
    }

    /// Every reachable note, shaped as `noteKey` route parameters.
    pub fn get_all_notes_paths(&self) -> ContentResult<Vec<StaticPath>> {
        let links = PathEnumerator::notes(&self.repo, self.codec.clone()).enumerate()?;
        Ok(links.into_iter().map(StaticPath::from).collect())
    }

    fn load_source(&self, path: &RelativePath) -> ContentResult<NoteSource> {
        let is_public_note = path.is_public() && path.file_name().is_some_and(is_note);
        if !is_public_note {
            return Err(ContentError::not_found(path));
        }
        let text = self.repo.read_text(path)?;
        parse_note_source(path, &text)
    }
}

#[cfg(test)]
mod tests {
    use super::NoteService;
    use crate::codec::path_codec::PathCodec;
    use crate::error::ContentError;
    use crate::model::asset::RelativePath;
    use crate::service::separator::tests::MemoryRepo;

    const INTRO: &str = "---\ntitle: \"Intro\"\ndescription: Start here\ndate: 2021-05-01\n---\nHello";

    fn service(repo: MemoryRepo) -> NoteService<MemoryRepo> {
        NoteService::new(repo, PathCodec::default())
    }

    #[test]
    fn note_content_returns_title_and_body() {
        let repo = MemoryRepo::default().file("guides/intro.md", INTRO);
        let note = service(repo)
            .get_note_content(&RelativePath::parse("guides/intro.md").unwrap())
            .unwrap();
        assert_eq!(note.title, "Intro");
        assert_eq!(note.content, "Hello");
    }

    #[test]
    fn private_path_is_not_found_even_when_file_exists() {
        let repo = MemoryRepo::default()
            .file("guides/_draft.md", INTRO)
            .file("_hidden/intro.md", INTRO)
            .file("guides/intro.txt", INTRO);
        let service = service(repo);
        for raw in ["guides/_draft.md", "_hidden/intro.md", "guides/intro.txt", "missing.md"] {
            let err = service
                .get_note_content(&RelativePath::parse(raw).unwrap())
                .unwrap_err();
            assert!(matches!(err, ContentError::NotFound { .. }), "{raw}");
        }
    }

    #[test]
    fn folder_details_keep_listing_order() {
        let repo = MemoryRepo::default()
            .dir("", &[("b.md", false), ("a.md", false), ("_c.md", false)])
            .file("b.md", "---\ntitle: B\ndescription: bee\ndate: 2020-01-02\n---\n")
            .file("a.md", "---\ntitle: A\ndescription: ay\ndate: 2020-01-01\n---\n");
        let details = service(repo)
            .get_folder_notes_details(&RelativePath::root())
            .unwrap();
        let titles = details.iter().map(|d| d.title.as_str()).collect::<Vec<_>>();
        assert_eq!(titles, ["B", "A"]);
        assert_eq!(details[0].link, "/notes/b");
        assert_eq!(details[1].description, "ay");
    }

    #[test]
    fn folder_details_fail_on_missing_metadata() {
        let repo = MemoryRepo::default()
            .dir("guides", &[("intro.md", false)])
            .file("guides/intro.md", "---\ntitle: Intro\n---\nbody");
        let err = service(repo)
            .get_folder_notes_details(&RelativePath::parse("guides").unwrap())
            .unwrap_err();
        assert!(
            matches!(&err, ContentError::Malformed { path, reason }
                if path == "guides/intro.md" && reason.contains("description"))
        );
    }
}

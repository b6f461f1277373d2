//! Category display descriptions.

use crate::codec::path_codec::PathCodec;
use crate::model::asset::Asset;
use crate::model::content::CategoryDescription;
use once_cell::sync::Lazy;
use regex::Regex;

static WORD_SEPARATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[-_\s]+").expect("valid word separator regex"));

/// Maps category assets to navigable display entries.
#[derive(Debug, Clone, Default)]
pub struct CategoryService {
    codec: PathCodec,
}

impl CategoryService {
    pub fn new(codec: PathCodec) -> Self {
        Self { codec }
    }

    /// Describes each category in input order.
    pub fn describe(&self, categories: &[Asset]) -> Vec<CategoryDescription> {
        categories
            .iter()
            .map(|asset| CategoryDescription {
                title: humanize(&asset.name),
                link: self
                    .codec
                    .href(&self.codec.encode_folder_link(&asset.relative_path)),
            })
            .collect()
    }
}

/// Turns a directory name into a display title.
///
/// `getting-started_guides` becomes `Getting started guides`.
pub fn humanize(name: &str) -> String {
    let spaced = WORD_SEPARATOR_RE.replace_all(name, " ");
    let mut chars = spaced.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

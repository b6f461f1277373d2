//! Note source parsing: YAML front matter plus markdown body.
//!
//! # Responsibility
//! - Split a note file into its leading metadata block and body text.
//! - Validate required metadata per use-case.
//!
//! # Invariants
//! - The metadata block must open on the first line with `---` and close
//!   with a line that is exactly `---`.
//! - Missing metadata is an error; no field is ever defaulted.

use crate::error::{ContentError, ContentResult};
use crate::model::asset::RelativePath;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

const DELIMITER: &str = "---";

/// Raw metadata block of one note. All fields are optional at parse time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NoteFrontMatter {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
}

impl NoteFrontMatter {
    pub fn require_title(&self, path: &RelativePath) -> ContentResult<String> {
        require_field(path, "title", self.title.as_deref())
    }

    pub fn require_description(&self, path: &RelativePath) -> ContentResult<String> {
        require_field(path, "description", self.description.as_deref())
    }

    /// Parses `date` as RFC 3339 or `YYYY-MM-DD` (midnight UTC).
    pub fn require_publication_date(&self, path: &RelativePath) -> ContentResult<DateTime<Utc>> {
        let raw = require_field(path, "date", self.date.as_deref())?;
        parse_publication_date(&raw)
            .ok_or_else(|| ContentError::malformed(path, format!("unparseable `date` value `{raw}`")))
    }
}

/// Parsed note file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteSource {
    pub front_matter: NoteFrontMatter,
    pub body: String,
}

/// Splits `source` into front matter and body.
///
/// The body starts after the closing delimiter line.
pub fn parse_note_source(path: &RelativePath, source: &str) -> ContentResult<NoteSource> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let mut lines = source.split_inclusive('\n');

    let opening = lines
        .next()
        .ok_or_else(|| ContentError::malformed(path, "file is empty"))?;
    if trim_line_ending(opening) != DELIMITER {
        return Err(ContentError::malformed(
            path,
            "missing front matter block at start of file",
        ));
    }

    let yaml_start = opening.len();
    let mut offset = yaml_start;
    let mut closing = None;
    for line in lines {
        if trim_line_ending(line) == DELIMITER {
            closing = Some((offset, offset + line.len()));
            break;
        }
        offset += line.len();
    }
    let (yaml_end, body_start) = closing
        .ok_or_else(|| ContentError::malformed(path, "front matter is not closed with `---`"))?;

    let yaml = &source[yaml_start..yaml_end];
    let front_matter = if yaml.trim().is_empty() {
        NoteFrontMatter::default()
    } else {
        serde_yaml::from_str(yaml).map_err(|err| {
            ContentError::malformed(path, format!("invalid front matter: {err}"))
        })?
    };

    Ok(NoteSource {
        front_matter,
        body: source[body_start..].to_string(),
    })
}

fn trim_line_ending(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}

fn require_field(path: &RelativePath, field: &str, value: Option<&str>) -> ContentResult<String> {
    match value.map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(ContentError::malformed(
            path,
            format!("missing required metadata field `{field}`"),
        )),
    }
}

fn parse_publication_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(value) = DateTime::parse_from_rfc3339(raw) {
        return Some(value.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|value| value.and_utc())
}

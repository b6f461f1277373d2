//! Site configuration and content root bootstrap.
//!
//! # Responsibility
//! - Hold the content directory and route roots for one build.
//! - Validate configuration before any content is touched.
//!
//! # Invariants
//! - Route roots start with `/`, never end with `/`, and differ per family.
//! - `ContentRoot` always points at an existing, canonicalized directory.

use crate::model::link::RouteFamily;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Default content directory, relative to the working directory.
pub const DEFAULT_CONTENT_DIR: &str = "content";
/// Default route root for folder links.
pub const DEFAULT_FOLDERS_ROUTE_ROOT: &str = "/folders";
/// Default route root for note links.
pub const DEFAULT_NOTES_ROUTE_ROOT: &str = "/notes";

/// Errors from configuration loading and validation.
#[derive(Debug)]
pub enum ConfigError {
    /// Content directory setting is blank.
    EmptyContentDir,
    /// Route root does not match `/segment[/segment...]`.
    InvalidRouteRoot { family: RouteFamily, value: String },
    /// Both families were configured with the same route root.
    DuplicateRouteRoot(String),
    /// Configured content directory does not exist or is not a directory.
    MissingContentRoot(PathBuf),
    /// Config file could not be read.
    Io { path: PathBuf, source: std::io::Error },
    /// Config file is not valid JSON for `SiteConfig`.
    Parse(serde_json::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyContentDir => write!(f, "content_dir cannot be empty"),
            Self::InvalidRouteRoot { family, value } => write!(
                f,
                "invalid {} route root `{value}`; expected `/name` without trailing slash",
                family.as_str()
            ),
            Self::DuplicateRouteRoot(value) => {
                write!(f, "folders and notes cannot share route root `{value}`")
            }
            Self::MissingContentRoot(path) => {
                write!(f, "content root `{}` is not a directory", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Build configuration. Missing JSON fields fall back to defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub content_dir: PathBuf,
    pub folders_route_root: String,
    pub notes_route_root: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from(DEFAULT_CONTENT_DIR),
            folders_route_root: DEFAULT_FOLDERS_ROUTE_ROOT.to_string(),
            notes_route_root: DEFAULT_NOTES_ROUTE_ROOT.to_string(),
        }
    }
}

impl SiteConfig {
    /// Parses and validates a JSON config document.
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&source)
    }

    /// Checks declaration-level invariants. Does not touch the filesystem.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.content_dir.as_os_str().is_empty() {
            return Err(ConfigError::EmptyContentDir);
        }
        validate_route_root(RouteFamily::Folders, &self.folders_route_root)?;
        validate_route_root(RouteFamily::Notes, &self.notes_route_root)?;
        if self.folders_route_root == self.notes_route_root {
            return Err(ConfigError::DuplicateRouteRoot(
                self.notes_route_root.clone(),
            ));
        }
        Ok(())
    }

    /// Route root configured for `family`.
    pub fn route_root(&self, family: RouteFamily) -> &str {
        match family {
            RouteFamily::Folders => &self.folders_route_root,
            RouteFamily::Notes => &self.notes_route_root,
        }
    }
}

fn validate_route_root(family: RouteFamily, value: &str) -> Result<(), ConfigError> {
    let valid = value.len() > 1
        && value.starts_with('/')
        && !value.ends_with('/')
        && !value[1..].split('/').any(str::is_empty);
    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidRouteRoot {
            family,
            value: value.to_string(),
        })
    }
}

/// Canonicalized content root directory shared by every lookup in a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRoot {
    path: PathBuf,
}

impl ContentRoot {
    /// Opens the configured content directory.
    pub fn open(config: &SiteConfig) -> Result<Self, ConfigError> {
        Self::from_dir(&config.content_dir)
    }

    /// Opens `dir` as the content root.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let dir = dir.as_ref();
        let path = dir
            .canonicalize()
            .map_err(|_| ConfigError::MissingContentRoot(dir.to_path_buf()))?;
        if !path.is_dir() {
            return Err(ConfigError::MissingContentRoot(dir.to_path_buf()));
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = SiteConfig::default();
        config.validate().expect("defaults should validate");
        assert_eq!(config.route_root(RouteFamily::Folders), "/folders");
        assert_eq!(config.route_root(RouteFamily::Notes), "/notes");
    }

    #[test]
    fn json_fills_missing_fields_with_defaults() {
        let config = SiteConfig::from_json_str(r#"{ "content_dir": "site/content" }"#)
            .expect("partial config should parse");
        assert_eq!(config.content_dir, PathBuf::from("site/content"));
        assert_eq!(config.notes_route_root, "/notes");
    }

    #[test]
    fn rejects_bad_route_roots() {
        for value in ["notes", "/notes/", "/", "/a//b"] {
            let config = SiteConfig {
                notes_route_root: value.to_string(),
                ..SiteConfig::default()
            };
            assert!(
                matches!(config.validate(), Err(ConfigError::InvalidRouteRoot { .. })),
                "`{value}` should be rejected"
            );
        }
    }

    #[test]
    fn rejects_shared_route_root() {
        let config = SiteConfig {
            notes_route_root: "/folders".to_string(),
            ..SiteConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateRouteRoot(_))
        ));
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = SiteConfig::from_json_str(r#"{ "contentDir": "x" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn content_root_requires_existing_directory() {
        let err = ContentRoot::from_dir("/definitely/not/a/real/notepress/dir").unwrap_err();
        assert!(matches!(err, ConfigError::MissingContentRoot(_)));
    }
}

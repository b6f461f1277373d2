//! Content resolution errors.
//!
//! # Responsibility
//! - Define one error vocabulary shared by scanning, codec and service layers.
//! - Carry the offending relative path so operators can locate bad assets.
//!
//! # Invariants
//! - Every variant is fatal to the enclosing build step; nothing here is
//!   retried or replaced by defaults.
//! - An empty folder is never reported as an error.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;

/// Result type used by content resolution operations.
pub type ContentResult<T> = Result<T, ContentError>;

/// Errors from content scanning, path mapping and note loading.
#[derive(Debug)]
pub enum ContentError {
    /// Path is absent, or Private where a concrete asset was required.
    NotFound { path: String },
    /// Note metadata is missing, unparseable or incomplete.
    Malformed { path: String, reason: String },
    /// Underlying filesystem read/list failure.
    Io { path: String, source: io::Error },
    /// Route generation was invoked without its required path parameter.
    BuildTime(String),
    /// Link or segment list cannot name an asset under the content root.
    InvalidPath { path: String, reason: String },
    /// Directory was reached twice while walking the content tree.
    CycleDetected { path: String },
}

impl ContentError {
    pub(crate) fn not_found(path: impl Display) -> Self {
        Self::NotFound {
            path: path.to_string(),
        }
    }

    pub(crate) fn malformed(path: impl Display, reason: impl Into<String>) -> Self {
        Self::Malformed {
            path: path.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn io(path: impl Display, source: io::Error) -> Self {
        Self::Io {
            path: path.to_string(),
            source,
        }
    }

    pub(crate) fn invalid_path(path: impl Display, reason: impl Into<String>) -> Self {
        Self::InvalidPath {
            path: path.to_string(),
            reason: reason.into(),
        }
    }

    /// Stable machine-readable code, used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::Malformed { .. } => "malformed",
            Self::Io { .. } => "io_failure",
            Self::BuildTime(_) => "build_time",
            Self::InvalidPath { .. } => "invalid_path",
            Self::CycleDetected { .. } => "cycle_detected",
        }
    }
}

impl Display for ContentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { path } => write!(f, "content asset not found: `{path}`"),
            Self::Malformed { path, reason } => {
                write!(f, "malformed note `{path}`: {reason}")
            }
            Self::Io { path, source } => write!(f, "failed to read `{path}`: {source}"),
            Self::BuildTime(message) => write!(f, "build-time route error: {message}"),
            Self::InvalidPath { path, reason } => {
                write!(f, "invalid content path `{path}`: {reason}")
            }
            Self::CycleDetected { path } => {
                write!(f, "directory reached twice (cycle or alias) at `{path}`")
            }
        }
    }
}

impl Error for ContentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ContentError;
    use std::error::Error;
    use std::io;

    #[test]
    fn display_includes_offending_path() {
        let err = ContentError::malformed("guides/intro.md", "missing `title`");
        let message = err.to_string();
        assert!(message.contains("guides/intro.md"));
        assert!(message.contains("title"));
        assert_eq!(err.code(), "malformed");
    }

    #[test]
    fn io_error_exposes_source() {
        let err = ContentError::io(
            "guides",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.source().is_some());
        assert!(ContentError::not_found("x").source().is_none());
    }
}

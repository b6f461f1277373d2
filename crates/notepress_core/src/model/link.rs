//! Route families, links and static path records.
//!
//! # Invariants
//! - Folder links and note links are disjoint namespaces: `Link` equality
//!   includes the route family.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Route family a link belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteFamily {
    Folders,
    Notes,
}

impl RouteFamily {
    /// Route parameter name used by the page generation layer.
    pub fn param_name(self) -> &'static str {
        match self {
            Self::Folders => "id",
            Self::Notes => "noteKey",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Folders => "folders",
            Self::Notes => "notes",
        }
    }
}

/// Externally addressable route: an ordered segment list in one family.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Link {
    family: RouteFamily,
    segments: Vec<String>,
}

impl Link {
    pub(crate) fn new(family: RouteFamily, segments: Vec<String>) -> Self {
        Self { family, segments }
    }

    pub fn family(&self) -> RouteFamily {
        self.family
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

/// One static route registration: `{"params": {"<name>": [segments]}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticPath {
    family: RouteFamily,
    segments: Vec<String>,
}

impl StaticPath {
    pub fn family(&self) -> RouteFamily {
        self.family
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl From<Link> for StaticPath {
    fn from(link: Link) -> Self {
        Self {
            family: link.family,
            segments: link.segments,
        }
    }
}

impl Serialize for StaticPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct Params<'a>(&'a StaticPath);

        impl Serialize for Params<'_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(self.0.family.param_name(), &self.0.segments)?;
                map.end()
            }
        }

        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("params", &Params(self))?;
        map.end()
    }
}

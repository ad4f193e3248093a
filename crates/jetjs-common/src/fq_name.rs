//! Fully-qualified declaration paths.
//!
//! An `FqName` is the ordered list of name segments locating a declaration
//! from the root namespace, e.g. `jet.String.length`. The root namespace
//! itself has the empty path.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the reserved top-level namespace holding the built-in declarations.
pub const ROOT_NAMESPACE_NAME: &str = "jet";

/// Ordered, immutable sequence of name segments.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FqName {
    segments: Vec<String>,
}

impl FqName {
    /// The path of the root namespace.
    pub const ROOT: Self = Self {
        segments: Vec::new(),
    };

    pub fn new(segments: Vec<String>) -> Self {
        Self { segments }
    }

    /// Parse a dotted path. The empty string is the root path.
    pub fn parse(dotted: &str) -> Self {
        if dotted.is_empty() {
            return Self::ROOT;
        }
        Self {
            segments: dotted.split('.').map(str::to_string).collect(),
        }
    }

    pub fn path_segments(&self) -> &[String] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Last segment, `None` for the root path.
    pub fn short_name(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Path of the enclosing declaration, `None` for the root path.
    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }
        Some(Self {
            segments: self.segments[..self.segments.len() - 1].to_vec(),
        })
    }

    #[must_use]
    pub fn child(&self, name: impl Into<String>) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend(self.segments.iter().cloned());
        segments.push(name.into());
        Self { segments }
    }

    /// Whether the first segment is the reserved top-level namespace.
    pub fn is_in_root_namespace(&self) -> bool {
        self.segments
            .first()
            .is_some_and(|first| first == ROOT_NAMESPACE_NAME)
    }
}

impl fmt::Display for FqName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str("<root>");
        }
        f.write_str(&self.segments.join("."))
    }
}

impl From<Vec<String>> for FqName {
    fn from(segments: Vec<String>) -> Self {
        Self::new(segments)
    }
}

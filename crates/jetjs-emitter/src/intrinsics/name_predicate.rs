//! Single path segment matching.

use jetjs_common::ROOT_NAMESPACE_NAME;
use smallvec::SmallVec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Accepts a path segment equal to one of a fixed set of literal names.
///
/// Comparison is exact: no wildcards, no case folding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NamePredicate {
    names: SmallVec<[String; 2]>,
}

impl NamePredicate {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn single(name: impl Into<String>) -> Self {
        Self::new([name])
    }

    /// Predicate for the reserved top-level namespace (`jet`).
    pub fn root_namespace() -> Self {
        Self::single(ROOT_NAMESPACE_NAME)
    }

    /// `String|CharSequence` → accepts either name.
    pub fn parse_alternatives(segment: &str) -> Self {
        Self::new(segment.split('|'))
    }

    #[inline]
    pub fn accepts(&self, segment: &str) -> bool {
        self.names.iter().any(|name| name == segment)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl fmt::Display for NamePredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.names.join("|"))
    }
}

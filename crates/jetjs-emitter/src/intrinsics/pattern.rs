//! Dotted-path descriptor patterns.
//!
//! The pattern language is deliberately tiny:
//!
//! ```text
//! String|CharSequence.length   →   [jet] [String|CharSequence] [length]
//! ```
//!
//! `.` separates segments, `|` separates the alternatives of one segment and
//! the reserved `jet` namespace is always prepended. A pattern matches a
//! descriptor when its fully-qualified path has exactly as many segments as
//! the pattern and every segment is accepted in order.

use super::name_predicate::NamePredicate;
use crate::error::RegistryError;
use jetjs_descriptors::{DescriptorArena, DescriptorId};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

/// A test over resolved function descriptors.
///
/// Implementors are immutable after construction and shared freely between
/// threads.
pub trait DescriptorPredicate: Send + Sync {
    fn apply(&self, descriptors: &DescriptorArena, descriptor: DescriptorId) -> bool;
}

/// Sequence of name predicates matched segment by segment against a
/// fully-qualified path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DescriptorPattern {
    predicates: Vec<NamePredicate>,
}

impl DescriptorPattern {
    /// Build a rooted pattern: `jet`, then `prefix`, then the segments of
    /// `pattern`, then `suffix`.
    pub fn build(
        pattern: &str,
        prefix: Option<NamePredicate>,
        suffix: Option<NamePredicate>,
    ) -> Self {
        let mut predicates = Vec::with_capacity(pattern.matches('.').count() + 3);
        predicates.push(NamePredicate::root_namespace());
        predicates.extend(prefix);
        predicates.extend(parse_segments(pattern));
        predicates.extend(suffix);
        Self { predicates }
    }

    /// Rooted pattern from a string alone.
    pub fn parse(pattern: &str) -> Self {
        Self::build(pattern, None, None)
    }

    /// Like `parse`, rejecting empty segments (`a..b`, `a.`, `|b`).
    pub fn parse_strict(pattern: &str) -> Result<Self, RegistryError> {
        let has_empty = pattern
            .split('.')
            .flat_map(|segment| segment.split('|'))
            .any(str::is_empty);
        if has_empty {
            return Err(RegistryError::EmptySegment(pattern.to_string()));
        }
        Ok(Self::parse(pattern))
    }

    /// `prefix` predicate followed by the segments of `pattern`.
    pub fn with_prefix(prefix: NamePredicate, pattern: &str) -> Self {
        Self::build(pattern, Some(prefix), None)
    }

    /// Segments of `pattern` followed by the `suffix` predicate.
    pub fn with_suffix(pattern: &str, suffix: NamePredicate) -> Self {
        Self::build(pattern, None, Some(suffix))
    }

    /// Rooted pattern from explicit predicates.
    pub fn from_predicates(predicates: impl IntoIterator<Item = NamePredicate>) -> Self {
        let mut all = vec![NamePredicate::root_namespace()];
        all.extend(predicates);
        Self { predicates: all }
    }

    /// Pattern without the implicit `jet` predicate.
    pub fn unrooted(pattern: &str) -> Self {
        Self {
            predicates: parse_segments(pattern).collect(),
        }
    }

    pub fn predicates(&self) -> &[NamePredicate] {
        &self.predicates
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Match an already extracted path.
    pub fn matches_path<S: AsRef<str>>(&self, segments: &[S]) -> bool {
        if segments.len() != self.predicates.len() {
            trace!(
                expected = self.predicates.len(),
                found = segments.len(),
                "segment count mismatch"
            );
            return false;
        }
        self.predicates
            .iter()
            .zip(segments)
            .all(|(predicate, segment)| {
                let accepted = predicate.accepts(segment.as_ref());
                if !accepted {
                    trace!(%predicate, segment = segment.as_ref(), "segment rejected");
                }
                accepted
            })
    }

    /// Match a descriptor. A descriptor whose path cannot be extracted never matches.
    pub fn matches(&self, descriptors: &DescriptorArena, descriptor: DescriptorId) -> bool {
        match descriptors.fq_name(descriptor) {
            Ok(fq_name) => self.matches_path(fq_name.path_segments()),
            Err(err) => {
                trace!(%err, "no qualified path, treating as mismatch");
                false
            }
        }
    }
}

impl DescriptorPredicate for DescriptorPattern {
    fn apply(&self, descriptors: &DescriptorArena, descriptor: DescriptorId) -> bool {
        self.matches(descriptors, descriptor)
    }
}

impl fmt::Display for DescriptorPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, predicate) in self.predicates.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{predicate}")?;
        }
        Ok(())
    }
}

fn parse_segments(pattern: &str) -> impl Iterator<Item = NamePredicate> + '_ {
    pattern.split('.').map(NamePredicate::parse_alternatives)
}

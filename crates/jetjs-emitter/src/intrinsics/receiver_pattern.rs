//! Name-sequence patterns that also constrain the receiver parameter.

use super::pattern::DescriptorPredicate;
use jetjs_common::limits::MAX_CONTAINING_DECLARATION_DEPTH;
use jetjs_descriptors::{DescriptorArena, DescriptorId};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Matches a descriptor whose name, and the names of its containing
/// declarations, equal `names` read from the end, and whose receiver
/// presence equals `receiver_exists`.
///
/// `["jet", "arrayOf"]` matches the top-level `jet.arrayOf` and nothing nested
/// deeper: the root namespace must be reached exactly when the names run out.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiverPattern {
    names: Vec<String>,
    #[serde(default)]
    receiver_exists: bool,
}

impl ReceiverPattern {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            receiver_exists: false,
        }
    }

    #[must_use]
    pub const fn receiver_exists(mut self, receiver_exists: bool) -> Self {
        self.receiver_exists = receiver_exists;
        self
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub const fn requires_receiver(&self) -> bool {
        self.receiver_exists
    }

    pub fn matches(&self, descriptors: &DescriptorArena, descriptor: DescriptorId) -> bool {
        if self.names.is_empty() {
            return false;
        }
        if descriptors.has_receiver(descriptor) != self.receiver_exists {
            trace!(?descriptor, "receiver presence mismatch");
            return false;
        }

        let mut current = Some(descriptor);
        let mut expected = self.names.iter().rev();
        for _ in 0..MAX_CONTAINING_DECLARATION_DEPTH {
            let Some(id) = current else {
                return false;
            };
            if descriptors.is_root_namespace(id) {
                // Reached the root with names left over.
                return false;
            }
            let Some(name) = expected.next() else {
                return false;
            };
            if descriptors.name(id) != Some(name.as_str()) {
                trace!(?id, expected = %name, "name mismatch");
                return false;
            }
            current = descriptors.containing_declaration(id);
            if expected.len() == 0 {
                return current.is_some_and(|owner| descriptors.is_root_namespace(owner));
            }
        }
        trace!(?descriptor, "containing chain exceeds depth limit");
        false
    }
}

impl DescriptorPredicate for ReceiverPattern {
    fn apply(&self, descriptors: &DescriptorArena, descriptor: DescriptorId) -> bool {
        self.matches(descriptors, descriptor)
    }
}

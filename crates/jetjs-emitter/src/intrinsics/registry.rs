//! Table of intrinsic rules.
//!
//! Rules are searched from the most recently registered to the oldest, so a
//! rule added at runtime (for example from `jetjs.json`) shadows a built-in
//! rule that matches the same descriptor.

use super::function_intrinsic::FunctionIntrinsic;
use super::name_predicate::NamePredicate;
use super::pattern::{DescriptorPattern, DescriptorPredicate};
use super::receiver_pattern::ReceiverPattern;
use crate::error::RegistryError;
use jetjs_descriptors::{DescriptorArena, DescriptorId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Either kind of descriptor pattern.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IntrinsicPattern {
    Path(DescriptorPattern),
    Receiver(ReceiverPattern),
}

impl DescriptorPredicate for IntrinsicPattern {
    fn apply(&self, descriptors: &DescriptorArena, descriptor: DescriptorId) -> bool {
        match self {
            Self::Path(pattern) => pattern.apply(descriptors, descriptor),
            Self::Receiver(pattern) => pattern.apply(descriptors, descriptor),
        }
    }
}

impl From<DescriptorPattern> for IntrinsicPattern {
    fn from(pattern: DescriptorPattern) -> Self {
        Self::Path(pattern)
    }
}

impl From<ReceiverPattern> for IntrinsicPattern {
    fn from(pattern: ReceiverPattern) -> Self {
        Self::Receiver(pattern)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntrinsicRule {
    pub pattern: IntrinsicPattern,
    pub intrinsic: FunctionIntrinsic,
}

/// Serialized form of a rule.
///
/// ```json
/// { "pattern": "String.trim", "intrinsic": { "kind": "method_call", "method": "trim" } }
/// { "names": ["jet", "io", "print"], "intrinsic": { "kind": "global_call", "function": "console.log" } }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntrinsicRuleSpec {
    #[serde(flatten)]
    pub pattern: IntrinsicPatternSpec,
    pub intrinsic: FunctionIntrinsic,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IntrinsicPatternSpec {
    /// Rooted dotted pattern string.
    Path { pattern: String },
    /// Explicit name list, root namespace included.
    Receiver {
        names: Vec<String>,
        #[serde(default)]
        receiver_exists: bool,
    },
}

impl IntrinsicPatternSpec {
    pub fn compile(&self) -> Result<IntrinsicPattern, RegistryError> {
        match self {
            Self::Path { pattern } => Ok(DescriptorPattern::parse_strict(pattern)?.into()),
            Self::Receiver {
                names,
                receiver_exists,
            } => {
                if names.is_empty() {
                    return Err(RegistryError::EmptyReceiverPattern);
                }
                Ok(ReceiverPattern::new(names.iter().cloned())
                    .receiver_exists(*receiver_exists)
                    .into())
            }
        }
    }
}

/// Intrinsic lookup table.
#[derive(Clone, Debug, Default)]
pub struct IntrinsicRegistry {
    rules: Vec<IntrinsicRule>,
}

impl IntrinsicRegistry {
    /// Registry with no rules: every resolved call is lowered generically.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry preloaded with the standard library intrinsics.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        super::builtins::register_builtins(&mut registry);
        debug!(rules = registry.len(), "registered builtin intrinsics");
        registry
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rules(&self) -> &[IntrinsicRule] {
        &self.rules
    }

    pub fn register(&mut self, pattern: impl Into<IntrinsicPattern>, intrinsic: FunctionIntrinsic) {
        self.rules.push(IntrinsicRule {
            pattern: pattern.into(),
            intrinsic,
        });
    }

    /// Register a rooted pattern string (`Int|Double.plus`).
    pub fn register_pattern(&mut self, pattern: &str, intrinsic: FunctionIntrinsic) {
        self.register(DescriptorPattern::parse(pattern), intrinsic);
    }

    /// Register `prefix` followed by the segments of `pattern`.
    pub fn register_prefixed(
        &mut self,
        prefix: NamePredicate,
        pattern: &str,
        intrinsic: FunctionIntrinsic,
    ) {
        self.register(DescriptorPattern::with_prefix(prefix, pattern), intrinsic);
    }

    pub fn register_spec(&mut self, spec: &IntrinsicRuleSpec) -> Result<(), RegistryError> {
        let pattern = spec.pattern.compile()?;
        debug!(?pattern, intrinsic = spec.intrinsic.name(), "registered intrinsic");
        self.register(pattern, spec.intrinsic.clone());
        Ok(())
    }

    /// Register every rule of a JSON array of rule specs.
    pub fn extend_from_json(&mut self, json: &str) -> Result<usize, RegistryError> {
        let specs: Vec<IntrinsicRuleSpec> = serde_json::from_str(json)?;
        for spec in &specs {
            self.register_spec(spec)?;
        }
        Ok(specs.len())
    }

    /// The intrinsic of the newest rule matching `descriptor`.
    pub fn get_intrinsic(
        &self,
        descriptors: &DescriptorArena,
        descriptor: DescriptorId,
    ) -> Option<&FunctionIntrinsic> {
        self.rules
            .iter()
            .rev()
            .find(|rule| rule.pattern.apply(descriptors, descriptor))
            .map(|rule| &rule.intrinsic)
    }

    pub fn contains_match(&self, descriptors: &DescriptorArena, descriptor: DescriptorId) -> bool {
        self.get_intrinsic(descriptors, descriptor).is_some()
    }
}

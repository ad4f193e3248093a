//! `jetjs.json` configuration.
//!
//! ```json
//! {
//!   "indent": 2,
//!   "intrinsics": [
//!     { "pattern": "String.trim", "intrinsic": { "kind": "method_call", "method": "trim" } }
//!   ]
//! }
//! ```

use anyhow::{Context, Result};
use jetjs_emitter::intrinsics::IntrinsicRuleSpec;
use jetjs_emitter::IntrinsicRegistry;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_INDENT: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JetJsConfig {
    #[serde(default = "default_indent")]
    pub indent: usize,
    /// Extra rules registered after the builtins, so they take precedence.
    #[serde(default)]
    pub intrinsics: Vec<IntrinsicRuleSpec>,
}

fn default_indent() -> usize {
    DEFAULT_INDENT
}

impl Default for JetJsConfig {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
            intrinsics: Vec::new(),
        }
    }
}

impl JetJsConfig {
    /// Build the intrinsic table described by this configuration.
    pub fn intrinsic_registry(&self, builtins: bool) -> Result<IntrinsicRegistry> {
        let mut registry = if builtins {
            IntrinsicRegistry::builtin()
        } else {
            IntrinsicRegistry::empty()
        };
        for (index, spec) in self.intrinsics.iter().enumerate() {
            registry
                .register_spec(spec)
                .with_context(|| format!("invalid intrinsic rule #{index}"))?;
        }
        tracing::debug!(
            rules = registry.len(),
            extra = self.intrinsics.len(),
            "built intrinsic registry"
        );
        Ok(registry)
    }
}

pub fn parse_config(source: &str) -> Result<JetJsConfig> {
    let config = serde_json::from_str(source).context("failed to parse jetjs.json")?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<JetJsConfig> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    parse_config(&source).with_context(|| format!("failed to parse config: {}", path.display()))
}

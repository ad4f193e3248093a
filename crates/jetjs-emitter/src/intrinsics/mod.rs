//! Compiler intrinsics: descriptor patterns and the lowerings they select.
//!
//! A call whose resolved function matches a registered pattern is lowered
//! by the pattern's `FunctionIntrinsic` (`a + b`, `s.length`, `[1, 2]`)
//! instead of a generic call to the function.

mod builtins;
pub mod dispatch;
pub mod function_intrinsic;
pub mod name_predicate;
pub mod pattern;
pub mod receiver_pattern;
pub mod registry;

pub use dispatch::{has_corresponding_intrinsic, intrinsic_for_descriptor};
pub use function_intrinsic::{FunctionIntrinsic, IntrinsicCall, RUNTIME_OBJECT};
pub use name_predicate::NamePredicate;
pub use pattern::{DescriptorPattern, DescriptorPredicate};
pub use receiver_pattern::ReceiverPattern;
pub use registry::{
    IntrinsicPattern, IntrinsicPatternSpec, IntrinsicRegistry, IntrinsicRule, IntrinsicRuleSpec,
};

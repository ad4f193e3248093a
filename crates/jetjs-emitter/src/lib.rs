//! JavaScript lowering core of the jetjs translator.
//!
//! Takes a `ResolvedProgram` (source expressions, declaration descriptors
//! and resolver bindings) and lowers it to an `IRNode` tree, which
//! `IRPrinter` turns into JavaScript text.
//!
//! # Pipeline
//!
//! ```text
//! ResolvedProgram
//!   → translation        (translate_as_expression, per root)
//!       → intrinsics     (descriptor patterns pick a built-in lowering)
//!       → null_safety    (?., ?:, !!, == null)
//!       → call_site      (arguments, receivers, backing fields)
//!   → program_lowering   (temporaries hoisted per root)
//!   → ir_printer         (JavaScript text)
//! ```

pub mod call_site;
pub mod context;
pub mod error;
pub mod intrinsics;
pub mod ir;
pub mod ir_printer;
pub mod null_safety;
pub mod program_lowering;
pub mod temporary;
pub mod translation;

pub use context::TranslationContext;
pub use error::{LoweringError, RegistryError};
pub use intrinsics::{
    DescriptorPattern, DescriptorPredicate, FunctionIntrinsic, IntrinsicRegistry, NamePredicate,
    ReceiverPattern, has_corresponding_intrinsic,
};
pub use ir::{IRNode, IRParam, IRProperty, IRPropertyKey};
pub use ir_printer::IRPrinter;
pub use program_lowering::{emit_program, lower_program};
pub use temporary::{TemporaryScope, TemporaryVariable};
pub use translation::translate_as_expression;

#[cfg(test)]
#[path = "../tests/test_support.rs"]
mod test_support;

#[cfg(test)]
#[path = "../tests/name_predicate.rs"]
mod name_predicate_tests;
#[cfg(test)]
#[path = "../tests/pattern.rs"]
mod pattern_tests;
#[cfg(test)]
#[path = "../tests/receiver_pattern.rs"]
mod receiver_pattern_tests;
#[cfg(test)]
#[path = "../tests/registry.rs"]
mod registry_tests;
#[cfg(test)]
#[path = "../tests/function_intrinsic.rs"]
mod function_intrinsic_tests;
#[cfg(test)]
#[path = "../tests/dispatch.rs"]
mod dispatch_tests;
#[cfg(test)]
#[path = "../tests/temporary.rs"]
mod temporary_tests;
#[cfg(test)]
#[path = "../tests/null_safety.rs"]
mod null_safety_tests;
#[cfg(test)]
#[path = "../tests/call_site.rs"]
mod call_site_tests;
#[cfg(test)]
#[path = "../tests/translation.rs"]
mod translation_tests;
#[cfg(test)]
#[path = "../tests/program_lowering.rs"]
mod program_lowering_tests;

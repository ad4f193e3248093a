//! Declaration descriptors produced by the upstream resolver.
//!
//! The lowering core never resolves anything itself. It consumes:
//! - a `DescriptorArena` of namespaces, classes, functions and properties,
//!   each knowing its containing declaration, receiver parameter and modality
//! - a `BindingContext` mapping source nodes to the descriptors they refer to
//!   and operation expressions to their operator functions
//!
//! `ResolvedProgram` bundles both with the source `NodeArena`.

pub mod arena;
pub mod binding;
pub mod descriptor;
pub mod error;
pub mod program;

pub use arena::{ContainingChain, DescriptorArena, PropertyIds};
pub use binding::BindingContext;
pub use descriptor::{Descriptor, DescriptorId, DescriptorKind, FunctionSpec, Modality, PropertySpec};
pub use error::{DescriptorError, ProgramError};
pub use program::ResolvedProgram;

#[cfg(test)]
#[path = "../tests/arena.rs"]
mod arena_tests;
#[cfg(test)]
#[path = "../tests/program.rs"]
mod program_tests;

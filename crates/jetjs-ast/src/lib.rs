//! Resolved source expressions for the jetjs translator.
//!
//! Parsing and type checking happen upstream. This crate only models the
//! resolved expression tree the lowering core walks: a flat `NodeArena`
//! addressed by `NodeIndex`, in the data-oriented style of the rest of the
//! toolchain.

pub mod arena;
pub mod node;
pub mod operation;

pub use arena::NodeArena;
pub use node::{Constant, Node, NodeIndex, ValueArgument};
pub use operation::OperationToken;

#[cfg(test)]
#[path = "../tests/arena.rs"]
mod arena_tests;

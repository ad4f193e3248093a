//! Centralized limits and thresholds for the translator.
//!
//! Descriptor chains and expression trees both come from an upstream resolver
//! that this crate does not control. Every walk over them is bounded by one of
//! the constants below so a malformed program degrades into an error instead
//! of a hang or a stack overflow.

// =============================================================================
// Descriptor Walk Limits
// =============================================================================

/// Maximum number of containing declarations visited while walking from a
/// descriptor up to the root namespace.
///
/// Real programs rarely nest more than a handful of namespaces and classes.
/// A chain longer than this is treated as cyclic: path extraction fails and
/// the pattern matchers report "no match".
pub const MAX_CONTAINING_DECLARATION_DEPTH: usize = 256;

// =============================================================================
// Lowering Limits
// =============================================================================

/// Maximum nesting depth for expression lowering.
///
/// Lowering recurses once per nested source expression:
///
/// ```text
/// f(f(f(f(f(/* ... 500 levels ... */)))))
/// a.b.c.d.e.f.g /* ... hundreds of levels ... */
/// ```
pub const MAX_EXPRESSION_DEPTH: u32 = 500;

// =============================================================================
// Capacity Hints
// =============================================================================

/// Expected segment count of a fully-qualified path (`jet.String.length`).
pub const TYPICAL_PATH_SEGMENTS: usize = 4;

//! Common types and utilities for the jetjs translator.
//!
//! This crate provides foundational types used across all jetjs crates:
//! - Fully-qualified declaration paths (`FqName`)
//! - The reserved top-level namespace of the translated language
//! - Translator limits and thresholds

// Fully-qualified declaration paths
pub mod fq_name;
pub use fq_name::{FqName, ROOT_NAMESPACE_NAME};

// Centralized limits and thresholds
pub mod limits;

#[cfg(test)]
#[path = "../tests/fq_name.rs"]
mod fq_name_tests;

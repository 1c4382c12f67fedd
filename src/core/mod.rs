//! In-memory record index and catalog operations.

/// Event and ticket lifecycle operations with cross-record checks.
pub mod catalog;
/// Ordered binary search tree over keyed records.
pub mod tree;

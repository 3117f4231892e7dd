//! Common bound aliases used across topology code.
//!
//! The trait has a blanket impl, so any type satisfying the underlying
//! bounds automatically implements it. It only reduces duplication in
//! `where` clauses.

/// Canonical bound set for node identifiers.
///
/// - `Copy` for cheap pass-by-value in tight loops
/// - `Eq + Hash` for `HashMap`-backed adjacencies
/// - `Ord` to allow deterministic ordering (sorted landmarks, stable output)
/// - `Debug` for diagnostics and error messages
pub trait NodeLike: Copy + Eq + std::hash::Hash + Ord + std::fmt::Debug {}
impl<T> NodeLike for T where T: Copy + Eq + std::hash::Hash + Ord + std::fmt::Debug {}

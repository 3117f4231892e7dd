//! Top-level module for skeleton topology abstractions.
//!
//! This module provides the core types and traits for representing neuron
//! skeletons as rooted trees.
//! It includes:
//! - Node identifier types and the [`NodeLike`](bounds::NodeLike) bound
//! - The [`Arbor`] trait and its in-memory implementation
//! - Landmark sets (roots, leaves, bifurcations, terminals) and structural validation
//!
//! Most users will go through [`Skeleton`](crate::skeleton::Skeleton), which
//! wraps an [`InMemoryArbor`] together with node positions.

pub mod arbor;
pub mod bounds;
pub mod cache;
pub mod landmarks;
pub mod point;
pub mod validation;

pub use arbor::{Arbor, InMemoryArbor};
pub use cache::InvalidateCache;
pub use landmarks::Landmarks;

#![cfg_attr(docsrs, feature(doc_cfg))]
//! # skeleton-sieve
//!
//! skeleton-sieve is a small Rust library for neuron skeleton morphology. A
//! skeleton is a rooted tree of 3D points (as traced in EM reconstructions);
//! the library answers topological and geometric questions about it and
//! derives resampled or smoothed versions of it.
//!
//! ## Features
//! - Tree accessors: shortest paths, path lengths, branch order
//! - Decomposition into unbranched neurite segments
//! - Uniform resampling, per edge or by walking the tree
//! - Path-distance neighbourhoods and Gaussian smoothing of neurites
//! - Whole-neuron morphometrics (cable length, center of mass, longest paths)
//!
//! ## Determinism
//!
//! Every operation is a pure function of its input. Where an order is not
//! implied by the tree (landmark lists, root choice, leaf pairs) nodes are
//! visited in ascending identifier order; children keep their insertion
//! order.
//!
//! ## Usage
//! ```rust
//! use skeleton_sieve::prelude::*;
//!
//! let skeleton = Skeleton::try_from_parts(
//!     [
//!         (1u32, [0.0, 0.0, 0.0]),
//!         (2, [10.0, 0.0, 0.0]),
//!         (3, [20.0, 0.0, 0.0]),
//!         (4, [10.0, 10.0, 0.0]),
//!     ],
//!     [(2, 1), (3, 2), (4, 2)],
//! )?;
//! let neurites = skeleton.unique_neurites(None)?;
//! assert_eq!(neurites, vec![vec![1, 2], vec![2, 3], vec![2, 4]]);
//! assert_eq!(skeleton.path_length(3, 4)?, 20.0);
//! # Ok::<(), SkeletonError>(())
//! ```
//!
//! ## Logging
//! The crate logs through the [`log`] facade: `warn!` for malformed but
//! tolerated input (several roots, multi-parent nodes), `debug!` for
//! per-call summaries and `trace!` for per-edge detail. Install any logger
//! to see them.

// Re-export our major subsystems:
pub mod algs;
pub mod data;
pub mod debug_invariants;
pub mod geometry;
pub mod skeleton;
pub mod skeleton_error;
pub mod topology;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::morphometry::{
        center_of_mass, longest_neurite_length, longest_node_path, node_edge_array,
        root_to_leaf_pathlengths, total_pathlength,
    };
    pub use crate::algs::nearby::{NearbyOpts, WindowMetric, find_nearby_points};
    pub use crate::algs::neurites::unique_neurites;
    pub use crate::algs::resample::{
        DEFAULT_RESAMPLE_DISTANCE, EdgeSpan, resampled_edge_array, resampled_node_array,
    };
    pub use crate::algs::smooth::{SmoothingConfig, gaussian_smooth_neuron, gaussian_smooth_points};
    pub use crate::algs::traversal::{branch_order, path_length, shortest_path};
    pub use crate::data::coordinates::Coordinates;
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::geometry::{Axis, Point3};
    pub use crate::skeleton::Skeleton;
    pub use crate::skeleton_error::SkeletonError;
    pub use crate::topology::arbor::{Arbor, InMemoryArbor};
    pub use crate::topology::bounds::NodeLike;
    pub use crate::topology::point::NodeId;
    pub use crate::topology::validation::validate_tree;
}

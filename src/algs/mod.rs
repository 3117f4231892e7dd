//! Re-export public algorithms.

pub mod morphometry;
pub mod nearby;
pub mod neurites;
pub mod resample;
pub mod smooth;
pub mod traversal;

pub use nearby::{NearbyOpts, WindowMetric, find_nearby_indices, find_nearby_points};
pub use neurites::unique_neurites;
pub use resample::{DEFAULT_RESAMPLE_DISTANCE, EdgeSpan, resampled_edge_array, resampled_node_array};
pub use smooth::{SmoothingConfig, gaussian_smooth_neuron, gaussian_smooth_points};
pub use traversal::{branch_order, path_length, shortest_path};

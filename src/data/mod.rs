//! Data module: per-node geometry

pub mod coordinates;

/// Node → position storage.
pub use coordinates::Coordinates;

//! Parent/child topology of a skeleton.
//!
//! [`Arbor`] is the read-only accessor every algorithm in the crate is written
//! against; [`InMemoryArbor`] is the hash-map backed implementation.

pub mod arbor_trait;
pub mod in_memory;

pub use arbor_trait::Arbor;
pub use in_memory::InMemoryArbor;

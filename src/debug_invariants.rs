use crate::skeleton::Skeleton;
use crate::skeleton_error::SkeletonError;
use crate::topology::bounds::NodeLike;
use crate::topology::validation::validate_tree;

/// Trait for validating data structure invariants.
pub trait DebugInvariants {
    /// Assert invariants in debug builds or when invariant checking is enabled.
    fn debug_assert_invariants(&self);
    /// Validate invariants and return the first error encountered.
    fn validate_invariants(&self) -> Result<(), SkeletonError>;
}

/// Helper macro to run a fallible check and panic on error when invariant
/// checking is enabled.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}

impl<P: NodeLike> DebugInvariants for Skeleton<P> {
    fn debug_assert_invariants(&self) {
        #[cfg(debug_assertions)]
        self.arbor().debug_assert_consistent();
        crate::debug_invariants!(self.validate_invariants(), "Skeleton");
    }

    fn validate_invariants(&self) -> Result<(), SkeletonError> {
        validate_tree(self)
    }
}

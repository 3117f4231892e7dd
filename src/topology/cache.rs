//! Cache invalidation shared by structures that memoize derived topology.

/// Anything that caches derived topology (landmark sets, root lookups)
/// implements this so that mutations can drop stale results.
pub trait InvalidateCache {
    /// Invalidate *all* internal caches so future queries recompute correctly.
    fn invalidate_cache(&mut self);
}

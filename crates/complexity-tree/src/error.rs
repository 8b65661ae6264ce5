/// Error type for the suffix-tree and LZ-tree-parser operations.
///
/// Re-exported from [`complexity_core`] rather than redefined: the three
/// failure modes a tree operation can hit (bad input, allocation failure,
/// broken active-point invariant) are the one taxonomy the whole workspace
/// shares, so every crate re-uses the same enum instead of inventing its
/// own.
pub use complexity_core::ComplexityError as TreeError;
pub use complexity_core::Result;

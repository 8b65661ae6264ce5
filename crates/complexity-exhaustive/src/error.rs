/// Error type for the exhaustive enumerator.
///
/// Re-exported from [`complexity_core`], the one taxonomy shared across the
/// workspace: `InvalidInput` for an out-of-range `L`/`Cmax`,
/// `ResourceExhausted` for allocation failure during recursion.
pub use complexity_core::ComplexityError as ExhaustiveError;
pub use complexity_core::Result;

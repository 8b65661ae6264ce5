/// Error type for the naive kernels and batch driver.
///
/// Re-exported from [`complexity_core`], the one taxonomy shared across
/// the workspace: `InvalidInput` for bad parameters (e.g. `d == 0` for
/// block entropy), `ResourceExhausted` for allocation failure, and
/// `StateCorruption` for internal bugs.
pub use complexity_core::ComplexityError as KernelError;
pub use complexity_core::Result;

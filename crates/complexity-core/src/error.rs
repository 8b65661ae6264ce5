use std::fmt::Display;
use thiserror::Error;

/// Errors shared by every complexity-measure kernel.
///
/// The taxonomy has three members, matching how the kernels can actually
/// fail: the caller handed over something nonsensical, an allocation did
/// not succeed, or an internal invariant was violated (a bug, not a user
/// error).
#[derive(Debug, Error)]
pub enum ComplexityError {
    /// The caller's input does not satisfy a precondition.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of why the input is invalid
        reason: String,
    },

    /// Failed to allocate memory for a kernel's working state.
    #[error("Failed to allocate memory: {reason}")]
    ResourceExhausted {
        /// The reason for the allocation failure
        reason: String,
    },

    /// An internal invariant was violated.
    ///
    /// Only reachable via a bug in this crate (e.g. the suffix tree's
    /// active point referencing an edge that was never created). Callers
    /// should treat this as a defect report, not a recoverable condition.
    #[error("Internal state corruption: {reason}")]
    StateCorruption {
        /// Description of the violated invariant
        reason: String,
    },
}

/// A specialized `Result` type used throughout the complexity-measure crates.
pub type Result<T> = std::result::Result<T, ComplexityError>;

impl ComplexityError {
    /// Creates a new `InvalidInput` error.
    pub fn invalid_input(reason: impl Display) -> Self {
        Self::InvalidInput {
            reason: reason.to_string(),
        }
    }

    /// Creates a new `ResourceExhausted` error.
    pub fn resource_exhausted(reason: impl Display) -> Self {
        Self::ResourceExhausted {
            reason: reason.to_string(),
        }
    }

    /// Creates a new `StateCorruption` error.
    pub fn state_corruption(reason: impl Display) -> Self {
        Self::StateCorruption {
            reason: reason.to_string(),
        }
    }
}

/*!
Shared error taxonomy and numeric helpers for the complexity-measures
crates (`complexity-tree`, `complexity-kernels`, `complexity-exhaustive`).

This crate carries no algorithms of its own — it exists so the other
crates in the workspace share one error type and one set of sentinel
constants instead of each inventing their own.
*/

pub mod error;
pub mod numeric;

pub use error::{ComplexityError, Result};
pub use numeric::{log2_or_zero, SENTINEL_F64, SENTINEL_I64};

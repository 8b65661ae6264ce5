/*!
Naive LZ76/LZ78/block-entropy kernels and the parallel batch driver.

These are the direct re-scanning implementations: `O(n^2)`-ish single-call
kernels, plus a `rayon`-backed batch driver (behind the `parallel`
feature, on by default) that runs them over many rows with per-worker
reusable scratch buffers instead of allocating per row. For the
`O(n)`-amortized single-sequence LZ76 walk, see `complexity-tree`;
[`batch::batch_lz_tree`] wraps that walk for batches too.

# Usage Example
```rust
use complexity_kernels::{lz76_naive, block_entropy};

let complexity = lz76_naive(b"aababcabcd");
assert!((complexity - 4.0 * (10f64).log2()).abs() < 1e-9);

let entropy = block_entropy(b"abab", 1).unwrap();
assert!((entropy - 1.0).abs() < 1e-9);
```
*/

pub mod batch;
pub mod error;
pub mod naive;
pub mod scratch;

pub use batch::{
    batch_apply, batch_block_entropy, batch_cond_lz76, batch_cond_lz78, batch_lz76, batch_lz78,
    batch_lz_tree, batch_symmetric_block_entropy, batch_symmetric_lz76, batch_symmetric_lz78,
};
pub use error::{KernelError, Result};
pub use naive::{
    block_entropy, cond_lz76, cond_lz78, lz76_naive, lz78_naive, symmetric_block_entropy,
    symmetric_lz76, symmetric_lz78, Lz78Mode,
};
pub use scratch::WorkerScratch;

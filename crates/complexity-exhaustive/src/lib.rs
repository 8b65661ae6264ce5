/*!
Exhaustive enumeration of the LZ76 phrase-count distribution over the full
binary-alphabet space `{0,1}^L`.

Unlike `complexity-kernels` (single sequences supplied by the caller) and
`complexity-tree` (one sequence, amortized O(n)), this crate enumerates
*every* length-`L` binary string via a depth-first walk over the implicit
binary tree, carrying an incremental LZ76 parser state down each path and
deep-copying it at every branch. [`distribution`] parallelizes that walk by
pre-computing the `2^d` length-`d` prefix states sequentially, then handing
each independent sub-tree to a worker with its own histogram.

# Usage Example
```rust
use complexity_exhaustive::{distribution, enumerate_all};

let mut counts = vec![0i64; 1 << 3];
enumerate_all(3, &mut counts).unwrap();
assert_eq!(counts, vec![2, 3, 3, 3, 3, 3, 3, 2]);

let hist = distribution(3, 5, 4).unwrap();
assert_eq!(hist, vec![0, 0, 2, 6, 0]);
```
*/

pub mod enumerate;
pub mod error;
pub mod state;

pub use enumerate::{distribution, enumerate_all, DISTRIBUTION_MAX_L, ENUMERATE_ALL_MAX_L};
pub use error::{ExhaustiveError, Result};
pub use state::IncrementalLzState;

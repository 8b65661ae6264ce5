/*!
Public contract surface for the complexity-measures workspace.

This is the crate a collaborator — a future CLI, an FFI layer, a language
binding — links against. It re-exports the stable, documented entry points
from `complexity-tree`, `complexity-kernels`, and `complexity-exhaustive`,
and adds a handful of thin, contract-shaped wrappers (`lz76`, `lz78`,
`lz76_tree`) so a caller matching that naming doesn't need to know which
implementation crate backs which measure. Downstream code should depend on
this crate rather than reaching into the implementation crates directly,
the way a workspace root crate re-exports its leaf crates instead of every
consumer depending on each one individually.

All functions here take raw byte slices with their length implied by the
slice itself — no in-band terminator, no assumption about the alphabet;
byte values are arbitrary and the algorithms do not assume a particular
alphabet.

# Usage Example
```rust
use complexity::{lz76, lz76_tree, block_entropy, cond_lz76};

// "aababcabcd" parses a|ab|abc|abcd -> 4 phrases.
let seq = b"aababcabcd";
assert!((lz76(seq) - 4.0 * 10f64.log2()).abs() < 1e-9);
assert_eq!(lz76_tree(seq).unwrap(), 4);

// block_entropy("abab", 2) ~= 0.918296.
assert!((block_entropy(b"abab", 2).unwrap() - 0.918296).abs() < 1e-5);

// cond_lz76("ab", "cd") == 6.
assert_eq!(cond_lz76(b"ab", b"cd").unwrap(), 6.0);
```
*/

pub use complexity_core::{ComplexityError, Result, SENTINEL_F64, SENTINEL_I64};
pub use complexity_exhaustive::{
    distribution, enumerate_all, IncrementalLzState, DISTRIBUTION_MAX_L, ENUMERATE_ALL_MAX_L,
};
pub use complexity_kernels::{
    batch_apply, batch_block_entropy, batch_cond_lz76, batch_cond_lz78, batch_lz76, batch_lz78,
    batch_lz_tree, batch_symmetric_block_entropy, batch_symmetric_lz76, batch_symmetric_lz78,
    block_entropy, lz78_naive, Lz78Mode, WorkerScratch,
};
pub use complexity_tree::{LzTreeParser, SuffixTree};

/// LZ76 complexity via direct re-scanning, normalized as
/// `dictionary_size * log2(n)`. This is `complexity_kernels::lz76_naive`
/// under its public contract name.
pub fn lz76(seq: &[u8]) -> f64 {
    complexity_kernels::lz76_naive(seq)
}

/// LZ78 complexity (prefix-search variant, the default mode) — the raw
/// dictionary size, not normalized. Equivalent to
/// `lz78_naive(seq, Lz78Mode::PrefixSearch)`.
pub fn lz78(seq: &[u8]) -> f64 {
    lz78_naive(seq, Lz78Mode::PrefixSearch)
}

/// LZ76 complexity via the online suffix-tree parser: the raw phrase
/// count, *not* multiplied by `log2(n)`. `lz76_tree(seq) == lz76(seq) /
/// log2(n)` for `|seq| > 1`.
pub fn lz76_tree(seq: &[u8]) -> Result<usize> {
    LzTreeParser::complexity_of(seq)
}

/// `LZ76(x ++ y) - LZ76(x)` (**C(Y|X)**, not C(X|Y)); `0.0` if either
/// operand is empty. Allocates a private scratch buffer per call — see
/// [`batch_cond_lz76`] for the scratch-reusing batch form.
pub fn cond_lz76(x: &[u8], y: &[u8]) -> Result<f64> {
    let mut scratch = WorkerScratch::new();
    complexity_kernels::cond_lz76(x, y, &mut scratch)
}

/// `LZ78(x ++ y) - LZ78(x)` in the default (prefix-search) mode, analogous
/// to [`cond_lz76`].
pub fn cond_lz78(x: &[u8], y: &[u8]) -> Result<f64> {
    let mut scratch = WorkerScratch::new();
    complexity_kernels::cond_lz78(x, y, Lz78Mode::PrefixSearch, &mut scratch)
}

/// Mean of `lz76(seq)` and `lz76(reverse(seq))`.
pub fn symmetric_lz76(seq: &[u8]) -> Result<f64> {
    let mut scratch = WorkerScratch::new();
    complexity_kernels::symmetric_lz76(seq, &mut scratch)
}

/// Mean of `lz78(seq)` and `lz78(reverse(seq))` in the default
/// (prefix-search) mode.
pub fn symmetric_lz78(seq: &[u8]) -> Result<f64> {
    let mut scratch = WorkerScratch::new();
    complexity_kernels::symmetric_lz78(seq, Lz78Mode::PrefixSearch, &mut scratch)
}

/// Mean of `block_entropy(seq, dimension)` and
/// `block_entropy(reverse(seq), dimension)`.
pub fn symmetric_block_entropy(seq: &[u8], dimension: usize) -> Result<f64> {
    let mut scratch = WorkerScratch::new();
    complexity_kernels::symmetric_block_entropy(seq, dimension, &mut scratch)
}

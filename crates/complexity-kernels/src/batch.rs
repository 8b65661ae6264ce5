use complexity_core::{ComplexityError, SENTINEL_F64};
use complexity_tree::LzTreeParser;

use crate::error::Result;
use crate::naive::{
    block_entropy, cond_lz76, cond_lz78, lz76_naive, lz78_naive, symmetric_block_entropy,
    symmetric_lz76, symmetric_lz78, Lz78Mode,
};
use crate::scratch::WorkerScratch;

/// Turns a per-row kernel outcome into the batch-driver's two-tier failure
/// policy: `InvalidInput`/`StateCorruption` write the row's sentinel and
/// let the batch continue, but `ResourceExhausted` propagates so the whole
/// batch can abort — an allocation failure is the driver's own failure,
/// not a property of one row's input.
fn row_outcome(result: Result<f64>) -> Result<f64> {
    match result {
        Ok(value) => Ok(value),
        Err(err @ ComplexityError::ResourceExhausted { .. }) => Err(err),
        Err(_) => Ok(SENTINEL_F64),
    }
}

/// Runs `kernel` over every item in `inputs`, giving each worker its own
/// reusable [`WorkerScratch`]. Reports a per-row failure as
/// [`SENTINEL_F64`] rather than aborting the whole batch — except an
/// allocation failure, which aborts the batch with `ResourceExhausted`.
///
/// Sequential when the `parallel` feature is off.
pub fn batch_apply<T, F>(inputs: &[T], kernel: F) -> Result<Vec<f64>>
where
    T: Sync,
    F: Fn(&T, &mut WorkerScratch) -> Result<f64> + Sync,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        inputs
            .par_iter()
            .map_init(WorkerScratch::new, |scratch, item| {
                row_outcome(kernel(item, scratch))
            })
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        let mut scratch = WorkerScratch::new();
        inputs
            .iter()
            .map(|item| row_outcome(kernel(item, &mut scratch)))
            .collect()
    }
}

/// `lz76_naive` over a batch. Infallible per row, so every entry is a real
/// result (never the sentinel).
pub fn batch_lz76(seqs: &[&[u8]]) -> Vec<f64> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        seqs.par_iter().map(|seq| lz76_naive(seq)).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        seqs.iter().map(|seq| lz76_naive(seq)).collect()
    }
}

/// `lz78_naive` over a batch, all rows run in the same [`Lz78Mode`].
pub fn batch_lz78(seqs: &[&[u8]], mode: Lz78Mode) -> Vec<f64> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        seqs.par_iter().map(|seq| lz78_naive(seq, mode)).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        seqs.iter().map(|seq| lz78_naive(seq, mode)).collect()
    }
}

/// `block_entropy` over a batch at a fixed window `dimension`. A row whose
/// `dimension` is invalid for its length writes the sentinel; the batch as
/// a whole only fails on allocation failure.
pub fn batch_block_entropy(seqs: &[&[u8]], dimension: usize) -> Result<Vec<f64>> {
    batch_apply(seqs, move |seq, _scratch| block_entropy(seq, dimension))
}

/// `symmetric_lz76` over a batch.
pub fn batch_symmetric_lz76(seqs: &[&[u8]]) -> Result<Vec<f64>> {
    batch_apply(seqs, |seq, scratch| symmetric_lz76(seq, scratch))
}

/// `symmetric_lz78` over a batch, all rows run in the same [`Lz78Mode`].
pub fn batch_symmetric_lz78(seqs: &[&[u8]], mode: Lz78Mode) -> Result<Vec<f64>> {
    batch_apply(seqs, move |seq, scratch| symmetric_lz78(seq, mode, scratch))
}

/// `symmetric_block_entropy` over a batch at a fixed window `dimension`.
pub fn batch_symmetric_block_entropy(seqs: &[&[u8]], dimension: usize) -> Result<Vec<f64>> {
    batch_apply(seqs, move |seq, scratch| {
        symmetric_block_entropy(seq, dimension, scratch)
    })
}

/// `cond_lz76` over a batch of `(x, y)` pairs.
pub fn batch_cond_lz76(pairs: &[(&[u8], &[u8])]) -> Result<Vec<f64>> {
    batch_apply(pairs, |&(x, y), scratch| cond_lz76(x, y, scratch))
}

/// `cond_lz78` over a batch of `(x, y)` pairs, all rows run in the same
/// [`Lz78Mode`].
pub fn batch_cond_lz78(pairs: &[(&[u8], &[u8])], mode: Lz78Mode) -> Result<Vec<f64>> {
    batch_apply(pairs, move |&(x, y), scratch| cond_lz78(x, y, mode, scratch))
}

/// LZ76 phrase count over a batch using the online suffix-tree parser
/// instead of the naive re-scan, returning the raw (un-normalized) count.
/// Each worker reuses one [`LzTreeParser`], reset between rows. The only
/// failure mode a tree/parser row can hit is allocation failure, so any
/// error here aborts the batch rather than writing [`SENTINEL_I64`] — there
/// is no "bad input" case to sentinel around, unlike the naive kernels.
pub fn batch_lz_tree(seqs: &[&[u8]]) -> Result<Vec<i64>> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        seqs.par_iter()
            .map_init(LzTreeParser::new, |parser, seq| lz_tree_complexity(parser, seq))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        let mut parser = LzTreeParser::new();
        seqs.iter()
            .map(|seq| lz_tree_complexity(&mut parser, seq))
            .collect()
    }
}

fn lz_tree_complexity(parser: &mut LzTreeParser, seq: &[u8]) -> Result<i64> {
    parser.reset();
    for &s in seq.iter() {
        parser.feed(s)?;
    }
    Ok(parser.complexity() as i64)
}

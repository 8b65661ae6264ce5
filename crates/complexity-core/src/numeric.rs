/// Sentinel written into a batch output slot when a single sequence's
/// kernel call fails, rather than propagating the error and aborting the
/// whole batch.
pub const SENTINEL_F64: f64 = -1.0;

/// Integer counterpart of [`SENTINEL_F64`], used by phrase-count outputs.
pub const SENTINEL_I64: i64 = -1;

/// `log2(n)` for the normalization convention used by the naive LZ76
/// kernel: dictionary size is multiplied by `log2(n)`, not returned
/// raw. Returns `0.0` for `n <= 1` so callers never need to special-case
/// the degenerate length themselves before calling this.
pub fn log2_or_zero(n: usize) -> f64 {
    if n <= 1 {
        0.0
    } else {
        (n as f64).log2()
    }
}

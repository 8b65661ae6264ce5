use crate::error::{ExhaustiveError, Result};
use crate::state::IncrementalLzState;

/// Practical upper bound on `L` for [`enumerate_all`]: the output array has
/// `2^L` entries, so `L` beyond this would need a multi-gigabyte buffer.
pub const ENUMERATE_ALL_MAX_L: u32 = 24;

/// Practical upper bound on `L` for [`distribution`]: no output-size limit
/// (a histogram is `Cmax` entries regardless of `L`), but the enumeration
/// itself is compute-bound at `2^L` leaves.
pub const DISTRIBUTION_MAX_L: u32 = 30;

/// Writes the LZ76 phrase count of every binary string of length `L` into
/// `out`, indexed by interpreting the string as an `L`-bit unsigned integer
/// (MSB first).
///
/// `out` must have exactly `2^L` entries; this function fills every one of
/// them or returns an error before writing anything.
pub fn enumerate_all(l: u32, out: &mut [i64]) -> Result<()> {
    if l == 0 {
        return Err(ExhaustiveError::invalid_input("L must be positive"));
    }
    if l > ENUMERATE_ALL_MAX_L {
        return Err(ExhaustiveError::invalid_input(format!(
            "L={l} exceeds the enumerate_all bound of {ENUMERATE_ALL_MAX_L} (output is 2^L entries)"
        )));
    }
    let expected_len = 1usize << l;
    if out.len() != expected_len {
        return Err(ExhaustiveError::invalid_input(format!(
            "output slice has {} entries, expected 2^L = {expected_len}",
            out.len()
        )));
    }

    walk_all(&IncrementalLzState::new(), 0, l, 0, out)
}

fn walk_all(
    state: &IncrementalLzState,
    depth: u32,
    target: u32,
    index: usize,
    out: &mut [i64],
) -> Result<()> {
    if depth == target {
        out[index] = state.complexity() as i64;
        return Ok(());
    }
    for bit in 0u8..=1 {
        let mut child = state.clone();
        child.advance(bit)?;
        walk_all(&child, depth + 1, target, (index << 1) | bit as usize, out)?;
    }
    Ok(())
}

/// Returns the histogram of LZ76 phrase counts over every binary string of
/// length `L`: `H[c]` is the number of strings whose phrase count is `c`,
/// except that every count `>= Cmax - 1` collapses into bin `Cmax - 1`.
///
/// The depth-first walk is split at `d = ceil(log2(workers))` (clamped to
/// `[0, L]`): the `2^d` length-`d` prefix states are computed sequentially,
/// then each of the `2^d` independent sub-trees of depth `L - d` is handed
/// to a worker with a private histogram, summed into the result after the
/// parallel region joins — no atomics needed on the hot path.
pub fn distribution(l: u32, cmax: usize, workers: usize) -> Result<Vec<i64>> {
    if l == 0 {
        return Err(ExhaustiveError::invalid_input("L must be positive"));
    }
    if l > DISTRIBUTION_MAX_L {
        return Err(ExhaustiveError::invalid_input(format!(
            "L={l} exceeds the distribution bound of {DISTRIBUTION_MAX_L}"
        )));
    }
    if cmax == 0 {
        return Err(ExhaustiveError::invalid_input("Cmax must be positive"));
    }

    let split_depth = split_depth_for(workers, l);
    let remaining = l - split_depth;
    let prefix_states = collect_prefix_states(split_depth)?;

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        prefix_states
            .par_iter()
            .map(|state| histogram_for_subtree(state, remaining, cmax))
            .try_reduce(|| vec![0i64; cmax], |mut acc, part| {
                for (a, p) in acc.iter_mut().zip(part) {
                    *a += p;
                }
                Ok(acc)
            })
    }
    #[cfg(not(feature = "parallel"))]
    {
        let mut hist = vec![0i64; cmax];
        for state in &prefix_states {
            let part = histogram_for_subtree(state, remaining, cmax)?;
            for (a, p) in hist.iter_mut().zip(part) {
                *a += p;
            }
        }
        Ok(hist)
    }
}

/// Number of leading bits fixed sequentially before dispatching `2^d`
/// independent sub-tasks, so that `2^d >= workers` (clamped to `L`).
/// `workers <= 1` runs fully serially (`d = 0`).
fn split_depth_for(workers: usize, l: u32) -> u32 {
    if workers <= 1 {
        return 0;
    }
    let mut depth = 0u32;
    let mut capacity = 1usize;
    while capacity < workers && depth < l {
        capacity <<= 1;
        depth += 1;
    }
    depth
}

/// Computes the `IncrementalLzState` for each of the `2^d` length-`d`
/// prefixes, in MSB-first index order, sequentially — this part must stay
/// serial since each state depends on the bits before it.
fn collect_prefix_states(d: u32) -> Result<Vec<IncrementalLzState>> {
    let mut states = Vec::with_capacity(1usize << d);
    walk_prefixes(&IncrementalLzState::new(), 0, d, &mut states)?;
    Ok(states)
}

fn walk_prefixes(
    state: &IncrementalLzState,
    depth: u32,
    target: u32,
    states: &mut Vec<IncrementalLzState>,
) -> Result<()> {
    if depth == target {
        states.push(state.clone());
        return Ok(());
    }
    for bit in 0u8..=1 {
        let mut child = state.clone();
        child.advance(bit)?;
        walk_prefixes(&child, depth + 1, target, states)?;
    }
    Ok(())
}

/// Explores the `2^remaining`-leaf sub-tree rooted at `state` and returns a
/// private histogram of the leaves' final phrase counts, collapsing
/// `>= cmax - 1` into the last bin.
fn histogram_for_subtree(state: &IncrementalLzState, remaining: u32, cmax: usize) -> Result<Vec<i64>> {
    let mut hist = vec![0i64; cmax];
    walk_histogram(state, 0, remaining, cmax, &mut hist)?;
    Ok(hist)
}

fn walk_histogram(
    state: &IncrementalLzState,
    depth: u32,
    target: u32,
    cmax: usize,
    hist: &mut [i64],
) -> Result<()> {
    if depth == target {
        let bin = state.complexity().min(cmax - 1);
        hist[bin] += 1;
        return Ok(());
    }
    for bit in 0u8..=1 {
        let mut child = state.clone();
        child.advance(bit)?;
        walk_histogram(&child, depth + 1, target, cmax, hist)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumerate_all_rejects_zero_length() {
        let mut out = [0i64; 1];
        assert!(enumerate_all(0, &mut out).is_err());
    }

    #[test]
    fn test_enumerate_all_rejects_mismatched_output_length() {
        let mut out = vec![0i64; 4];
        assert!(enumerate_all(3, &mut out).is_err());
    }

    #[test]
    fn test_enumerate_all_rejects_length_over_bound() {
        let mut out = vec![0i64; 1];
        assert!(enumerate_all(ENUMERATE_ALL_MAX_L + 1, &mut out).is_err());
    }

    #[test]
    fn test_enumerate_all_l1() {
        let mut out = vec![0i64; 2];
        enumerate_all(1, &mut out).unwrap();
        // Every single-symbol string is one phrase.
        assert_eq!(out, vec![1, 1]);
    }

    #[test]
    fn test_enumerate_all_l3_matches_worked_example() {
        let mut out = vec![0i64; 8];
        enumerate_all(3, &mut out).unwrap();
        assert_eq!(out, vec![2, 3, 3, 3, 3, 3, 3, 2]);
    }

    #[test]
    fn test_distribution_l3_cmax5_workers4_matches_worked_example() {
        let hist = distribution(3, 5, 4).unwrap();
        assert_eq!(hist, vec![0, 0, 2, 6, 0]);
    }

    #[test]
    fn test_distribution_is_independent_of_worker_count() {
        let serial = distribution(6, 10, 1).unwrap();
        for workers in [2usize, 3, 4, 8, 16] {
            let parallel = distribution(6, 10, workers).unwrap();
            assert_eq!(serial, parallel, "mismatch at workers={workers}");
        }
    }

    #[test]
    fn test_distribution_sums_to_2_pow_l() {
        let l = 7u32;
        let hist = distribution(l, 12, 4).unwrap();
        let total: i64 = hist.iter().sum();
        assert_eq!(total, 1i64 << l);
    }

    #[test]
    fn test_distribution_zero_bin_is_empty_for_l_at_least_1() {
        let hist = distribution(5, 8, 4).unwrap();
        assert_eq!(hist[0], 0);
    }

    #[test]
    fn test_distribution_matches_enumerate_all() {
        let l = 6u32;
        let cmax = 20usize;
        let mut counts = vec![0i64; 1usize << l];
        enumerate_all(l, &mut counts).unwrap();
        let mut expected = vec![0i64; cmax];
        for &c in &counts {
            let bin = (c as usize).min(cmax - 1);
            expected[bin] += 1;
        }
        let hist = distribution(l, cmax, 4).unwrap();
        assert_eq!(hist, expected);
    }

    #[test]
    fn test_distribution_rejects_zero_length() {
        assert!(distribution(0, 5, 1).is_err());
    }

    #[test]
    fn test_distribution_rejects_zero_cmax() {
        assert!(distribution(3, 0, 1).is_err());
    }

    #[test]
    fn test_split_depth_clamped_to_l() {
        // 1024 workers but L=3 can only split 3 deep.
        assert_eq!(split_depth_for(1024, 3), 3);
    }

    #[test]
    fn test_split_depth_one_worker_is_serial() {
        assert_eq!(split_depth_for(1, 10), 0);
        assert_eq!(split_depth_for(0, 10), 0);
    }
}

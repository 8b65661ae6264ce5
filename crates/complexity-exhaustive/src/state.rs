use crate::error::{ExhaustiveError, Result};

/// Incremental LZ76 parser state carried along one path of the exhaustive
/// enumeration.
///
/// Unlike the suffix-tree parser (`complexity_tree::LzTreeParser`), this
/// state is deliberately the plain `parsed_text` / `current_word` pair from
/// the naive LZ76 definition: the enumerator only ever extends a path by a
/// handful of bits before branching, so a suffix tree's amortized-O(n)
/// advantage never pays for its setup cost here. [`Clone`] is the whole
/// point: branching into the `0` and `1` children deep-copies this state.
#[derive(Debug, Clone)]
pub struct IncrementalLzState {
    parsed_text: Vec<u8>,
    current_word: Vec<u8>,
    dictionary_size: usize,
}

impl Default for IncrementalLzState {
    fn default() -> Self {
        Self::new()
    }
}

impl IncrementalLzState {
    /// The state at the root of the enumeration: no phrases parsed yet.
    pub fn new() -> Self {
        Self {
            parsed_text: Vec::new(),
            current_word: Vec::new(),
            dictionary_size: 0,
        }
    }

    /// Extends the path by one symbol, mirroring the LZ76 step shared with
    /// `complexity_kernels::lz76_naive`: `current_word` grows by `symbol`,
    /// then membership of the full `current_word` in
    /// `parsed_text ++ current_word[..len-1]` decides whether the phrase
    /// continues or a new one is committed.
    pub fn advance(&mut self, symbol: u8) -> Result<()> {
        self.current_word
            .try_reserve(1)
            .map_err(|e| ExhaustiveError::resource_exhausted(format!("current word: {e}")))?;
        self.current_word.push(symbol);

        let prefix_len = self.current_word.len() - 1;
        let tail = &self.current_word[..prefix_len];
        if contains_straddling(&self.parsed_text, tail, &self.current_word) {
            return Ok(());
        }

        self.parsed_text
            .try_reserve(self.current_word.len())
            .map_err(|e| ExhaustiveError::resource_exhausted(format!("parsed text: {e}")))?;
        self.parsed_text.extend_from_slice(&self.current_word);
        self.dictionary_size += 1;
        self.current_word.clear();
        Ok(())
    }

    /// `dictionary_size + 1` if a phrase is in progress, else
    /// `dictionary_size`.
    pub fn complexity(&self) -> usize {
        self.dictionary_size + usize::from(!self.current_word.is_empty())
    }
}

/// True iff `needle` occurs as a contiguous substring of the logical
/// concatenation `parsed ++ tail`, without materializing that concatenation.
///
/// The enumerator calls this once per bit along every path, so avoiding an
/// allocation here (versus `parsed.to_vec() + tail` then a plain
/// `windows().any()`) matters for the deep, narrow recursion this performs.
fn contains_straddling(parsed: &[u8], tail: &[u8], needle: &[u8]) -> bool {
    if needle.is_empty() {
        return true;
    }
    let total_len = parsed.len() + tail.len();
    if needle.len() > total_len {
        return false;
    }
    (0..=(total_len - needle.len())).any(|start| window_matches(parsed, tail, start, needle))
}

fn window_matches(parsed: &[u8], tail: &[u8], start: usize, needle: &[u8]) -> bool {
    needle.iter().enumerate().all(|(i, &nb)| {
        let pos = start + i;
        let b = if pos < parsed.len() {
            parsed[pos]
        } else {
            tail[pos - parsed.len()]
        };
        b == nb
    })
}

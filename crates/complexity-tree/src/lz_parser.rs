use crate::error::Result;
use crate::tree::SuffixTree;

/// An LZ76 parser that walks a [`SuffixTree`] it shares with the caller's
/// feed loop, rather than re-scanning the whole prefix for every symbol.
///
/// # The one-symbol lag
///
/// The suffix tree must always represent the prefix of the sequence
/// *excluding* the symbol currently being considered: [`Self::feed`]
/// first appends the *previous* symbol to the tree, then walks the LZ
/// active point by the *current* symbol against the tree as it stood
/// before that append. This is what lets the LZ walk ask "does the
/// current phrase already occur earlier in the text?" without the
/// in-progress phrase polluting its own answer.
pub struct LzTreeParser {
    tree: SuffixTree,
    active_node: usize,
    active_edge_first_char_index: Option<usize>,
    active_length: usize,
    dictionary_size: usize,
    current_word_length: usize,
    /// The most recently fed symbol, not yet appended to `tree`.
    pending: Option<u8>,
}

impl Default for LzTreeParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LzTreeParser {
    /// Creates a parser over an empty sequence.
    pub fn new() -> Self {
        let tree = SuffixTree::new();
        let root = tree.root();
        Self {
            tree,
            active_node: root,
            active_edge_first_char_index: None,
            active_length: 0,
            dictionary_size: 0,
            current_word_length: 0,
            pending: None,
        }
    }

    /// Resets the parser to process a new sequence from scratch, reusing
    /// the suffix tree's allocated capacity.
    pub fn reset(&mut self) {
        self.tree.reset();
        self.active_node = self.tree.root();
        self.active_edge_first_char_index = None;
        self.active_length = 0;
        self.dictionary_size = 0;
        self.current_word_length = 0;
        self.pending = None;
    }

    /// Accepts the next symbol of the sequence. Returns `true` iff a
    /// phrase completed on this symbol.
    pub fn feed(&mut self, s: u8) -> Result<bool> {
        if let Some(prev) = self.pending.take() {
            self.tree.add_symbol(prev)?;
        }
        self.pending = Some(s);

        if self.extend(s) {
            self.current_word_length += 1;
            Ok(false)
        } else {
            self.dictionary_size += 1;
            self.active_node = self.tree.root();
            self.active_edge_first_char_index = None;
            self.active_length = 0;
            self.current_word_length = 0;
            Ok(true)
        }
    }

    /// Feeds an entire sequence and returns its LZ76 phrase count (the
    /// raw count, not the `size * log2(n)` normalization the naive kernel
    /// applies — see `complexity-kernels::lz76_naive`).
    pub fn complexity_of(seq: &[u8]) -> Result<usize> {
        let mut parser = Self::new();
        for &s in seq {
            parser.feed(s)?;
        }
        Ok(parser.complexity())
    }

    /// `dictionary_size + 1` if a phrase is in progress, else
    /// `dictionary_size`.
    pub fn complexity(&self) -> usize {
        self.dictionary_size + usize::from(self.current_word_length > 0)
    }

    fn extend(&mut self, s: u8) -> bool {
        loop {
            if self.active_length == 0 {
                return match self.tree.child(self.active_node, s) {
                    None => false,
                    Some(edge) => {
                        self.active_edge_first_char_index = Some(self.tree.edge_start(edge));
                        self.active_length = 1;
                        // No transition here even if this edge's length is
                        // exactly 1: an open leaf edge grows by one symbol
                        // the next time the tree is fed, so whether the
                        // active point has actually reached the edge's end
                        // can only be decided against the *next* call's
                        // (possibly grown) edge length, not this one. A
                        // closed edge that happens to have length 1 just
                        // parks here for one extra call; harmless, since no
                        // symbol is consumed between calls to settle it.
                        if self.active_length == self.tree.edge_len(edge)
                            && self.tree.edge_is_closed(edge)
                        {
                            self.descend_into(edge);
                        }
                        true
                    }
                };
            }

            let first_char = self
                .tree
                .text_at(self.active_edge_first_char_index.expect("active_length > 0"));
            let edge = self
                .tree
                .child(self.active_node, first_char)
                .expect("active edge must exist while active_length > 0");
            let elen = self.tree.edge_len(edge);

            if self.active_length < elen {
                let cmp_pos = self.tree.edge_start(edge) + self.active_length;
                return if self.tree.text_at(cmp_pos) == s {
                    self.active_length += 1;
                    // Same deferral as above: only a closed edge can
                    // legitimately be considered exhausted within this
                    // call.
                    if self.active_length == elen && self.tree.edge_is_closed(edge) {
                        self.descend_into(edge);
                    }
                    true
                } else {
                    false
                };
            }

            // active_length >= elen: the active point is parked past the
            // end of this edge from a previous call. An open leaf edge
            // always grows by one symbol before this point is reached
            // again (it resolves its length against the live text), so it
            // can never still be exhausted here; only a closed edge can.
            debug_assert!(
                self.tree.edge_is_closed(edge),
                "LZ active point reached the end of a still-open edge"
            );
            self.descend_into(edge);
        }
    }

    fn descend_into(&mut self, edge: usize) {
        self.active_node = edge;
        self.active_length = 0;
        self.active_edge_first_char_index = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_naive_phrase_count() {
        // "a | ab | abc | abcd" -> 4 phrases, matching the naive LZ76 walk.
        let seq = b"aababcabcd";
        assert_eq!(LzTreeParser::complexity_of(seq).unwrap(), 4);
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(LzTreeParser::complexity_of(b"").unwrap(), 0);
    }

    #[test]
    fn test_single_symbol() {
        assert_eq!(LzTreeParser::complexity_of(b"a").unwrap(), 1);
    }

    #[test]
    fn test_residual_phrase_counted() {
        // "aaab": a | a | ab -> parses as a|a|ab? Walk through: current=a,
        // haystack empty -> not found -> phrase "a", dict=1. current=a,
        // haystack="a" -> found -> current=aa. current=ab? No: next symbol
        // is 'a' again then 'b'. Just assert it agrees with a direct
        // reimplementation below instead of hand-tracing.
        let seq = b"aaab";
        let mut parsed: Vec<u8> = Vec::new();
        let mut current: Vec<u8> = Vec::new();
        let mut dict = 0usize;
        for &s in seq {
            current.push(s);
            let mut haystack = parsed.clone();
            haystack.extend_from_slice(&current[..current.len() - 1]);
            if contains(&haystack, &current) {
                continue;
            }
            parsed.extend_from_slice(&current);
            dict += 1;
            current.clear();
        }
        let expected = dict + usize::from(!current.is_empty());
        assert_eq!(LzTreeParser::complexity_of(seq).unwrap(), expected);
    }

    #[test]
    fn test_reset_equals_fresh() {
        let mut parser = LzTreeParser::new();
        for &s in b"banana" {
            parser.feed(s).unwrap();
        }
        parser.reset();
        for &s in b"abcabc" {
            parser.feed(s).unwrap();
        }
        assert_eq!(
            parser.complexity(),
            LzTreeParser::complexity_of(b"abcabc").unwrap()
        );
    }

    #[test]
    fn test_agrees_with_naive_on_random_like_sequences() {
        let cases: &[&[u8]] = &[
            b"",
            b"a",
            b"aa",
            b"aaa",
            b"abab",
            b"abcabcabc",
            b"mississippi",
            b"aababcabcabcd",
            &[0, 1, 0, 1, 1, 0, 0, 1],
        ];
        for &seq in cases {
            let mut parsed: Vec<u8> = Vec::new();
            let mut current: Vec<u8> = Vec::new();
            let mut dict = 0usize;
            for &s in seq {
                current.push(s);
                let mut haystack = parsed.clone();
                haystack.extend_from_slice(&current[..current.len() - 1]);
                if contains(&haystack, &current) {
                    continue;
                }
                parsed.extend_from_slice(&current);
                dict += 1;
                current.clear();
            }
            let expected = dict + usize::from(!current.is_empty());
            assert_eq!(
                LzTreeParser::complexity_of(seq).unwrap(),
                expected,
                "mismatch for {seq:?}"
            );
        }
    }

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        if needle.is_empty() {
            return true;
        }
        haystack.windows(needle.len()).any(|w| w == needle)
    }
}

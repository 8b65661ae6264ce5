use std::collections::HashMap;

use crate::error::{Result, TreeError};

/// Index of the root node. The root is created once in [`SuffixTree::new`]
/// and never removed.
const ROOT: usize = 0;

/// A node in the suffix tree, identified by its position in
/// [`SuffixTree::nodes`]. A node also stores the edge that leads into it
/// from its parent (`start`, `end`), so "node" and "edge" share an index
/// here rather than being separate arenas — there is exactly one incoming
/// edge per non-root node.
#[derive(Debug)]
struct Node {
    /// Start index (inclusive) in the shared text buffer for the edge
    /// leading into this node.
    start: usize,
    /// End index (exclusive) for the edge leading into this node.
    /// `None` means the edge is a leaf edge and implicitly extends to the
    /// current end of the text (the Ukkonen "open" edge).
    end: Option<usize>,
    /// Outgoing edges keyed by their first byte. At most one child per
    /// key, per the suffix-tree invariant that no two edges out of a node
    /// share a first character.
    children: HashMap<u8, usize>,
    /// Suffix link to another node. The root's suffix link is implicitly
    /// itself (`None` resolves to [`ROOT`] when followed).
    suffix_link: Option<usize>,
}

impl Node {
    fn new(start: usize, end: Option<usize>) -> Self {
        Self {
            start,
            end,
            children: HashMap::new(),
            suffix_link: None,
        }
    }
}

/// Active point for Ukkonen's construction algorithm: the position in the
/// tree where the next suffix extension begins. `edge_first_char_index` is
/// an index into the shared text buffer (not the byte itself), so it can
/// be advanced in place while walking down a multi-edge path.
#[derive(Debug, Clone)]
struct ActivePoint {
    node: usize,
    edge_first_char_index: Option<usize>,
    length: usize,
}

/// An online suffix tree over a sequence of byte-valued symbols, built
/// incrementally with Ukkonen's algorithm.
///
/// Unlike a batch construction that consumes the whole text up front,
/// [`SuffixTree::add_symbol`] extends the tree by exactly one symbol per
/// call and leaves the tree representing the *entire* text seen so far.
/// This is what lets [`crate::lz_parser::LzTreeParser`] interleave tree
/// construction with an independent walk over the same tree, one symbol
/// behind.
#[derive(Debug)]
pub struct SuffixTree {
    text: Vec<u8>,
    nodes: Vec<Node>,
    /// Current length of `text`; resolves every open (`end: None`) edge.
    text_len: usize,
    last_internal_node: Option<usize>,
    active: ActivePoint,
    remainder: usize,
}

impl Default for SuffixTree {
    fn default() -> Self {
        Self::new()
    }
}

impl SuffixTree {
    /// Creates an empty suffix tree containing only the root node.
    pub fn new() -> Self {
        Self {
            text: Vec::new(),
            nodes: vec![Node::new(0, Some(0))],
            text_len: 0,
            last_internal_node: None,
            active: ActivePoint {
                node: ROOT,
                edge_first_char_index: None,
                length: 0,
            },
            remainder: 0,
        }
    }

    /// Builds a suffix tree over the whole of `text` in one call, by
    /// feeding it to [`Self::add_symbol`] one byte at a time.
    pub fn from_bytes(text: &[u8]) -> Result<Self> {
        let mut tree = Self::new();
        for &s in text {
            tree.add_symbol(s)?;
        }
        Ok(tree)
    }

    /// Resets the tree to empty, reusing the arena's and text buffer's
    /// allocated capacity. Used by callers (the batch driver, the LZ-tree
    /// parser) that process many sequences and want to avoid
    /// per-sequence allocation.
    pub fn reset(&mut self) {
        self.text.clear();
        self.nodes.clear();
        self.nodes.push(Node::new(0, Some(0)));
        self.text_len = 0;
        self.last_internal_node = None;
        self.active = ActivePoint {
            node: ROOT,
            edge_first_char_index: None,
            length: 0,
        };
        self.remainder = 0;
    }

    /// The number of symbols appended so far.
    pub fn text_len(&self) -> usize {
        self.text_len
    }

    /// The byte at position `i` of the text seen so far.
    pub(crate) fn text_at(&self, i: usize) -> u8 {
        self.text[i]
    }

    fn edge_length(&self, node: usize) -> usize {
        self.nodes[node].end.unwrap_or(self.text_len) - self.nodes[node].start
    }

    /// Index of the root node, for callers (the LZ-tree parser) that keep
    /// their own active point into this tree.
    pub(crate) fn root(&self) -> usize {
        ROOT
    }

    /// The child of `node` reached by the edge whose first byte is `byte`,
    /// if any.
    pub(crate) fn child(&self, node: usize, byte: u8) -> Option<usize> {
        self.nodes[node].children.get(&byte).copied()
    }

    /// Start index (inclusive) of the edge leading into `node`.
    pub(crate) fn edge_start(&self, node: usize) -> usize {
        self.nodes[node].start
    }

    /// Length of the edge leading into `node`, resolved against the
    /// current end of text if the edge is still open.
    pub(crate) fn edge_len(&self, node: usize) -> usize {
        self.edge_length(node)
    }

    /// True iff the edge leading into `node` is still open (a leaf edge
    /// that grows every time [`Self::add_symbol`] appends a new symbol),
    /// as opposed to closed/internal with a fixed `end`.
    pub(crate) fn edge_is_closed(&self, node: usize) -> bool {
        self.nodes[node].end.is_some()
    }

    /// Appends `s` to the text and extends the tree so it represents all
    /// suffixes of the new text. One call is one Ukkonen "phase".
    pub fn add_symbol(&mut self, s: u8) -> Result<()> {
        self.text
            .try_reserve(1)
            .map_err(|e| TreeError::resource_exhausted(format!("text buffer: {e}")))?;
        self.text.push(s);
        self.text_len += 1;
        self.last_internal_node = None;
        self.remainder += 1;

        while self.remainder > 0 {
            let dispatch_char = if self.active.length == 0 {
                s
            } else {
                self.text[self.active.edge_first_char_index.expect("length > 0 implies an active edge")]
            };

            match self.nodes[self.active.node].children.get(&dispatch_char).copied() {
                None => {
                    self.nodes
                        .try_reserve(1)
                        .map_err(|e| TreeError::resource_exhausted(format!("node arena: {e}")))?;
                    let leaf = self.nodes.len();
                    self.nodes.push(Node::new(self.text_len - 1, None));
                    self.nodes[self.active.node]
                        .children
                        .insert(dispatch_char, leaf);
                    if let Some(last) = self.last_internal_node.take() {
                        self.nodes[last].suffix_link = Some(self.active.node);
                    }
                    self.remainder -= 1;
                }
                Some(edge) => {
                    let elen = self.edge_length(edge);

                    if self.active.length >= elen {
                        // Walk-down: already past this whole edge.
                        self.active.edge_first_char_index =
                            Some(self.active.edge_first_char_index.unwrap() + elen);
                        self.active.length -= elen;
                        self.active.node = edge;
                        continue;
                    }

                    let edge_pos = self.nodes[edge].start + self.active.length;
                    if self.text[edge_pos] == s {
                        // Rule 3: the extension is already implicit.
                        if self.active.length == 0 {
                            self.active.edge_first_char_index = Some(self.nodes[edge].start);
                        }
                        self.active.length += 1;
                        if let Some(last) = self.last_internal_node.take() {
                            self.nodes[last].suffix_link = Some(self.active.node);
                        }
                        break;
                    }

                    // Mismatch: split the edge at `active.length`.
                    self.nodes
                        .try_reserve(2)
                        .map_err(|e| TreeError::resource_exhausted(format!("node arena: {e}")))?;
                    let split = self.nodes.len();
                    self.nodes
                        .push(Node::new(self.nodes[edge].start, Some(edge_pos)));
                    self.nodes[self.active.node]
                        .children
                        .insert(dispatch_char, split);
                    self.nodes[edge].start = edge_pos;
                    self.nodes[split].children.insert(self.text[edge_pos], edge);

                    let leaf = self.nodes.len();
                    self.nodes.push(Node::new(self.text_len - 1, None));
                    self.nodes[split].children.insert(s, leaf);

                    if let Some(last) = self.last_internal_node {
                        self.nodes[last].suffix_link = Some(split);
                    }
                    self.last_internal_node = Some(split);
                    self.remainder -= 1;
                }
            }

            if self.active.node == ROOT && self.active.length > 0 {
                self.active.length -= 1;
                self.active.edge_first_char_index = Some(self.text_len - self.remainder);
            } else {
                self.active.node = self.nodes[self.active.node].suffix_link.unwrap_or(ROOT);
            }
        }

        Ok(())
    }

    /// Returns true iff `pattern` occurs as a contiguous substring of the
    /// text seen so far. The empty pattern trivially occurs everywhere.
    pub fn contains(&self, pattern: &[u8]) -> bool {
        if pattern.is_empty() {
            return true;
        }

        let mut node = ROOT;
        let mut pos = 0;

        loop {
            let ch = pattern[pos];
            let Some(&edge) = self.nodes[node].children.get(&ch) else {
                return false;
            };

            let mut edge_pos = self.nodes[edge].start;
            let edge_end = self.nodes[edge].end.unwrap_or(self.text_len);

            while edge_pos < edge_end && pos < pattern.len() {
                if self.text[edge_pos] != pattern[pos] {
                    return false;
                }
                edge_pos += 1;
                pos += 1;
            }

            if pos == pattern.len() {
                return true;
            }
            node = edge;
        }
    }
}

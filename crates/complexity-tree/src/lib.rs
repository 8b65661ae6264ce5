/*!
Online Ukkonen suffix tree and a coupled LZ76 parser that walks it.

This crate implements the two hardest-to-get-right pieces of the
complexity-measures workspace: an incremental suffix tree whose
`add_symbol` keeps the tree valid after every appended byte, and an LZ76
parser that shares that tree with the caller instead of re-scanning the
whole prefix on every symbol.

# Usage Example

```rust
use complexity_tree::{SuffixTree, LzTreeParser};

let tree = SuffixTree::from_bytes(b"banana").unwrap();
assert!(tree.contains(b"ana"));
assert!(!tree.contains(b"xyz"));

let phrases = LzTreeParser::complexity_of(b"aababcabcd").unwrap();
assert_eq!(phrases, 4);
```

# Features
- `SuffixTree::add_symbol` is online: the tree represents the text seen so
  far after every call, in amortized O(1).
- `LzTreeParser` holds an independent active point into the same tree and
  never copies or re-scans the prefix.
*/

pub mod error;
pub mod lz_parser;
pub mod tree;

pub use error::{Result, TreeError};
pub use lz_parser::LzTreeParser;
pub use tree::SuffixTree;

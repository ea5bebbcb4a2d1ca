//! A set of strings over a fixed 26-letter alphabet, stored as a plain
//! (uncompressed, fixed-branching) trie with a configurable case mode.
//!
//! ```
//! use acacia::{CaseMode, TrieSet};
//!
//! let mut t = TrieSet::new(CaseMode::Insensitive);
//! t.add("Cat")?;
//! t.add("Car")?;
//! assert!(t.contains("CAT")?);
//! assert_eq!(t.keys_with_prefix("ca")?.collect::<Vec<_>>(), ["CAR", "CAT"]);
//! # Ok::<(), acacia::Error>(())
//! ```

// TODO:
// [ ] Reuse one String buffer across iterator emissions instead of
//     allocating per key.
// [ ] Extend/FromIterator impls for bulk loading.

mod alphabet;
mod error;
mod iter;
mod matching;
mod node;
mod remove;
mod trie;

#[cfg(test)]
mod qc_tests;

pub use alphabet::CaseMode;
pub use error::Error;
pub use iter::Keys;
pub use matching::Matches;
pub use trie::TrieSet;

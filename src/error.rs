use thiserror::Error;

/// Everything that can go wrong when talking to a [`TrieSet`](crate::TrieSet).
///
/// Absence is never an error: missing keys, empty query results and a failed
/// longest-prefix search are all ordinary return values.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A character outside the alphabet accepted by the set's case mode.
    #[error("bad character: {0:?}")]
    BadCharacter(char),
    /// A raw mode value outside the three recognized encodings.
    #[error("unknown trie mode: {0}")]
    BadMode(u8),
}

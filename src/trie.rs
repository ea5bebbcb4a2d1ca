use std::convert::TryFrom;
use std::io;

use crate::alphabet::CaseMode;
use crate::error::Error;
use crate::node::Node;

/// A set of strings over a fixed 26-letter alphabet, stored as a plain
/// uncompressed trie: one child slot per letter, one terminal flag per node.
///
/// The [`CaseMode`] chosen at construction fixes which characters keys may
/// use. Every operation that consumes characters validates them against the
/// mode and fails with [`Error::BadCharacter`] on anything else.
pub struct TrieSet {
    pub(crate) root: Node,
    pub(crate) mode: CaseMode,
}

impl Default for TrieSet {
    fn default() -> Self {
        TrieSet::new(CaseMode::default())
    }
}

impl TrieSet {
    pub fn new(mode: CaseMode) -> Self {
        Self {
            root: Node::empty(),
            mode,
        }
    }

    /// Construct from the raw mode encoding (0 upper, 1 lower,
    /// 2 insensitive); anything else is [`Error::BadMode`].
    pub fn with_raw_mode(raw: u8) -> Result<Self, Error> {
        Ok(Self::new(CaseMode::try_from(raw)?))
    }

    pub fn mode(&self) -> CaseMode {
        self.mode
    }

    /// Translate `key` to slot indices up front, left to right, so a bad
    /// character fails the whole operation before any node is touched.
    pub(crate) fn encode(&self, key: &str) -> Result<Vec<u8>, Error> {
        key.chars().map(|c| self.mode.index_of(c)).collect()
    }

    /// Add `key`. Adding a present key changes nothing.
    pub fn add(&mut self, key: &str) -> Result<(), Error> {
        let ixs = self.encode(key)?;
        // The empty string is never a member; the root's flag stays clear.
        if ixs.is_empty() {
            return Ok(());
        }
        let mut cur = &mut self.root;
        for &ix in &ixs {
            cur = cur.child_or_insert(ix);
        }
        cur.terminal = true;
        Ok(())
    }

    pub fn contains(&self, key: &str) -> Result<bool, Error> {
        let ixs = self.encode(key)?;
        if ixs.is_empty() {
            return Ok(false);
        }
        let mut cur = &self.root;
        for &ix in &ixs {
            cur = match cur.child(ix) {
                Some(child) => child,
                None => return Ok(false),
            };
        }
        Ok(cur.terminal)
    }

    /// Remove `key` if present, pruning every node the removal leaves dead.
    /// Removing an absent key changes nothing.
    pub fn remove(&mut self, key: &str) -> Result<(), Error> {
        let ixs = self.encode(key)?;
        if ixs.is_empty() {
            return Ok(());
        }
        self.root.remove(&ixs);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.root.count()
    }

    /// Same as `len() == 0`, without walking the whole tree: pruning
    /// guarantees any child of the root carries at least one member.
    pub fn is_empty(&self) -> bool {
        self.root.is_dead()
    }

    /// The longest member that is a textual prefix of `s`, as a subslice of
    /// `s`, or `None` if no member qualifies. The walk stops at the first
    /// missing child; characters past that point are never consulted (or
    /// validated).
    pub fn longest_prefix_of<'a>(&self, s: &'a str) -> Result<Option<&'a str>, Error> {
        let mut cur = &self.root;
        let mut best = None;
        for (pos, c) in s.char_indices() {
            cur = match cur.child(self.mode.index_of(c)?) {
                Some(child) => child,
                None => return Ok(best),
            };
            if cur.terminal {
                best = Some(&s[..pos + c.len_utf8()]);
            }
        }
        Ok(best)
    }

    /// Dump the tree structure, one line per node.
    pub fn debug(&self, out: &mut impl io::Write) -> io::Result<()> {
        self.root.debug(self.mode, "", out)
    }
}

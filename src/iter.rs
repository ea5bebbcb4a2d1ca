use crate::alphabet::{next_slot, CaseMode};
use crate::error::Error;
use crate::node::Node;
use crate::trie::TrieSet;

#[derive(Clone, Copy)]
enum State {
    Start,
    Recurse(Option<u8>),
    PopIndex(Option<u8>),
}

/// Lazy pre-order walk emitting member strings in ascending slot order,
/// which is lexicographic under the active alphabet. Holds a shared borrow
/// of the trie, so the walk can never observe (or cause) mutation.
pub struct Keys<'a> {
    mode: CaseMode,
    prefix: String,
    key: Vec<u8>,
    stack: Vec<(&'a Node, State)>,
}

impl<'a> Keys<'a> {
    fn new(mode: CaseMode, prefix: String, subtree: Option<&'a Node>) -> Self {
        Keys {
            mode,
            prefix,
            key: vec![],
            stack: subtree.map(|n| (n, State::Start)).into_iter().collect(),
        }
    }

    fn render(&self) -> String {
        let mut s = self.prefix.clone();
        s.extend(self.key.iter().map(|&ix| self.mode.char_at(ix)));
        s
    }
}

impl<'a> Iterator for Keys<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let (node, state) = self.stack.last_mut()?;
            match *state {
                State::Start => {
                    *state = State::Recurse(Some(0));

                    if node.terminal {
                        return Some(self.render());
                    }
                }
                State::Recurse(Some(i)) => {
                    let next_ix = next_slot(i);
                    if let Some(child) = node.child(i) {
                        *state = State::PopIndex(next_ix);
                        self.key.push(i);
                        self.stack.push((child, State::Start));
                    } else {
                        *state = State::Recurse(next_ix);
                    }
                }
                State::PopIndex(next_ix) => {
                    self.key.pop();
                    *state = State::Recurse(next_ix);
                }
                State::Recurse(None) => {
                    self.stack.pop();
                }
            }
        }
    }
}

impl TrieSet {
    /// All members in lexicographic order. Restartable: every call starts a
    /// fresh, independent walk.
    pub fn iter(&self) -> Keys<'_> {
        Keys::new(self.mode, String::new(), Some(&self.root))
    }

    /// Members beginning with `prefix`, in the same order as [`iter`]. A
    /// prefix whose walk dies yields an empty sequence. The prefix on each
    /// produced string is re-rendered in the mode's canonical case, like
    /// every other enumerated character.
    ///
    /// [`iter`]: TrieSet::iter
    pub fn keys_with_prefix(&self, prefix: &str) -> Result<Keys<'_>, Error> {
        let ixs = self.encode(prefix)?;
        let mut cur = Some(&self.root);
        for &ix in &ixs {
            cur = cur.and_then(|node| node.child(ix));
        }
        let rendered = ixs.iter().map(|&ix| self.mode.char_at(ix)).collect();
        Ok(Keys::new(self.mode, rendered, cur))
    }
}

use crate::alphabet::{next_slot, CaseMode};
use crate::error::Error;
use crate::node::Node;
use crate::trie::TrieSet;

/// One pattern position: a fixed slot, or the `.` wildcard.
#[derive(Clone, Copy)]
enum Position {
    Literal(u8),
    Any,
}

#[derive(Clone, Copy)]
enum State {
    Start,
    Branch(Option<u8>),
    PopIndex(Option<u8>),
}

/// Joint depth-first walk over the trie and a fixed-length pattern. A
/// literal position probes exactly one child slot; a wildcard position scans
/// all of them. Output comes only from terminal nodes reached with the
/// pattern fully consumed, so every match has the pattern's exact length.
pub struct Matches<'a> {
    mode: CaseMode,
    pattern: Vec<Position>,
    key: Vec<u8>,
    stack: Vec<(&'a Node, State)>,
}

impl<'a> Matches<'a> {
    fn render(&self) -> String {
        self.key.iter().map(|&ix| self.mode.char_at(ix)).collect()
    }
}

impl<'a> Iterator for Matches<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            // The depth of the node on top of the stack.
            let depth = self.key.len();
            let (node, state) = self.stack.last_mut()?;
            match *state {
                State::Start => {
                    if depth == self.pattern.len() {
                        let matched = node.terminal;
                        self.stack.pop();
                        if matched {
                            return Some(self.render());
                        }
                    } else {
                        *state = State::Branch(Some(match self.pattern[depth] {
                            Position::Literal(ix) => ix,
                            Position::Any => 0,
                        }));
                    }
                }
                State::Branch(Some(i)) => {
                    let next_ix = match self.pattern[depth] {
                        Position::Literal(..) => None,
                        Position::Any => next_slot(i),
                    };
                    if let Some(child) = node.child(i) {
                        *state = State::PopIndex(next_ix);
                        self.key.push(i);
                        self.stack.push((child, State::Start));
                    } else {
                        *state = State::Branch(next_ix);
                    }
                }
                State::PopIndex(next_ix) => {
                    self.key.pop();
                    *state = State::Branch(next_ix);
                }
                State::Branch(None) => {
                    self.stack.pop();
                }
            }
        }
    }
}

impl TrieSet {
    /// Members with the same length as `pattern`, matching it position by
    /// position; `.` matches any single character the mode accepts. Output
    /// order and canonical case are the same as [`iter`](TrieSet::iter)'s.
    pub fn keys_that_match(&self, pattern: &str) -> Result<Matches<'_>, Error> {
        let pattern = pattern
            .chars()
            .map(|c| {
                if c == '.' {
                    Ok(Position::Any)
                } else {
                    self.mode.index_of(c).map(Position::Literal)
                }
            })
            .collect::<Result<Vec<_>, Error>>()?;
        Ok(Matches {
            mode: self.mode,
            pattern,
            key: vec![],
            stack: vec![(&self.root, State::Start)],
        })
    }
}

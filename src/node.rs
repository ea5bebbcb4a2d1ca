use std::io;

use crate::alphabet::{CaseMode, ALPHABET};

const NO_CHILD: Option<Box<Node>> = None;

/// One position in the key space: the state after consuming some prefix.
///
/// Invariant (root excepted): a node is either terminal or has at least one
/// child. `remove` restores this immediately by pruning dead nodes bottom-up,
/// so no unreachable chain ever outlives the removal that emptied it.
pub(crate) struct Node {
    children: [Option<Box<Node>>; ALPHABET],
    pub(crate) terminal: bool,
}

impl Node {
    pub(crate) fn empty() -> Self {
        Node {
            children: [NO_CHILD; ALPHABET],
            terminal: false,
        }
    }

    pub(crate) fn child(&self, ix: u8) -> Option<&Node> {
        self.children[ix as usize].as_deref()
    }

    pub(crate) fn child_mut(&mut self, ix: u8) -> Option<&mut Node> {
        self.children[ix as usize].as_deref_mut()
    }

    /// The child at `ix`, created empty if absent.
    pub(crate) fn child_or_insert(&mut self, ix: u8) -> &mut Node {
        self.children[ix as usize].get_or_insert_with(|| Box::new(Node::empty()))
    }

    /// Drop the child at `ix` and everything beneath it. Each slot uniquely
    /// owns its subtree, so nothing else can still point into it.
    pub(crate) fn unlink_child(&mut self, ix: u8) {
        self.children[ix as usize] = None;
    }

    /// Number of terminal nodes in the subtree rooted here.
    pub(crate) fn count(&self) -> usize {
        let mut n = self.terminal as usize;
        for child in self.children.iter().flatten() {
            n += child.count();
        }
        n
    }

    /// A dead node contributes nothing and must be unlinked by its parent.
    pub(crate) fn is_dead(&self) -> bool {
        !self.terminal && self.children.iter().all(Option::is_none)
    }

    pub(crate) fn debug(
        &self,
        mode: CaseMode,
        indent: &str,
        out: &mut impl io::Write,
    ) -> io::Result<()> {
        writeln!(
            out,
            "Node {{ terminal: {}, children: {} }}",
            self.terminal,
            self.children.iter().flatten().count(),
        )?;

        let present = (0u8..ALPHABET as u8)
            .filter_map(|ix| self.child(ix).map(|c| (ix, c)))
            .collect::<Vec<_>>();

        if let Some(((last_ix, last_child), init)) = present.split_last() {
            let child_indent = format!("{} \u{2502}", indent);
            for (ix, child) in init {
                write!(out, "{} \u{251C} {}: ", indent, mode.char_at(*ix))?;
                child.debug(mode, &child_indent, out)?;
            }

            write!(out, "{} \u{2514} {}: ", indent, mode.char_at(*last_ix))?;
            let child_indent = format!("{}  ", indent);
            last_child.debug(mode, &child_indent, out)?;
        }
        Ok(())
    }
}

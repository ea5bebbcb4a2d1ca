// Every node except the root must either be terminal or have at least one
// child. Clearing a terminal flag can break that for the node itself, and
// unlinking a child can break it for an ancestor whose only child that was.
//
// Each level therefore re-checks its own child after the recursive call
// returns: if the removal left the child neither terminal nor branching, the
// child is unlinked and its subtree dropped. The same check runs at every
// level on the way back up, so a whole chain of newly dead ancestors unlinks
// one hop at a time.

use crate::node::Node;

impl Node {
    /// Remove `suffix` (as slot indices) from the subtree rooted here.
    /// Absent suffixes are a no-op. The caller prunes *this* node if the
    /// removal leaves it dead; the root never needs that, since it is never
    /// unlinked and its terminal flag is never set.
    pub(crate) fn remove(&mut self, suffix: &[u8]) {
        let (ix, rest) = match suffix.split_first() {
            Some((&ix, rest)) => (ix, rest),
            None => {
                self.terminal = false;
                return;
            }
        };
        let child = match self.child_mut(ix) {
            Some(child) => child,
            None => return,
        };
        child.remove(rest);
        if child.is_dead() {
            self.unlink_child(ix);
        }
    }
}

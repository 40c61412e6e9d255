//! Search tree nodes.

use crate::extended_integer::ExtendedInteger;

/// Whose turn a node represents. Even depths maximize, odd depths minimize.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Maximizer,
    Minimizer,
}

impl NodeKind {
    pub fn at_depth(depth: u8) -> Self {
        if depth % 2 == 0 {
            NodeKind::Maximizer
        } else {
            NodeKind::Minimizer
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            NodeKind::Maximizer => NodeKind::Minimizer,
            NodeKind::Minimizer => NodeKind::Maximizer,
        }
    }

    /// The value a node of this kind starts from before any child is folded in:
    /// the worst possible outcome for the side to move.
    fn worst_value(self) -> ExtendedInteger {
        match self {
            NodeKind::Maximizer => ExtendedInteger::NegInfinity,
            NodeKind::Minimizer => ExtendedInteger::PosInfinity,
        }
    }

    /// Returns true if `candidate` should replace `incumbent` as the best child.
    /// Equal values keep the incumbent, so the earliest move wins ties.
    pub(crate) fn prefers(self, candidate: ExtendedInteger, incumbent: ExtendedInteger) -> bool {
        match self {
            NodeKind::Maximizer => candidate > incumbent,
            NodeKind::Minimizer => candidate < incumbent,
        }
    }
}

/// One node of the implicit search tree.
///
/// Nodes are never mutated in place. A child is derived from its parent with
/// [`SearchNode::child`], and search results are folded back by consuming the
/// node and returning an updated copy.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchNode<P, M> {
    kind: NodeKind,
    position: P,
    mv: Option<M>,
    value: ExtendedInteger,
    alpha: ExtendedInteger,
    beta: ExtendedInteger,
    depth: u8,
}

impl<P, M> SearchNode<P, M> {
    /// The root of a search: depth 0, no incoming move, an unbounded window.
    pub fn root(position: P) -> Self {
        let kind = NodeKind::at_depth(0);
        Self {
            kind,
            position,
            mv: None,
            value: kind.worst_value(),
            alpha: ExtendedInteger::NegInfinity,
            beta: ExtendedInteger::PosInfinity,
            depth: 0,
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn position(&self) -> &P {
        &self.position
    }

    /// The move that led to this node. For the root of a finished search this
    /// is the best move found instead.
    pub fn mv(&self) -> Option<&M> {
        self.mv.as_ref()
    }

    pub fn value(&self) -> ExtendedInteger {
        self.value
    }

    pub fn alpha(&self) -> ExtendedInteger {
        self.alpha
    }

    pub fn beta(&self) -> ExtendedInteger {
        self.beta
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn is_root(&self) -> bool {
        self.depth == 0
    }

    /// Consumes the node and returns the move stored in it.
    pub fn into_move(self) -> Option<M> {
        self.mv
    }

    /// Builds the child reached by `mv`, searched within `[alpha, beta]`.
    pub(crate) fn child(
        &self,
        position: P,
        mv: M,
        alpha: ExtendedInteger,
        beta: ExtendedInteger,
    ) -> Self {
        let depth = self.depth + 1;
        let kind = NodeKind::at_depth(depth);
        debug_assert_eq!(kind, self.kind.opponent());
        Self {
            kind,
            position,
            mv: Some(mv),
            value: kind.worst_value(),
            alpha,
            beta,
            depth,
        }
    }

    /// A leaf has no remaining uncertainty: value and both bounds collapse.
    pub(crate) fn with_leaf_value(self, value: ExtendedInteger) -> Self {
        Self {
            value,
            alpha: value,
            beta: value,
            ..self
        }
    }

    /// Takes over the best child's value and bounds. The root additionally
    /// takes the child's move, which becomes the best move of the search.
    pub(crate) fn with_best_child(self, best_child: SearchNode<P, M>) -> Self {
        let mv = if self.is_root() {
            best_child.mv
        } else {
            self.mv
        };
        Self {
            mv,
            value: best_child.value,
            alpha: best_child.alpha,
            beta: best_child.beta,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extended_integer::ExtendedInteger::*;

    #[test]
    fn test_kind_alternates_by_depth() {
        assert_eq!(NodeKind::at_depth(0), NodeKind::Maximizer);
        assert_eq!(NodeKind::at_depth(1), NodeKind::Minimizer);
        assert_eq!(NodeKind::at_depth(2), NodeKind::Maximizer);
        assert_eq!(NodeKind::at_depth(7), NodeKind::Minimizer);
    }

    #[test]
    fn test_root_node() {
        let root: SearchNode<&str, char> = SearchNode::root("start");
        assert_eq!(root.kind(), NodeKind::Maximizer);
        assert_eq!(root.depth(), 0);
        assert_eq!(root.mv(), None);
        assert_eq!(root.value(), NegInfinity);
        assert_eq!(root.alpha(), NegInfinity);
        assert_eq!(root.beta(), PosInfinity);
        assert!(root.is_root());
    }

    #[test]
    fn test_child_flips_kind_and_inherits_window() {
        let root: SearchNode<u32, u32> = SearchNode::root(5);
        let child = root.child(4, 1, Number(2), PosInfinity);
        assert_eq!(child.kind(), NodeKind::Minimizer);
        assert_eq!(child.depth(), 1);
        assert_eq!(child.position(), &4);
        assert_eq!(child.mv(), Some(&1));
        assert_eq!(child.value(), PosInfinity);
        assert_eq!(child.alpha(), Number(2));
        assert_eq!(child.beta(), PosInfinity);

        let grandchild = child.child(3, 1, Number(2), Number(9));
        assert_eq!(grandchild.kind(), NodeKind::Maximizer);
        assert_eq!(grandchild.value(), NegInfinity);
    }

    #[test]
    fn test_leaf_value_collapses_window() {
        let leaf = SearchNode::<u32, u32>::root(0).with_leaf_value(Number(10));
        assert_eq!(leaf.value(), Number(10));
        assert_eq!(leaf.alpha(), Number(10));
        assert_eq!(leaf.beta(), Number(10));
    }

    #[test]
    fn test_only_root_takes_best_child_move() {
        let root: SearchNode<u32, u32> = SearchNode::root(9);
        let child = root.child(8, 1, NegInfinity, PosInfinity);
        let grandchild = child
            .child(6, 2, NegInfinity, PosInfinity)
            .with_leaf_value(Number(3));

        let child = child.with_best_child(grandchild);
        assert_eq!(child.mv(), Some(&1));
        assert_eq!(child.value(), Number(3));

        let root = root.with_best_child(child);
        assert_eq!(root.mv(), Some(&1));
        assert_eq!(root.value(), Number(3));
        assert_eq!(root.alpha(), Number(3));
        assert_eq!(root.beta(), Number(3));
    }

    #[test]
    fn test_prefers_keeps_incumbent_on_ties() {
        assert!(NodeKind::Maximizer.prefers(Number(2), Number(1)));
        assert!(!NodeKind::Maximizer.prefers(Number(1), Number(1)));
        assert!(NodeKind::Minimizer.prefers(Number(1), Number(2)));
        assert!(!NodeKind::Minimizer.prefers(Number(2), Number(2)));
    }
}

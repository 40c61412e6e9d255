//! Core trait for generic alpha-beta search.

use std::marker::PhantomData;

use super::node::SearchNode;

/// A game or decision problem the searcher can walk.
///
/// Implementations must be pure: the searcher may call each method any number
/// of times for the same node and expects the same answer.
pub trait Game {
    type Position: Clone;
    type Move: Clone;

    /// Returns the position reached by playing `game_move` from `node`.
    fn apply_move(
        &self,
        node: &SearchNode<Self::Position, Self::Move>,
        game_move: &Self::Move,
    ) -> Self::Position;

    /// Scores the node's position. Higher scores favor the maximizing side,
    /// whichever side is to move at `node`.
    fn evaluate(&self, node: &SearchNode<Self::Position, Self::Move>) -> i64;

    /// Lists the moves available at `node`, in the order they should be searched.
    /// An empty list makes the node a leaf.
    fn legal_moves(&self, node: &SearchNode<Self::Position, Self::Move>) -> Vec<Self::Move>;
}

/// Adapts three callbacks to the [`Game`] trait.
pub(crate) struct FnGame<P, M, A, E, L> {
    apply_move: A,
    evaluate: E,
    legal_moves: L,
    _types: PhantomData<fn() -> (P, M)>,
}

impl<P, M, A, E, L> FnGame<P, M, A, E, L>
where
    A: Fn(&SearchNode<P, M>, &M) -> P,
    E: Fn(&SearchNode<P, M>) -> i64,
    L: Fn(&SearchNode<P, M>) -> Vec<M>,
{
    pub(crate) fn new(apply_move: A, evaluate: E, legal_moves: L) -> Self {
        Self {
            apply_move,
            evaluate,
            legal_moves,
            _types: PhantomData,
        }
    }
}

impl<P, M, A, E, L> Game for FnGame<P, M, A, E, L>
where
    P: Clone,
    M: Clone,
    A: Fn(&SearchNode<P, M>, &M) -> P,
    E: Fn(&SearchNode<P, M>) -> i64,
    L: Fn(&SearchNode<P, M>) -> Vec<M>,
{
    type Position = P;
    type Move = M;

    #[inline]
    fn apply_move(&self, node: &SearchNode<P, M>, game_move: &M) -> P {
        (self.apply_move)(node, game_move)
    }

    #[inline]
    fn evaluate(&self, node: &SearchNode<P, M>) -> i64 {
        (self.evaluate)(node)
    }

    #[inline]
    fn legal_moves(&self, node: &SearchNode<P, M>) -> Vec<M> {
        (self.legal_moves)(node)
    }
}

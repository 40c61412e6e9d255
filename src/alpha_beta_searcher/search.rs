//! Alpha-beta search algorithm implementation.
//!
//! # Core Algorithm
//!
//! Alpha-beta pruning is an optimization of minimax search that maintains a window [alpha, beta]
//! representing the range of scores that matter. Moves that fall outside this window can be
//! pruned without affecting the final result. The algorithm guarantees finding the same value
//! and move as minimax but explores fewer nodes.
//!
//! Each node carries its own window. Children are searched left to right with the parent's
//! current window; after each child the maximizer raises alpha and the minimizer lowers beta.
//! Once alpha is no longer below beta, the remaining siblings are skipped.
//!
//! # Result
//!
//! The search returns the root node with its backed-up value. The root's move is replaced by
//! the move leading to its best child, with ties going to the earliest move in the order the
//! game listed them.

use std::time::{Duration, Instant};

use log::{debug, trace, warn};
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use super::node::{NodeKind, SearchNode};
use super::traits::{FnGame, Game};
use crate::extended_integer::ExtendedInteger;

/// Counters collected during a search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Every node created, leaves included.
    pub nodes_visited: usize,
    /// Nodes scored with the game's evaluation.
    pub leaves_evaluated: usize,
    /// Nodes whose moves were generated and searched.
    pub nodes_expanded: usize,
    /// Sibling moves skipped by alpha-beta cutoffs.
    pub moves_pruned: usize,
}

pub struct SearchContext {
    max_depth: u8,
    stats: SearchStats,
    last_score: Option<ExtendedInteger>,
    last_duration: Option<Duration>,
}

impl SearchContext {
    pub fn new(max_depth: u8) -> Self {
        Self {
            max_depth,
            stats: SearchStats::default(),
            last_score: None,
            last_duration: None,
        }
    }

    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn searched_position_count(&self) -> usize {
        self.stats.nodes_visited
    }

    pub fn last_score(&self) -> Option<ExtendedInteger> {
        self.last_score
    }

    pub fn last_search_duration(&self) -> Option<Duration> {
        self.last_duration
    }

    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
        self.last_score = None;
        self.last_duration = None;
    }

    pub(crate) fn record_result(&mut self, score: ExtendedInteger, duration: Duration) {
        self.last_score = Some(score);
        self.last_duration = Some(duration);
    }

    pub(crate) fn stats_mut(&mut self) -> &mut SearchStats {
        &mut self.stats
    }
}

/// Searches the tree described by three callbacks and returns the evaluated root.
///
/// - `apply_move` derives the position reached by a move.
/// - `evaluate` scores a node from the maximizer's point of view.
/// - `legal_moves` lists a node's moves in search order; an empty list makes it a leaf.
///
/// The root is a maximizer at depth 0, and nodes at `max_depth` are always leaves. The result's
/// `mv()` is the best move, or `None` when the root is a leaf.
///
/// # Examples
///
/// ```
/// use alphabeta::alpha_beta_searcher::{search, SearchNode};
/// use alphabeta::extended_integer::ExtendedInteger;
///
/// type Node = SearchNode<u32, u32>;
///
/// // Take one or two from a pile; emptying the pile on your own move wins.
/// let result = search(
///     |node: &Node, take: &u32| node.position() - take,
///     |node: &Node| match (*node.position(), node.depth() % 2) {
///         (0, 1) => 1,
///         (0, _) => -1,
///         _ => 0,
///     },
///     |node: &Node| (1..=2).filter(|take| *take <= *node.position()).collect(),
///     2,
///     1,
/// );
///
/// assert_eq!(result.mv(), Some(&2));
/// assert_eq!(result.value(), ExtendedInteger::Number(1));
/// ```
#[must_use = "search returns the evaluated root node"]
pub fn search<P, M, A, E, L>(
    apply_move: A,
    evaluate: E,
    legal_moves: L,
    initial_position: P,
    max_depth: u8,
) -> SearchNode<P, M>
where
    P: Clone,
    M: Clone,
    A: Fn(&SearchNode<P, M>, &M) -> P,
    E: Fn(&SearchNode<P, M>) -> i64,
    L: Fn(&SearchNode<P, M>) -> Vec<M>,
{
    let game = FnGame::new(apply_move, evaluate, legal_moves);
    search_game(&game, initial_position, max_depth)
}

/// Runs [`search`] over a [`Game`] implementation.
#[must_use = "search returns the evaluated root node"]
pub fn search_game<G: Game>(
    game: &G,
    initial_position: G::Position,
    max_depth: u8,
) -> SearchNode<G::Position, G::Move> {
    let mut context = SearchContext::new(max_depth);
    search_with_context(&mut context, game, initial_position)
}

/// Runs the search with the depth limit from `context`, recording statistics into it.
#[must_use = "search returns the evaluated root node"]
#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
pub fn search_with_context<G: Game>(
    context: &mut SearchContext,
    game: &G,
    initial_position: G::Position,
) -> SearchNode<G::Position, G::Move> {
    context.reset_stats();
    debug!("alpha-beta search depth: {}", context.max_depth());

    let start = Instant::now();
    let result = match alpha_beta(context, game, SearchNode::root(initial_position.clone())) {
        Some(root) => root,
        None => {
            warn!("alpha-beta search produced no value for the root");
            SearchNode::root(initial_position)
        }
    };
    context.record_result(result.value(), start.elapsed());

    debug!(
        "alpha-beta search finished: value {}, {:?}",
        result.value(),
        context.stats()
    );

    result
}

/// Evaluates `node` as a leaf, collapsing its window onto the score.
pub(crate) fn evaluate_leaf<G: Game>(
    stats: &mut SearchStats,
    game: &G,
    node: SearchNode<G::Position, G::Move>,
) -> SearchNode<G::Position, G::Move> {
    stats.leaves_evaluated += 1;
    let score = game.evaluate(&node);
    trace!("Eval score at depth {}: {}", node.depth(), score);
    node.with_leaf_value(ExtendedInteger::Number(score))
}

/// Core alpha-beta recursion.
///
/// Returns `None` only when every move of `node` was pruned before any child was searched,
/// in which case the node contributes nothing to its parent.
fn alpha_beta<G: Game>(
    context: &mut SearchContext,
    game: &G,
    node: SearchNode<G::Position, G::Move>,
) -> Option<SearchNode<G::Position, G::Move>> {
    context.stats_mut().nodes_visited += 1;

    if node.depth() >= context.max_depth() {
        return Some(evaluate_leaf(context.stats_mut(), game, node));
    }

    let candidates = game.legal_moves(&node);
    if candidates.is_empty() {
        return Some(evaluate_leaf(context.stats_mut(), game, node));
    }
    context.stats_mut().nodes_expanded += 1;

    let kind = node.kind();
    let mut alpha = node.alpha();
    let mut beta = node.beta();
    let mut best_child: Option<SearchNode<G::Position, G::Move>> = None;
    let move_count = candidates.len();

    for (index, game_move) in candidates.into_iter().enumerate() {
        if alpha >= beta {
            let pruned = move_count - index;
            trace!(
                "Cutoff at depth {} (alpha {}, beta {}): {} moves pruned",
                node.depth(),
                alpha,
                beta,
                pruned
            );
            context.stats_mut().moves_pruned += pruned;
            break;
        }

        let position = game.apply_move(&node, &game_move);
        let child = node.child(position, game_move, alpha, beta);
        let child = match alpha_beta(context, game, child) {
            Some(child) => child,
            None => continue,
        };

        match kind {
            NodeKind::Maximizer => alpha = alpha.max(child.alpha()),
            NodeKind::Minimizer => beta = beta.min(child.beta()),
        }

        let is_better = match &best_child {
            Some(best) => kind.prefers(child.value(), best.value()),
            None => true,
        };
        if is_better {
            best_child = Some(child);
        }
    }

    best_child.map(|child| node.with_best_child(child))
}

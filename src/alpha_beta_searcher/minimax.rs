//! Plain minimax without pruning.
//!
//! Walks every node down to the depth limit, using the same leaf rule and the same best-child
//! selection (first move wins ties) as the alpha-beta search. It is the yardstick the pruned
//! search is measured against: same value, same move, never fewer nodes.

use std::time::Instant;

use log::debug;
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use super::node::SearchNode;
use super::search::{evaluate_leaf, SearchContext};
use super::traits::Game;

/// Searches every node to `context.max_depth()` and returns the evaluated root.
#[must_use = "minimax returns the evaluated root node"]
#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
pub fn minimax<G: Game>(
    context: &mut SearchContext,
    game: &G,
    initial_position: G::Position,
) -> SearchNode<G::Position, G::Move> {
    context.reset_stats();
    debug!("minimax search depth: {}", context.max_depth());

    let start = Instant::now();
    let result = minimax_node(context, game, SearchNode::root(initial_position));
    context.record_result(result.value(), start.elapsed());

    result
}

fn minimax_node<G: Game>(
    context: &mut SearchContext,
    game: &G,
    node: SearchNode<G::Position, G::Move>,
) -> SearchNode<G::Position, G::Move> {
    context.stats_mut().nodes_visited += 1;

    let candidates = if node.depth() >= context.max_depth() {
        Vec::new()
    } else {
        game.legal_moves(&node)
    };
    if candidates.is_empty() {
        return evaluate_leaf(context.stats_mut(), game, node);
    }
    context.stats_mut().nodes_expanded += 1;

    let kind = node.kind();
    let mut best_child: Option<SearchNode<G::Position, G::Move>> = None;
    for game_move in candidates {
        let position = game.apply_move(&node, &game_move);
        let child = minimax_node(
            context,
            game,
            node.child(position, game_move, node.alpha(), node.beta()),
        );
        let is_better = match &best_child {
            Some(best) => kind.prefers(child.value(), best.value()),
            None => true,
        };
        if is_better {
            best_child = Some(child);
        }
    }

    match best_child {
        Some(child) => node.with_best_child(child),
        None => node,
    }
}

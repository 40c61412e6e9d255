//! Shared utilities for CLI commands.

use std::fmt::Display;

use alphabeta::alpha_beta_searcher::{SearchContext, SearchNode};

pub(crate) fn print_search_result<P, M: Display>(
    result: &SearchNode<P, M>,
    context: &SearchContext,
) {
    match result.mv() {
        Some(best_move) => println!("best move: {}", best_move),
        None => println!("best move: none"),
    }
    println!("value: {}", result.value());

    let stats = context.stats();
    println!(
        "positions: {}, evaluated: {}, expanded: {}, pruned moves: {}",
        stats.nodes_visited, stats.leaves_evaluated, stats.nodes_expanded, stats.moves_pruned
    );
    if let Some(duration) = context.last_search_duration() {
        println!("duration: {:?}", duration);
    }
}

//! Generic minimax search with alpha-beta pruning.
//!
//! The searcher knows nothing about any particular game. A game is described either by three
//! callbacks passed to [`search`], or by implementing the [`Game`] trait and calling
//! [`search_game`] / [`search_with_context`].

mod minimax;
mod node;
mod search;
mod traits;


pub use minimax::minimax;
pub use node::{NodeKind, SearchNode};
pub use search::{search, search_game, search_with_context, SearchContext, SearchStats};
pub use traits::Game;

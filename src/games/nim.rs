//! A subtraction game on a single heap.
//!
//! Each move removes between one and `max_take` coins. Leaves are scored by
//! who is left facing the empty heap: the maximizer (even depth) scores 10,
//! the minimizer (odd depth) scores 0. Positions cut off by the depth limit
//! with coins remaining score 5.

use crate::alpha_beta_searcher::{Game, SearchNode};

pub const EMPTY_HEAP_ON_MAXIMIZER_TURN: i64 = 10;
pub const EMPTY_HEAP_ON_MINIMIZER_TURN: i64 = 0;
pub const UNDECIDED: i64 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Nim {
    max_take: u32,
}

impl Nim {
    pub fn new(max_take: u32) -> Self {
        Self { max_take }
    }

    pub fn max_take(&self) -> u32 {
        self.max_take
    }
}

impl Default for Nim {
    fn default() -> Self {
        Self::new(3)
    }
}

impl Game for Nim {
    type Position = u32;
    type Move = u32;

    fn apply_move(&self, node: &SearchNode<u32, u32>, take: &u32) -> u32 {
        node.position().saturating_sub(*take)
    }

    fn evaluate(&self, node: &SearchNode<u32, u32>) -> i64 {
        match (*node.position(), node.depth() % 2) {
            (0, 0) => EMPTY_HEAP_ON_MAXIMIZER_TURN,
            (0, _) => EMPTY_HEAP_ON_MINIMIZER_TURN,
            _ => UNDECIDED,
        }
    }

    fn legal_moves(&self, node: &SearchNode<u32, u32>) -> Vec<u32> {
        let heap = *node.position();
        (1..=self.max_take.min(heap)).collect()
    }
}

//! Small games used to exercise the searcher from tests, benchmarks and the CLI.

pub mod nim;
pub mod tree;

pub use nim::Nim;
pub use tree::{GameTree, TreeError};

//! CLI command implementations.

pub trait Command {
    fn execute(self);
}

pub mod count_positions;
pub mod nim;
pub mod tree;

// Shared utilities for commands
pub(crate) mod util;

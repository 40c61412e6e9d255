pub mod alpha_beta_searcher;
pub mod extended_integer;
pub mod games;

pub use alpha_beta_searcher::{search, NodeKind, SearchNode};
pub use extended_integer::ExtendedInteger;

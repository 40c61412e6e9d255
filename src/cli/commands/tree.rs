//! Tree command - search a game tree read from a file.

use std::path::PathBuf;

use alphabeta::alpha_beta_searcher::{search_with_context, SearchContext};
use alphabeta::games::GameTree;
use structopt::StructOpt;

use super::util::print_search_result;
use super::Command;

#[derive(StructOpt)]
pub struct TreeArgs {
    #[structopt(short, long, parse(from_os_str))]
    pub file: PathBuf,
    #[structopt(short, long, default_value = "4")]
    pub depth: u8,
}

impl Command for TreeArgs {
    fn execute(self) {
        let tree = match GameTree::load(&self.file) {
            Ok(tree) => tree,
            Err(err) => {
                eprintln!("Failed to load {}: {}", self.file.display(), err);
                std::process::exit(1);
            }
        };

        let mut context = SearchContext::new(self.depth);
        let result = search_with_context(&mut context, &tree, String::new());

        print_search_result(&result, &context);
    }
}

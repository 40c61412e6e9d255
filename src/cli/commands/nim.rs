//! Nim command - search a single-heap subtraction game.

use alphabeta::alpha_beta_searcher::{search_with_context, SearchContext};
use alphabeta::games::Nim;
use structopt::StructOpt;

use super::util::print_search_result;
use super::Command;

#[derive(StructOpt)]
pub struct NimArgs {
    #[structopt(long, default_value = "5")]
    pub heap: u32,
    #[structopt(long = "max-take", default_value = "3")]
    pub max_take: u32,
    #[structopt(short, long, default_value = "6")]
    pub depth: u8,
}

impl Command for NimArgs {
    fn execute(self) {
        if self.max_take == 0 {
            eprintln!("--max-take must be at least 1");
            std::process::exit(1);
        }

        let nim = Nim::new(self.max_take);
        let mut context = SearchContext::new(self.depth);
        let result = search_with_context(&mut context, &nim, self.heap);

        print_search_result(&result, &context);
    }
}

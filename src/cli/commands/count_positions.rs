//! Count positions command - compare node counts of minimax and alpha-beta.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::{Duration, Instant};

use alphabeta::alpha_beta_searcher::{minimax, search_with_context, Game, SearchContext};
use alphabeta::games::GameTree;
use structopt::StructOpt;

use super::Command;

#[derive(Debug)]
pub enum CountPositionsStrategy {
    All,
    AlphaBeta,
}

impl FromStr for CountPositionsStrategy {
    type Err = &'static str;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(CountPositionsStrategy::All),
            "alpha-beta" => Ok(CountPositionsStrategy::AlphaBeta),
            _ => Err("invalid strategy; options are: all, alpha-beta"),
        }
    }
}

#[derive(StructOpt)]
pub struct CountPositionsArgs {
    #[structopt(short, long, default_value = "4")]
    pub depth: u8,
    #[structopt(short, long, default_value = "all")]
    pub strategy: CountPositionsStrategy,
    #[structopt(
        short,
        long,
        parse(from_os_str),
        help = "Tree file to search; a random tree is generated when omitted"
    )]
    pub file: Option<PathBuf>,
    #[structopt(long, default_value = "0")]
    pub seed: u64,
    #[structopt(long, default_value = "4")]
    pub branching: u8,
}

impl Command for CountPositionsArgs {
    fn execute(self) {
        let tree = match &self.file {
            Some(file) => match GameTree::load(file) {
                Ok(tree) => tree,
                Err(err) => {
                    eprintln!("Failed to load {}: {}", file.display(), err);
                    std::process::exit(1);
                }
            },
            None => GameTree::random(self.seed, self.branching, self.depth),
        };

        run_count_positions(&tree, String::new(), self.depth, &self.strategy);
    }
}

fn run_count_positions<G: Game>(
    game: &G,
    initial_position: G::Position,
    depth: u8,
    strategy: &CountPositionsStrategy,
) {
    let mut total_positions = 0;
    let mut total_duration = Duration::from_secs(0);

    for depth in 1..=depth {
        let mut context = SearchContext::new(depth);

        let starting_time = Instant::now();
        let result = match strategy {
            CountPositionsStrategy::All => minimax(&mut context, game, initial_position.clone()),
            CountPositionsStrategy::AlphaBeta => {
                search_with_context(&mut context, game, initial_position.clone())
            }
        };
        let duration = starting_time.elapsed();
        let count = context.searched_position_count();
        let positions_per_second = count as f64 / duration.as_secs_f64();

        total_positions += count;
        total_duration += duration;

        println!(
            "depth: {}, positions: {}, value: {}, positions per second: {}",
            depth,
            count,
            result.value(),
            positions_per_second
        );
    }

    println!(
        "total positions: {}, total duration: {:?}, positions per second: {}",
        total_positions,
        total_duration,
        total_positions as f64 / total_duration.as_secs_f64()
    );
}

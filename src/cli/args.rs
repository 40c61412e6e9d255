//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{count_positions::CountPositionsArgs, nim::NimArgs, tree::TreeArgs};

#[derive(StructOpt)]
#[structopt(
    name = "alphabeta",
    about = "Minimax search with alpha-beta pruning over small example games"
)]
pub enum Alphabeta {
    #[structopt(
        name = "nim",
        about = "Search a single heap of `--heap` coins (default: 5) where each move removes 1 to `--max-take` coins (default: 3), to the given `--depth` (default: 6). Prints the best move, its value and search statistics."
    )]
    Nim(NimArgs),
    #[structopt(
        name = "tree",
        about = "Search a game tree read from `--file`, one `<path> <value>` line per node with `.` for the root, to the given `--depth` (default: 4)."
    )]
    Tree(TreeArgs),
    #[structopt(
        name = "count-positions",
        about = "Count the positions visited for each depth up to `--depth` (default: 4), and report the time it took. By default every position is searched; select `--strategy alpha-beta` to count with pruning. Searches `--file` if given, otherwise a random tree built from `--seed` and `--branching`."
    )]
    CountPositions(CountPositionsArgs),
}

impl crate::cli::commands::Command for Alphabeta {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Nim(cmd),
            Tree(cmd),
            CountPositions(cmd),
        }
    }
}

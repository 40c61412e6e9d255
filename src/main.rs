mod cli;
#[cfg(feature = "instrumentation")]
mod instrumentation;

use cli::commands::Command;
use structopt::StructOpt;

fn main() {
    #[cfg(feature = "instrumentation")]
    instrumentation::init_tracing();
    #[cfg(not(feature = "instrumentation"))]
    env_logger::init();

    cli::Alphabeta::from_args().execute();
}

mod commands;
mod config;
mod terminal;

use commands::{CommandLine, Commands, contains, merge, parse};
use config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = Config::from(&commands);

    logging::init_logging(&cfg);
    print::initialize(&cfg);

    match commands.command {
        Commands::Parse { spec } => parse::parse(&spec, &cfg),
        Commands::Contains { outer, inner } => contains::contains(&outer, &inner, &cfg),
        Commands::Merge { specs } => merge::merge(&specs, &cfg),
    }
}

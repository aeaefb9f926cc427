pub mod contains;
pub mod merge;
pub mod parse;

use clap::{ArgAction, Parser, Subcommand};
use rangr_common::IpRanges;

#[derive(Parser)]
#[command(name = "rangr")]
#[command(about = "Parse and compare IP address range specifications.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Print less; repeat to print bare results only
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Log more; repeat for trace output
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the ranges of a specification, e.g. "10.0.0.0/24, 10.1.0.1 - 10.1.0.9"
    #[command(alias = "p")]
    Parse { spec: IpRanges },
    /// Check that every range of INNER lies within a range of OUTER
    #[command(alias = "c")]
    Contains { outer: IpRanges, inner: IpRanges },
    /// Concatenate several specifications in order
    #[command(alias = "m")]
    Merge {
        #[arg(required = true)]
        specs: Vec<IpRanges>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

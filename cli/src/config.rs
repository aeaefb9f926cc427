use crate::commands::CommandLine;

pub struct Config {
    /// 1 hides headers and trees, 2 prints bare results only.
    pub quiet: u8,
    /// Raises the default log level: 1 for debug, 2 and up for trace.
    pub verbose: u8,
    pub no_color: bool,
}

impl From<&CommandLine> for Config {
    fn from(commands: &CommandLine) -> Self {
        Self {
            quiet: commands.quiet,
            verbose: commands.verbose,
            no_color: commands.no_color,
        }
    }
}

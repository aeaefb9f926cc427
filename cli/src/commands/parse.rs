use rangr_common::IpRanges;
use tracing::info;

use crate::config::Config;
use crate::terminal::print;

pub fn parse(spec: &IpRanges, cfg: &Config) -> anyhow::Result<()> {
    info!(count = spec.len(), "specification parsed");

    print::header("parsed ranges", cfg.quiet);
    print::ranges(spec, cfg);
    print::summary(spec, cfg);
    print::end_of_program(cfg);
    Ok(())
}

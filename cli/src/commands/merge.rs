use rangr_common::IpRanges;
use tracing::debug;

use crate::config::Config;
use crate::terminal::print;

pub fn merge(specs: &[IpRanges], cfg: &Config) -> anyhow::Result<()> {
    let merged: IpRanges = concatenate(specs)?;

    print::header("merged ranges", cfg.quiet);
    print::ranges(&merged, cfg);
    print::summary(&merged, cfg);
    print::end_of_program(cfg);
    Ok(())
}

fn concatenate(specs: &[IpRanges]) -> anyhow::Result<IpRanges> {
    let Some((first, rest)) = specs.split_first() else {
        anyhow::bail!("nothing to merge");
    };

    let mut merged: IpRanges = first.clone();
    for other in rest {
        debug!(%other, "adding specification");
        merged.add(other);
    }
    Ok(merged)
}

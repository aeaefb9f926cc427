use rangr_common::IpRanges;

use crate::config::Config;
use crate::terminal::print;

pub fn contains(outer: &IpRanges, inner: &IpRanges, cfg: &Config) -> anyhow::Result<()> {
    let included: bool = outer.includes(inner);

    print::header("containment", cfg.quiet);
    if cfg.quiet == 0 {
        print::tree_head(0, &outer.to_string());
        print::tree_head(1, &inner.to_string());
    }
    print::verdict(included, cfg);
    print::end_of_program(cfg);

    if !included {
        anyhow::bail!("{inner} is not included in {outer}");
    }
    Ok(())
}

use colored::*;
use rangr_common::IpRanges;

use crate::config::Config;
use crate::terminal::{colors, format};

pub const TOTAL_WIDTH: usize = 64;

pub fn initialize(cfg: &Config) {
    if cfg.no_color {
        colored::control::set_override(false);
    }
}

pub fn print(msg: &str) {
    println!("{msg}");
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().color(colors::PRIMARY),
        "─".repeat(right)
    )
    .color(colors::SEPARATOR);

    print(&format!("{}", line));
}

pub fn tree_head(idx: usize, name: &str) {
    let idx_str: String = format!("[{}]", idx.to_string().color(colors::ACCENT));
    let output: String = format!(
        "{} {}",
        idx_str.color(colors::SEPARATOR),
        name.color(colors::PRIMARY)
    );
    print(&output);
}

pub fn as_tree_one_level(key_value_pair: Vec<(String, ColoredString)>) {
    for (i, (key, value)) in key_value_pair.iter().enumerate() {
        let last: bool = i + 1 == key_value_pair.len();
        let branch: ColoredString = if !last {
            "├─".color(colors::SEPARATOR)
        } else {
            "└─".color(colors::SEPARATOR)
        };
        let output: String = format!(
            " {} {}{}{} {}",
            branch,
            key.color(colors::TEXT_DEFAULT),
            ".".repeat(7usize.saturating_sub(key.len())).color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        );
        print(&output);
    }
}

pub fn ranges(ranges: &IpRanges, cfg: &Config) {
    for (idx, range) in ranges.iter().enumerate() {
        if cfg.quiet > 0 {
            print(&range.to_string());
            continue;
        }
        tree_head(idx, &range.to_string());
        as_tree_one_level(format::range_to_key_value_pairs(range));
    }
}

pub fn summary(ranges: &IpRanges, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }
    let unit: &str = if ranges.len() == 1 { "range" } else { "ranges" };
    let total: String = format!("{} {unit}", ranges.len());
    print(&format!(
        "{} {}",
        ">".color(colors::SEPARATOR),
        total.color(colors::TEXT_DEFAULT)
    ));
}

pub fn verdict(included: bool, cfg: &Config) {
    let text: ColoredString = if included {
        "included".color(colors::INCLUDED).bold()
    } else {
        "not included".color(colors::EXCLUDED).bold()
    };
    match cfg.quiet {
        0 => print(&format!("{} {}", ">".color(colors::SEPARATOR), text)),
        _ => print(&text.to_string()),
    }
}

pub fn end_of_program(cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }
    print(&format!(
        "{}",
        "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR)
    ));
}

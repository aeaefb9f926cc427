use colored::*;
use rangr_common::{Address, AddressRange, Version};

use crate::terminal::colors;

pub fn address(address: &Address) -> ColoredString {
    match address.version() {
        Version::V4 => address.to_string().color(colors::IPV4_ADDR),
        Version::V6 => address.to_string().color(colors::IPV6_ADDR),
    }
}

/// Human-readable address count; full IPv6 blocks are shown as powers of two.
pub fn size(range: &AddressRange) -> String {
    let size = range.size();
    if size == u128::MAX {
        String::from("2^128")
    } else if size.is_power_of_two() && size > u128::from(u64::MAX) {
        format!("2^{}", size.trailing_zeros())
    } else {
        size.to_string()
    }
}

pub fn range_to_key_value_pairs(range: &AddressRange) -> Vec<(String, ColoredString)> {
    vec![
        (String::from("start"), address(&range.start())),
        (String::from("end"), address(&range.end())),
        (
            String::from("family"),
            range.version().to_string().color(colors::TEXT_DEFAULT),
        ),
        (String::from("size"), size(range).color(colors::ACCENT)),
    ]
}

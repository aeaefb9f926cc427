#![cfg(test)]
use rangr_common::{Address, AddressRange, IpRanges, RangeError};
use std::net::{Ipv4Addr, Ipv6Addr};

pub fn v4(a: u8, b: u8, c: u8, d: u8) -> Address {
    Address::from(Ipv4Addr::new(a, b, c, d))
}

pub fn v6(s: &str) -> Address {
    Address::from(s.parse::<Ipv6Addr>().unwrap())
}

pub fn ranges(spec: &str) -> IpRanges {
    IpRanges::parse(spec).unwrap()
}

pub fn parse_err(spec: &str) -> RangeError {
    IpRanges::parse(spec).unwrap_err()
}

/// Checks the shape every parsed list must have: `n` ranges, each ordered.
pub fn assert_parses(spec: &str, n: usize) {
    let parsed: IpRanges = ranges(spec);
    assert_eq!(parsed.len(), n, "wrong range count for {spec:?}");
    for range in parsed.iter() {
        assert!(
            range.start() <= range.end(),
            "{range} is out of order in {spec:?}"
        );
        assert_eq!(range.start().version(), range.end().version());
    }
}

pub fn single(address: Address) -> AddressRange {
    AddressRange::single(address)
}

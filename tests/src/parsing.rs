#![cfg(test)]
use rangr_common::{AddressError, AddressRange, IpRanges, RangeError, Version};

use crate::util::{assert_parses, parse_err, ranges, single, v4, v6};

/*************************************************************
                     Valid specifications
**************************************************************/

#[test]
fn single_address() {
    assert_parses("10.142.15.11", 1);
    assert_parses("2001::", 1);

    let parsed = ranges("10.142.15.11");
    assert_eq!(parsed.ranges(), [single(v4(10, 142, 15, 11))]);
}

#[test]
fn dash_separated() {
    assert_parses("10.142.15.11 - 10.142.15.22", 1);
    assert_parses(
        "2001:0db8:85a3:0000:0000:8a2e:0370:7334-2001:0db8:85a3:0000:0000:8a2e:0370:7339",
        1,
    );
}

#[test]
fn subnet_mask() {
    assert_parses("10.142.15.0/24", 1);
    assert_parses("fec0::/24", 1);
    assert_parses("2001:0db8:85a3:0000:0000:8a2e:0370:7334/24", 1);

    let block = ranges("10.142.15.0/24").ranges()[0];
    assert_eq!(block.start(), v4(10, 142, 15, 0));
    assert_eq!(block.end(), v4(10, 142, 15, 255));

    let v6_block = ranges("2001:0db8:85a3:0000:0000:8a2e:0370:7334/24").ranges()[0];
    assert_eq!(v6_block.start(), v6("2001:d00::"));
    assert_eq!(v6_block.end(), v6("2001:dff:ffff:ffff:ffff:ffff:ffff:ffff"));
}

#[test]
fn comma_separated() {
    assert_parses("10.142.15.0, 10.142.15.4, 10.142.16.4", 3);
    assert_parses("fec0::, 2001:0db8:85a3:0000:0000:8a2e:0370:7334", 2);
    assert_parses("fec0::/24, 10.142.15.4/23", 2);
    assert_parses("10.142.15.11-10.142.15.22, 10.142.2.4, 10.142.16.4/23", 3);

    let parsed = ranges("10.142.15.0, 10.142.15.4, 10.142.16.4");
    let expected = [
        single(v4(10, 142, 15, 0)),
        single(v4(10, 142, 15, 4)),
        single(v4(10, 142, 16, 4)),
    ];
    assert_eq!(parsed.ranges(), expected);
}

#[test]
fn cidr_end_is_start_plus_block_size() {
    for (spec, bits, prefix) in [
        ("10.0.0.0/8", 32u32, 8u32),
        ("10.142.16.4/23", 32, 23),
        ("192.168.7.7/32", 32, 32),
        ("fec0::/24", 128, 24),
        ("2001:db8::/127", 128, 127),
    ] {
        let range: AddressRange = spec.parse().unwrap();
        let block: u128 = (1u128 << (bits - prefix)) - 1;
        assert_eq!(
            range.end().to_bits(),
            range.start().to_bits() + block,
            "{spec}"
        );
    }
}

#[test]
fn typed_conversions_agree() -> anyhow::Result<()> {
    let spec = "10.142.15.11-10.142.15.22, 2001::";
    let parsed: IpRanges = spec.parse()?;
    let converted = IpRanges::try_from(spec)?;
    let dynamic = IpRanges::from_dyn(&spec.to_string())?;
    assert_eq!(parsed, converted);
    assert_eq!(parsed, dynamic);
    Ok(())
}

/*************************************************************
                    Invalid specifications
**************************************************************/

#[test]
fn not_a_string() {
    let err = IpRanges::from_dyn(&vec!["XX"]).unwrap_err();
    assert_eq!(err.to_string(), "Unable to parse a non-string object");
}

#[test]
fn undetectable_version() {
    let err = parse_err("XX");
    assert_eq!(
        err,
        RangeError::Address(AddressError::UnknownVersion("XX".into()))
    );
    assert_eq!(err.to_string(), "Could not auto-detect IP version for 'XX'.");
}

#[test]
fn invalid_address() {
    assert!(matches!(
        parse_err("10.1.142.256"),
        RangeError::Address(AddressError::InvalidIpv4(_))
    ));
    assert!(matches!(
        parse_err("10.1.142.252 - 10.1.142.256"),
        RangeError::Address(AddressError::InvalidIpv4(_))
    ));
}

#[test]
fn incorrect_separator() {
    assert_eq!(
        parse_err("10.1.142.255 - ").to_string(),
        "Invalid input: 1 field/fields separated by '-'"
    );
    assert_eq!(
        parse_err("10.1.142.255 - 10.1.142.2 - 10.1.142.3").to_string(),
        "Invalid input: 3 field/fields separated by '-'"
    );
    assert_eq!(
        parse_err("10.1.142.252/").to_string(),
        "CIDR address is improperly formatted. Missing netmask after '/' character."
    );
}

#[test]
fn start_bigger_than_end() {
    let err = parse_err("10.1.142.255 - 10.1.142.1");
    assert_eq!(
        err,
        RangeError::RangeOrder {
            start: v4(10, 1, 142, 255),
            end: v4(10, 1, 142, 1),
        }
    );
    assert_eq!(err.to_string(), "IP 10.1.142.255 is bigger than IP 10.1.142.1");
}

#[test]
fn bad_subnet_mask() {
    let err = parse_err("10.1.142.0/33");
    assert_eq!(
        err,
        RangeError::NetmaskOutOfRange {
            netmask: 33,
            version: Version::V4,
        }
    );
    assert_eq!(err.to_string(), "Netmask, 33, is out of bounds for IPv4.");
}

#[test]
fn mixed_family_dash_range() {
    assert!(matches!(
        parse_err("10.0.0.1 - 2001::"),
        RangeError::MixedFamily { .. }
    ));
}

#[test]
fn later_bad_token_discards_earlier_ones() {
    assert_eq!(
        parse_err("10.0.0.1, 10.0.0.2 - 10.0.0.3, 10.1.142.0/33"),
        RangeError::NetmaskOutOfRange {
            netmask: 33,
            version: Version::V4,
        }
    );
}

#[test]
fn empty_specification() {
    assert_eq!(parse_err(""), RangeError::Empty);
}

#![cfg(test)]
use rangr_common::{IpRanges, RangeError};

use crate::util::ranges;

fn subject() -> IpRanges {
    ranges("10.142.15.11 - 10.142.15.22")
}

/*************************************************************
                            add
**************************************************************/

#[test]
fn add_other_ranges() {
    let mut subject = subject();
    let first = subject.ranges()[0];
    assert_eq!(subject.len(), 1);

    subject.add(&ranges("10.142.1.0 - 10.142.1.4"));

    assert_eq!(subject.len(), 2);
    assert_eq!(subject.ranges()[0], first);
    assert!(subject.iter().all(|r| r.start() <= r.end()));
}

#[test]
fn add_not_an_ip_range() {
    let mut subject = subject();
    let err = subject.add_dyn(&"10.142.1.0").unwrap_err();
    assert_eq!(err, RangeError::InvalidSourceType);
    assert_eq!(err.to_string(), "Unable to parse object that is not IpRange");
    assert_eq!(subject.len(), 1);
}

#[test]
fn add_is_concatenation() {
    let b = ranges("10.0.0.0/24, 10.0.0.5");
    let c = ranges("2001::, 10.0.0.5");

    let mut stepwise = subject();
    stepwise.add(&b);
    stepwise.add(&c);

    let mut b_then_c = b.clone();
    b_then_c.add(&c);
    let mut at_once = subject();
    at_once.add(&b_then_c);

    assert_eq!(stepwise, at_once);
    assert_eq!(stepwise.len(), 5);
}

#[test]
fn add_does_not_alias_argument() {
    let mut subject = subject();
    let mut other = ranges("10.142.1.0 - 10.142.1.4");
    subject.add(&other);

    other.add(&ranges("10.9.9.9"));
    assert_eq!(subject.len(), 2);
    assert_eq!(other.len(), 2);
}

/*************************************************************
                          include?
**************************************************************/

#[test]
fn target_range_is_included() {
    let subject = subject();
    for spec in [
        "10.142.15.11",
        "10.142.15.11, 10.142.15.12",
        "10.142.15.19 - 10.142.15.22",
        "10.142.15.19/31",
    ] {
        assert!(subject.includes(&ranges(spec)), "{spec} should be included");
    }
}

#[test]
fn target_range_is_not_included() {
    let subject = subject();
    for spec in [
        "10.142.15.09, 10.142.15.12",
        "10.142.15.19 - 10.142.15.25",
        "10.142.15.19/25",
    ] {
        assert!(!subject.includes(&ranges(spec)), "{spec} should not be included");
    }
}

#[test]
fn include_is_reflexive() {
    for spec in [
        "10.142.15.11 - 10.142.15.22",
        "fec0::/24, 10.142.15.4/23",
        "10.0.0.1, 10.0.0.1, 2001::",
    ] {
        let x = ranges(spec);
        assert!(x.includes(&x), "{spec} should include itself");
    }
}

#[test]
fn include_never_crosses_families() {
    let everything_v4 = ranges("0.0.0.0/0");
    assert!(!everything_v4.includes(&ranges("::ffff:10.0.0.1")));
    assert!(!everything_v4.includes(&ranges("10.0.0.1, 2001::")));
}

#[test]
fn include_checks_each_range_separately() {
    let subject = ranges("10.0.0.0/24, 10.0.2.0/24");
    assert!(subject.includes(&ranges("10.0.0.9, 10.0.2.9")));
    // Spans the gap between the two blocks.
    assert!(!subject.includes(&ranges("10.0.0.9 - 10.0.2.9")));
    // Adjacent blocks are not merged.
    assert!(!ranges("10.0.0.0/24, 10.0.1.0/24").includes(&ranges("10.0.0.0/23")));
}

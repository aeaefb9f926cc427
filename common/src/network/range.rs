//! # Address Range Model
//!
//! An inclusive, contiguous block of same-family addresses, and the parser
//! that turns one comma-separated token into such a block.
//!
//! Tokens are classified in this order:
//! * Contains `/`: CIDR block (`10.142.15.0/24`, `10.0.0.0/255.255.255.0`).
//! * Contains `-`: dash range (`10.142.15.11 - 10.142.15.22`).
//! * Otherwise: a single address.

use std::cmp::Ordering;
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use tracing::trace;

use crate::error::RangeError;
use crate::network::address::{Address, Version};

/// Inclusive `[start, end]` range, `start <= end`, both of one family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AddressRange {
    start: Address,
    end: Address,
}

impl AddressRange {
    const CIDR_SEPARATOR: char = '/';
    const RANGE_SEPARATOR: char = '-';

    /// Builds a range from two endpoints. Endpoints are never swapped.
    pub fn new(start: Address, end: Address) -> Result<Self, RangeError> {
        match start.compare(&end) {
            None => Err(RangeError::MixedFamily { start, end }),
            Some(Ordering::Greater) => Err(RangeError::RangeOrder { start, end }),
            Some(_) => Ok(Self { start, end }),
        }
    }

    pub fn single(address: Address) -> Self {
        Self {
            start: address,
            end: address,
        }
    }

    /// Creates the range covering the whole network `address/prefix`.
    ///
    /// Host bits in `address` are masked off, so `10.142.15.19/25` covers
    /// `10.142.15.0` to `10.142.15.127`.
    pub fn cidr(address: Address, prefix: u32) -> Result<Self, RangeError> {
        let version = address.version();
        let bits = version.bits();
        if prefix > bits {
            return Err(RangeError::NetmaskOutOfRange {
                netmask: prefix,
                version,
            });
        }

        let host_mask = host_mask(bits - prefix);
        let network = address.to_bits() & !host_mask;
        let broadcast = network | host_mask;

        Ok(Self {
            start: Address::from_bits(version, network),
            end: Address::from_bits(version, broadcast),
        })
    }

    /// Converts one specification token into a range.
    ///
    /// Surrounding whitespace is ignored, as is whitespace around `-` and `/`.
    pub fn parse_token(token: &str) -> Result<Self, RangeError> {
        let token = token.trim();

        if let Some((address, netmask)) = token.split_once(Self::CIDR_SEPARATOR) {
            trace!(token, "classified as CIDR block");
            return parse_cidr(address.trim(), netmask.trim());
        }

        if token.contains(Self::RANGE_SEPARATOR) {
            trace!(token, "classified as dash range");
            return parse_dash_range(token);
        }

        trace!(token, "classified as single address");
        Ok(Self::single(Address::parse(token)?))
    }

    pub fn start(&self) -> Address {
        self.start
    }

    pub fn end(&self) -> Address {
        self.end
    }

    pub fn version(&self) -> Version {
        self.start.version()
    }

    /// Returns `true` if `address` lies within the range.
    ///
    /// An address of the other family is never contained.
    pub fn contains(&self, address: &Address) -> bool {
        self.start <= *address && *address <= self.end
    }

    /// Returns `true` if both endpoints of `other` lie within this range.
    pub fn overlaps_or_contains(&self, other: &AddressRange) -> bool {
        self.contains(&other.start) && self.contains(&other.end)
    }

    /// Number of addresses in the range, saturating at `u128::MAX` for the
    /// full IPv6 space.
    pub fn size(&self) -> u128 {
        (self.end.to_bits() - self.start.to_bits()).saturating_add(1)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Address> + Clone {
        let version = self.version();
        (self.start.to_bits()..=self.end.to_bits())
            .map(move |bits| Address::from_bits(version, bits))
    }

    pub fn to_iter(&self) -> impl Iterator<Item = IpAddr> {
        self.iter().map(IpAddr::from)
    }
}

fn host_mask(host_bits: u32) -> u128 {
    match host_bits {
        0 => 0,
        n if n >= u128::BITS => u128::MAX,
        n => (1u128 << n) - 1,
    }
}

/// Parses `address/netmask`, where the netmask is a prefix length or, for
/// IPv4, a dotted-decimal mask.
fn parse_cidr(address: &str, netmask: &str) -> Result<AddressRange, RangeError> {
    if netmask.is_empty() {
        return Err(RangeError::MissingNetmask);
    }

    let address = Address::parse(address)?;
    let prefix = parse_prefix(netmask, address.version())?;

    AddressRange::cidr(address, prefix)
}

fn parse_prefix(netmask: &str, version: Version) -> Result<u32, RangeError> {
    let invalid = || RangeError::InvalidNetmask(netmask.to_string());

    if netmask.bytes().all(|b| b.is_ascii_digit()) {
        return netmask.parse::<u32>().map_err(|_| invalid());
    }

    if version != Version::V4 {
        return Err(invalid());
    }

    let mask = match Address::parse(netmask).map(|mask| mask.to_ip_addr()) {
        Ok(IpAddr::V4(mask)) => u32::from(mask),
        _ => return Err(invalid()),
    };

    let prefix = mask.leading_ones();
    if mask.checked_shl(prefix).unwrap_or(0) != 0 {
        return Err(invalid());
    }

    Ok(prefix)
}

/// Parses `start - end`.
///
/// Trailing empty fields are dropped before counting, so `10.1.142.255 - `
/// reports a single field.
fn parse_dash_range(token: &str) -> Result<AddressRange, RangeError> {
    let mut fields: Vec<&str> = token
        .split(AddressRange::RANGE_SEPARATOR)
        .map(str::trim)
        .collect();
    while fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }

    match fields.as_slice() {
        [start, end] if !start.is_empty() => {
            AddressRange::new(Address::parse(start)?, Address::parse(end)?)
        }
        [_, _] => Err(RangeError::SeparatorFieldCount(1)),
        other => Err(RangeError::SeparatorFieldCount(other.len())),
    }
}

impl FromStr for AddressRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AddressRange::parse_token(s)
    }
}

impl fmt::Display for AddressRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{} - {}", self.start, self.end)
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

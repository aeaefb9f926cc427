//! # IP Address Model
//!
//! A single IPv4 or IPv6 address. The family is detected from the text:
//! anything with a `:` is read as IPv6, anything with a `.` as IPv4.
//!
//! Addresses are only ordered against addresses of the same family, so
//! [`Address`] implements [`PartialOrd`] but not [`Ord`]. Comparing across
//! families yields `None`, which makes every `<`/`<=` check false.

use std::cmp::Ordering;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use crate::error::AddressError;

/// IP address family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Version {
    V4,
    V6,
}

impl Version {
    /// Width of an address of this family, in bits.
    pub const fn bits(self) -> u32 {
        match self {
            Version::V4 => 32,
            Version::V6 => 128,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Version::V4 => f.write_str("IPv4"),
            Version::V6 => f.write_str("IPv6"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Address(IpAddr);

impl Address {
    /// Parses a dotted-decimal IPv4 or colon-form IPv6 literal.
    ///
    /// IPv4 octets may carry leading zeros and are always read as decimal,
    /// so `10.142.15.09` is `10.142.15.9`.
    pub fn parse(text: &str) -> Result<Self, AddressError> {
        if text.contains(':') {
            parse_ipv6(text)
        } else if text.contains('.') {
            parse_ipv4(text)
        } else {
            Err(AddressError::UnknownVersion(text.to_string()))
        }
    }

    pub fn version(&self) -> Version {
        match self.0 {
            IpAddr::V4(_) => Version::V4,
            IpAddr::V6(_) => Version::V6,
        }
    }

    pub fn is_ipv4(&self) -> bool {
        self.version() == Version::V4
    }

    pub fn is_ipv6(&self) -> bool {
        self.version() == Version::V6
    }

    /// Numeric value of the address, zero-extended to 128 bits.
    pub fn to_bits(&self) -> u128 {
        match self.0 {
            IpAddr::V4(ip) => u128::from(u32::from(ip)),
            IpAddr::V6(ip) => u128::from(ip),
        }
    }

    /// Builds an address from its numeric value.
    ///
    /// For [`Version::V4`] only the low 32 bits are used.
    pub fn from_bits(version: Version, bits: u128) -> Self {
        match version {
            Version::V4 => Address(IpAddr::V4(Ipv4Addr::from(bits as u32))),
            Version::V6 => Address(IpAddr::V6(Ipv6Addr::from(bits))),
        }
    }

    pub fn to_ip_addr(&self) -> IpAddr {
        self.0
    }

    /// Numeric comparison, defined only within one family.
    pub fn compare(&self, other: &Address) -> Option<Ordering> {
        match (self.0, other.0) {
            (IpAddr::V4(a), IpAddr::V4(b)) => Some(a.cmp(&b)),
            (IpAddr::V6(a), IpAddr::V6(b)) => Some(a.cmp(&b)),
            _ => None,
        }
    }
}

fn parse_ipv4(text: &str) -> Result<Address, AddressError> {
    let invalid = || AddressError::InvalidIpv4(text.to_string());

    let mut octets = [0u8; 4];
    let mut fields = text.split('.');
    for octet in octets.iter_mut() {
        let field = fields.next().ok_or_else(invalid)?;
        if field.is_empty() || field.len() > 3 || !field.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        *octet = field.parse::<u8>().map_err(|_| invalid())?;
    }

    if fields.next().is_some() {
        return Err(invalid());
    }

    Ok(Address(IpAddr::V4(Ipv4Addr::from(octets))))
}

fn parse_ipv6(text: &str) -> Result<Address, AddressError> {
    text.parse::<Ipv6Addr>()
        .map(|ip| Address(IpAddr::V6(ip)))
        .map_err(|_| AddressError::InvalidIpv6(text.to_string()))
}

impl PartialOrd for Address {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other)
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Address::parse(s)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<IpAddr> for Address {
    fn from(ip: IpAddr) -> Self {
        Address(ip)
    }
}

impl From<Ipv4Addr> for Address {
    fn from(ip: Ipv4Addr) -> Self {
        Address(IpAddr::V4(ip))
    }
}

impl From<Ipv6Addr> for Address {
    fn from(ip: Ipv6Addr) -> Self {
        Address(IpAddr::V6(ip))
    }
}

impl From<Address> for IpAddr {
    fn from(address: Address) -> Self {
        address.0
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

//! Error taxonomy for address and range parsing.
//!
//! Several messages are matched verbatim by existing callers, so the wording
//! and the embedded values must stay as they are.

use thiserror::Error;

use crate::network::address::{Address, Version};

/// Failure to read a single address literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// The text looks like neither an IPv4 nor an IPv6 address.
    #[error("Could not auto-detect IP version for '{0}'.")]
    UnknownVersion(String),
    #[error("{0} is not a valid IPv4 address.")]
    InvalidIpv4(String),
    #[error("{0} is not a valid IPv6 address.")]
    InvalidIpv6(String),
}

/// Failure to build an [`crate::AddressRange`] or [`crate::IpRanges`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    /// A dynamically typed source was not text.
    #[error("Unable to parse a non-string object")]
    NotAString,
    /// A dynamically typed argument to `add` was not an `IpRanges`.
    #[error("Unable to parse object that is not IpRange")]
    InvalidSourceType,
    #[error(transparent)]
    Address(#[from] AddressError),
    #[error("Invalid input: {0} field/fields separated by '-'")]
    SeparatorFieldCount(usize),
    #[error("CIDR address is improperly formatted. Missing netmask after '/' character.")]
    MissingNetmask,
    #[error("Netmask, {netmask}, is out of bounds for {version}.")]
    NetmaskOutOfRange { netmask: u32, version: Version },
    #[error("Netmask, {0}, is not a valid prefix length or IPv4 mask.")]
    InvalidNetmask(String),
    #[error("IP {start} is bigger than IP {end}")]
    RangeOrder { start: Address, end: Address },
    #[error("IP {start} and IP {end} are not of the same IP version")]
    MixedFamily { start: Address, end: Address },
    #[error("Unable to parse an empty IP range specification")]
    Empty,
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

//! # Network Models
//!
//! * [`address::Address`]: One IPv4 or IPv6 address, family detected from text.
//! * [`range::AddressRange`]: An inclusive `[start, end]` block of same-family addresses.
//! * [`ranges::IpRanges`]: The ordered list of ranges a specification string describes.

pub mod address;
pub mod range;
pub mod ranges;

//! # Rangr Common
//!
//! Parses human-written IP address specifications into ordered lists of
//! contiguous address ranges, and answers containment questions about them.
//!
//! A specification is a comma-separated list of tokens, each one of:
//! * A single address (`10.142.15.11`, `2001::`).
//! * A dash range (`10.142.15.11 - 10.142.15.22`).
//! * A CIDR block (`10.142.15.0/24`, `fec0::/24`).
//!
//! ```
//! use rangr_common::IpRanges;
//!
//! let subnet: IpRanges = "10.142.15.11 - 10.142.15.22".parse().unwrap();
//! let hosts: IpRanges = "10.142.15.19/31".parse().unwrap();
//! assert!(subnet.includes(&hosts));
//! ```
//!
//! ## Modules
//! * **[`network`]**: The address, range and range-list models.
//! * **[`error`]**: Everything that can go wrong while parsing.

pub mod error;
pub mod network;

pub use error::{AddressError, RangeError};
pub use network::address::{Address, Version};
pub use network::range::AddressRange;
pub use network::ranges::IpRanges;

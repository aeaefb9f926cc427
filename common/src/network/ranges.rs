//! # IP Range List
//!
//! [`IpRanges`] is the ordered list of [`AddressRange`]s that one
//! specification string describes, such as
//! `"10.142.15.11-10.142.15.22, 10.142.2.4, 10.142.16.4/23"`.
//!
//! Ranges keep the order and multiplicity of the source text. Overlapping or
//! adjacent ranges are never merged, and [`IpRanges::add`] is plain
//! concatenation.

use std::any::Any;
use std::fmt;
use std::slice;
use std::str::FromStr;

use tracing::debug;

use crate::error::RangeError;
use crate::network::address::Address;
use crate::network::range::AddressRange;

/// Non-empty, ordered list of address ranges.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IpRanges {
    ranges: Vec<AddressRange>,
}

impl IpRanges {
    const SEPARATOR: char = ',';

    /// Parses a comma-separated specification.
    ///
    /// Parsing is all-or-nothing: the first bad token aborts and its error is
    /// returned as is.
    pub fn parse(spec: &str) -> Result<Self, RangeError> {
        if spec.trim().is_empty() {
            return Err(RangeError::Empty);
        }

        let ranges = spec
            .split(Self::SEPARATOR)
            .map(AddressRange::parse_token)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(spec, count = ranges.len(), "parsed IP range specification");
        Ok(Self { ranges })
    }

    /// Builds a list from already constructed ranges, keeping their order.
    pub fn from_ranges<I>(ranges: I) -> Result<Self, RangeError>
    where
        I: IntoIterator<Item = AddressRange>,
    {
        let ranges: Vec<AddressRange> = ranges.into_iter().collect();
        if ranges.is_empty() {
            return Err(RangeError::Empty);
        }
        Ok(Self { ranges })
    }

    /// Builds a list from a dynamically typed value.
    ///
    /// Accepts `String`, `&str` (parsed) or another `IpRanges` (copied).
    /// Anything else is rejected with [`RangeError::NotAString`].
    pub fn from_dyn(source: &dyn Any) -> Result<Self, RangeError> {
        if let Some(other) = source.downcast_ref::<IpRanges>() {
            return Ok(other.clone());
        }
        if let Some(spec) = source.downcast_ref::<String>() {
            return Self::parse(spec);
        }
        if let Some(spec) = source.downcast_ref::<&str>() {
            return Self::parse(spec);
        }
        Err(RangeError::NotAString)
    }

    pub fn ranges(&self) -> &[AddressRange] {
        &self.ranges
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, AddressRange> {
        self.ranges.iter()
    }

    /// Appends every range of `other`, in order, to the end of this list.
    pub fn add(&mut self, other: &IpRanges) {
        self.ranges.extend_from_slice(&other.ranges);
        debug!(added = other.len(), total = self.len(), "appended IP ranges");
    }

    /// Like [`IpRanges::add`], for a dynamically typed argument.
    ///
    /// Leaves `self` untouched and fails with
    /// [`RangeError::InvalidSourceType`] unless `other` is an `IpRanges`.
    pub fn add_dyn(&mut self, other: &dyn Any) -> Result<(), RangeError> {
        let other = other
            .downcast_ref::<IpRanges>()
            .ok_or(RangeError::InvalidSourceType)?;
        self.add(other);
        Ok(())
    }

    /// Returns `true` if every range of `other` lies entirely within at
    /// least one range of `self`.
    pub fn includes(&self, other: &IpRanges) -> bool {
        let included = other
            .ranges
            .iter()
            .all(|wanted| self.ranges.iter().any(|have| have.overlaps_or_contains(wanted)));

        debug!(receiver = %self, other = %other, included, "evaluated IP range inclusion");
        included
    }

    pub fn contains_address(&self, address: &Address) -> bool {
        self.ranges.iter().any(|range| range.contains(address))
    }
}

impl FromStr for IpRanges {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IpRanges::parse(s)
    }
}

impl TryFrom<&str> for IpRanges {
    type Error = RangeError;

    fn try_from(spec: &str) -> Result<Self, Self::Error> {
        IpRanges::parse(spec)
    }
}

impl fmt::Display for IpRanges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, range) in self.ranges.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{range}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a IpRanges {
    type Item = &'a AddressRange;
    type IntoIter = slice::Iter<'a, AddressRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
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

//! The immutable address value.
//!
//! [`Address`] pairs a family tag with the canonical integer and exposes
//! every public operation: construction from text, integer, or packed
//! binary; accessors for each derived view; adjacent-address navigation;
//! and ordering. Every derived view is a pure function of the canonical
//! integer, and every operation returns a new value.

use std::cmp::Ordering;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use smallvec::SmallVec;

use crate::codec;
use crate::error::{AddrError, Result};
use crate::version::Version;
use crate::wide::AddrInt;

/// An immutable IP address value (version 4 or 6).
///
/// The inner canonical integer is stored at its native width, so an IPv4
/// value can never hold more than 32 bits. There are no setters; navigation
/// and conversion return new values.
///
/// # Example
///
/// ```
/// use ipval::{Address, Version};
///
/// let addr = Address::parse("1.2.3.4").unwrap();
/// assert_eq!(addr.version(), Version::V4);
/// assert_eq!(addr.to_int(), 0x01020304);
/// assert_eq!(addr.next().unwrap().to_string(), "1.2.3.5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address(AddrInt);

impl Address {
    /// Parse address text, detecting the family by syntax.
    pub fn parse(input: &str) -> Result<Self> {
        codec::parse_text(input)
    }

    /// Parse address text under one family's grammar only.
    ///
    /// See [`codec::parse_text_as`] for the forced-interpretation rules.
    pub fn parse_as(input: &str, version: Version) -> Result<Self> {
        codec::parse_text_as(input, version)
    }

    /// Construct from a canonical integer.
    ///
    /// With an explicit version the value is range-checked against that
    /// family ([`AddrError::OutOfRange`] on violation). With `None` the
    /// version is inferred: V4 when the value fits 32 bits, V6 otherwise.
    /// Callers needing an IPv6 address with a small value must pass the
    /// hint (or use `From<u128>`, which fixes the width in the type).
    ///
    /// # Example
    ///
    /// ```
    /// use ipval::{Address, Version};
    ///
    /// let inferred = Address::from_int(1, None).unwrap();
    /// assert_eq!(inferred.version(), Version::V4);
    ///
    /// let forced = Address::from_int(1, Some(Version::V6)).unwrap();
    /// assert_eq!(forced.to_string(), "::1");
    /// ```
    pub fn from_int(value: u128, version: Option<Version>) -> Result<Self> {
        let version = version.unwrap_or(if value <= u32::MAX as u128 {
            Version::V4
        } else {
            Version::V6
        });
        AddrInt::from_value(value, version).map(Address)
    }

    /// Decode packed big-endian binary, inferring the family from the
    /// length (4 or 16 bytes; [`AddrError::InvalidLength`] otherwise).
    pub fn from_be_bytes(bytes: &[u8]) -> Result<Self> {
        AddrInt::from_be_bytes(bytes).map(Address)
    }

    /// Address family.
    pub fn version(self) -> Version {
        self.0.version()
    }

    /// Bit width of this address: 32 or 128.
    pub fn bit_width(self) -> u32 {
        self.version().bit_width()
    }

    /// The canonical integer at its native width.
    pub fn to_canonical(self) -> AddrInt {
        self.0
    }

    /// The canonical integer, widened to 128 bits without loss.
    pub fn to_int(self) -> u128 {
        self.0.widened()
    }

    /// Packed big-endian binary: exactly 4 or 16 bytes.
    pub fn to_be_bytes(self) -> SmallVec<[u8; 16]> {
        self.0.to_be_bytes()
    }

    /// Binary digit string, zero-padded to exactly 32 or 128 characters,
    /// most significant bit first.
    pub fn bit_string(self) -> String {
        self.0.bit_string()
    }

    /// Forced dotted-quad rendering of the low 32 bits, for either family.
    ///
    /// Fails with [`AddrError::NotRepresentable`] when the value is 2^32
    /// or larger. See [`codec::format_dotted_quad`].
    pub fn dotted_quad(self) -> Result<String> {
        codec::format_dotted_quad(self)
    }

    /// The equivalent `std::net` address.
    pub fn to_ip_addr(self) -> IpAddr {
        match self.0 {
            AddrInt::U32(v) => IpAddr::V4(Ipv4Addr::from(v)),
            AddrInt::U128(v) => IpAddr::V6(Ipv6Addr::from(v)),
        }
    }

    /// The adjacent address above this one.
    ///
    /// Fails with [`AddrError::RangeOverflow`] at the last address of the
    /// family's range.
    pub fn next(self) -> Result<Self> {
        self.0.checked_increment().map(Address)
    }

    /// The adjacent address below this one.
    ///
    /// Fails with [`AddrError::RangeUnderflow`] at the first address of
    /// the family's range.
    pub fn previous(self) -> Result<Self> {
        self.0.checked_decrement().map(Address)
    }

    /// Total-order comparison within a family.
    ///
    /// Fails with [`AddrError::IncomparableVersions`] for a cross-family
    /// pair; the infix `<`/`>` operators return `false` in that case
    /// because [`PartialOrd`] yields `None`.
    pub fn try_compare(self, other: Self) -> Result<Ordering> {
        self.0
            .compare(other.0)
            .ok_or(AddrError::IncomparableVersions {
                left: self.version(),
                right: other.version(),
            })
    }
}

impl PartialOrd for Address {
    /// Integer order within a family; `None` across families.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.compare(other.0)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&codec::format_text(*self))
    }
}

impl FromStr for Address {
    type Err = AddrError;

    fn from_str(s: &str) -> Result<Self> {
        codec::parse_text(s)
    }
}

impl From<Ipv4Addr> for Address {
    fn from(addr: Ipv4Addr) -> Self {
        Address(AddrInt::U32(u32::from(addr)))
    }
}

impl From<Ipv6Addr> for Address {
    fn from(addr: Ipv6Addr) -> Self {
        Address(AddrInt::U128(u128::from(addr)))
    }
}

impl From<IpAddr> for Address {
    fn from(addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(v4) => v4.into(),
            IpAddr::V6(v6) => v6.into(),
        }
    }
}

impl From<Address> for IpAddr {
    fn from(addr: Address) -> Self {
        addr.to_ip_addr()
    }
}

impl From<u32> for Address {
    fn from(value: u32) -> Self {
        Address(AddrInt::U32(value))
    }
}

impl From<u128> for Address {
    fn from(value: u128) -> Self {
        Address(AddrInt::U128(value))
    }
}

impl From<[u8; 4]> for Address {
    fn from(bytes: [u8; 4]) -> Self {
        Address(AddrInt::U32(u32::from_be_bytes(bytes)))
    }
}

impl From<[u8; 16]> for Address {
    fn from(bytes: [u8; 16]) -> Self {
        Address(AddrInt::U128(u128::from_be_bytes(bytes)))
    }
}

impl TryFrom<&[u8]> for Address {
    type Error = AddrError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Address::from_be_bytes(bytes)
    }
}

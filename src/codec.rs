//! Textual address parsing and rendering.
//!
//! Converts between the human-readable forms (dotted-quad, colon-hex) and
//! [`Address`] values, delegating the grammar to `std::net`. That gives the
//! standard strict behavior: `1.2.3.999` and leading-zero octets are
//! rejected, `::` compression and embedded IPv4-in-IPv6 forms are accepted,
//! and rendered IPv6 text is the canonical lowercase shortest form.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::addr::Address;
use crate::error::{AddrError, Result};
use crate::version::Version;

/// Parse address text, detecting the family by syntax.
///
/// Dotted-quad text yields an IPv4 value, colon-hex text an IPv6 value.
/// Fails with [`AddrError::MalformedAddress`] when the input matches
/// neither grammar.
///
/// # Example
///
/// ```
/// use ipval::{codec, Version};
///
/// let v4 = codec::parse_text("192.168.1.1").unwrap();
/// assert_eq!(v4.version(), Version::V4);
///
/// let v6 = codec::parse_text("2001:db8::1").unwrap();
/// assert_eq!(v6.version(), Version::V6);
/// ```
pub fn parse_text(input: &str) -> Result<Address> {
    input
        .parse::<IpAddr>()
        .map(Address::from)
        .map_err(|_| AddrError::MalformedAddress {
            input: input.to_string(),
        })
}

/// Parse address text under one family's grammar only.
///
/// The hint overrides syntactic auto-detection: with [`Version::V6`], a
/// dotted quad is only accepted in its embedded colon-hex spelling
/// (`::ffff:1.2.3.4`), and with [`Version::V4`], colon-hex text is
/// rejected. Fails with [`AddrError::MalformedAddress`] when the input
/// does not parse under the forced grammar.
pub fn parse_text_as(input: &str, version: Version) -> Result<Address> {
    let parsed = match version {
        Version::V4 => input.parse::<Ipv4Addr>().map(Address::from),
        Version::V6 => input.parse::<Ipv6Addr>().map(Address::from),
    };
    parsed.map_err(|_| AddrError::MalformedAddress {
        input: input.to_string(),
    })
}

/// Render an address in its canonical textual form.
///
/// IPv4 renders as a plain dotted quad; IPv6 as lowercase colon-hex with
/// the shortest valid `::` compression.
///
/// # Example
///
/// ```
/// use ipval::codec;
///
/// let addr = codec::parse_text("A900:0:0:0:0:0:0:1234").unwrap();
/// assert_eq!(codec::format_text(addr), "a900::1234");
/// ```
pub fn format_text(addr: Address) -> String {
    addr.to_ip_addr().to_string()
}

/// Force dotted-quad rendering of an address of either family.
///
/// Renders the low 32 bits as `a.b.c.d`. Fails with
/// [`AddrError::NotRepresentable`] when the value is 2^32 or larger.
/// This is a display aid for cross-family debugging, not a semantic
/// conversion between families.
///
/// # Example
///
/// ```
/// use ipval::codec;
///
/// let small_v6 = codec::parse_text("::c0a8:0101").unwrap();
/// assert_eq!(codec::format_dotted_quad(small_v6).unwrap(), "192.168.1.1");
///
/// let big_v6 = codec::parse_text("2001:db8::1").unwrap();
/// assert!(codec::format_dotted_quad(big_v6).is_err());
/// ```
pub fn format_dotted_quad(addr: Address) -> Result<String> {
    let value = addr.to_int();
    let low = u32::try_from(value).map_err(|_| AddrError::NotRepresentable { value, width: 32 })?;
    Ok(Ipv4Addr::from(low).to_string())
}

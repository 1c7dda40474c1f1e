//! Fuzz target for the textual address parser.
//!
//! Exercises family auto-detection and both forced-family grammars:
//!
//! - Dotted-quad octet validation
//! - Colon-hex hextet parsing and `::` zero-run compression
//! - Embedded IPv4-in-IPv6 forms
//!
//! Any accepted input must re-render to a canonical form that parses back
//! to the same value.

#![no_main]

use libfuzzer_sys::fuzz_target;

use ipval::{Address, Version};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(addr) = Address::parse(input) {
        let canonical = addr.to_string();
        let reparsed = Address::parse(&canonical).expect("canonical form must parse");
        assert_eq!(reparsed, addr);
        assert_eq!(addr.bit_string().len(), addr.bit_width() as usize);
    }

    // Forced grammars must never accept what they cannot represent
    if let Ok(addr) = Address::parse_as(input, Version::V4) {
        assert_eq!(addr.version(), Version::V4);
    }
    if let Ok(addr) = Address::parse_as(input, Version::V6) {
        assert_eq!(addr.version(), Version::V6);
    }
});

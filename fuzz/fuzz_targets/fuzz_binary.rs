//! Fuzz target for the packed-binary decoder.
//!
//! Length inference accepts exactly 4 or 16 bytes; everything else must be
//! rejected without panicking, and every accepted input must round-trip
//! byte-for-byte.

#![no_main]

use libfuzzer_sys::fuzz_target;

use ipval::Address;

fuzz_target!(|data: &[u8]| {
    match Address::from_be_bytes(data) {
        Ok(addr) => {
            assert!(data.len() == 4 || data.len() == 16);
            assert_eq!(addr.to_be_bytes().as_slice(), data);
            assert_eq!(addr.version().byte_len(), data.len());
        }
        Err(_) => {
            assert!(data.len() != 4 && data.len() != 16);
        }
    }
});

//! Integration tests for ipval.
//!
//! Exercises the public API end to end: construction from each surface
//! form, round-trips between forms, ordering, and navigation boundaries.

use std::cmp::Ordering;

use ipval::{Address, AddrError, Version};

/// Every valid text form round-trips through parse/render to its
/// canonical spelling.
#[test]
fn test_text_round_trip_canonical_form() {
    let cases = [
        ("0.0.0.0", "0.0.0.0"),
        ("192.168.1.1", "192.168.1.1"),
        ("255.255.255.255", "255.255.255.255"),
        ("::", "::"),
        ("::1", "::1"),
        ("A900::1234", "a900::1234"),
        ("2001:0db8:0000:0000:0000:0000:0000:0001", "2001:db8::1"),
        ("fe80:0:0:0:0:0:0:1", "fe80::1"),
    ];

    for (input, canonical) in cases {
        let addr = Address::parse(input).unwrap();
        assert_eq!(addr.to_string(), canonical, "rendering {input:?}");
        assert_eq!(
            Address::parse(canonical).unwrap(),
            addr,
            "reparsing {canonical:?}"
        );
    }
}

#[test]
fn test_binary_round_trip() {
    let v4 = [10u8, 0, 0, 1];
    let addr = Address::from_be_bytes(&v4).unwrap();
    assert_eq!(addr.version(), Version::V4);
    assert_eq!(addr.to_be_bytes().as_slice(), &v4);

    let mut v6 = [0u8; 16];
    v6[0] = 0xa9;
    v6[1] = 0x00;
    v6[14] = 0x12;
    v6[15] = 0x34;
    let addr = Address::from_be_bytes(&v6).unwrap();
    assert_eq!(addr.version(), Version::V6);
    assert_eq!(addr.to_be_bytes().as_slice(), &v6);
    assert_eq!(addr.to_string(), "a900::1234");
}

#[test]
fn test_binary_length_validation() {
    for len in [0usize, 3, 5, 8, 15, 17] {
        let bytes = vec![0xabu8; len];
        assert_eq!(
            Address::from_be_bytes(&bytes),
            Err(AddrError::InvalidLength { len })
        );
    }
}

#[test]
fn test_integer_fidelity() {
    let samples: [(u128, Version); 7] = [
        (0, Version::V4),
        (1, Version::V4),
        (0x7FFF_FFFF, Version::V4),
        (u32::MAX as u128, Version::V4),
        (0, Version::V6),
        (u32::MAX as u128 + 1, Version::V6),
        (u128::MAX, Version::V6),
    ];

    for (value, version) in samples {
        let addr = Address::from_int(value, Some(version)).unwrap();
        assert_eq!(addr.to_int(), value);
        assert_eq!(addr.version(), version);
        // derived views agree with the integer
        assert_eq!(Address::from_be_bytes(&addr.to_be_bytes()).unwrap(), addr);
        assert_eq!(Address::parse(&addr.to_string()).unwrap(), addr);
    }
}

#[test]
fn test_known_ipv6_integer_value() {
    let addr = Address::parse("a900::1234").unwrap();
    assert_eq!(addr.to_int(), 224639531287650782520743393187378238004);

    let back = Address::from_int(224639531287650782520743393187378238004, None).unwrap();
    assert_eq!(back, addr);
    assert_eq!(back.to_string(), "a900::1234");
}

#[test]
fn test_bit_string_shape() {
    let v4 = Address::parse("1.2.3.4").unwrap().bit_string();
    assert_eq!(v4.len(), 32);
    assert!(v4.chars().all(|c| c == '0' || c == '1'));

    let v6 = Address::parse("a900::1234").unwrap().bit_string();
    assert_eq!(v6.len(), 128);
    assert!(v6.chars().all(|c| c == '0' || c == '1'));
    assert!(v6.starts_with("10101001")); // 0xa9
}

#[test]
fn test_adjacency() {
    let addr = Address::parse("1.2.3.4").unwrap();
    assert_eq!(addr.next().unwrap().to_string(), "1.2.3.5");
    assert_eq!(addr.previous().unwrap().to_string(), "1.2.3.3");

    let addr = Address::parse("ffff::ffff").unwrap();
    assert_eq!(addr.next().unwrap().to_string(), "ffff::1:0");
}

#[test]
fn test_navigation_boundaries() {
    let top_v4 = Address::from_int(u32::MAX as u128, Some(Version::V4)).unwrap();
    assert_eq!(
        top_v4.next(),
        Err(AddrError::RangeOverflow {
            version: Version::V4
        })
    );

    let bottom_v4 = Address::from_int(0, Some(Version::V4)).unwrap();
    assert_eq!(
        bottom_v4.previous(),
        Err(AddrError::RangeUnderflow {
            version: Version::V4
        })
    );

    let top_v6 = Address::from_int(u128::MAX, Some(Version::V6)).unwrap();
    assert_eq!(
        top_v6.next(),
        Err(AddrError::RangeOverflow {
            version: Version::V6
        })
    );
}

#[test]
fn test_ordering_total_within_family() {
    let values = ["0.0.0.0", "9.255.0.1", "10.0.0.0", "255.255.255.255"];
    let addrs: Vec<Address> = values
        .iter()
        .map(|s| Address::parse(s).unwrap())
        .collect();

    for (i, a) in addrs.iter().enumerate() {
        for (j, b) in addrs.iter().enumerate() {
            let expected = i.cmp(&j);
            assert_eq!(a.try_compare(*b).unwrap(), expected, "{a} vs {b}");
            // exactly one of <, ==, > holds
            let relations =
                [*a < *b, *a == *b, *a > *b].iter().filter(|&&r| r).count();
            assert_eq!(relations, 1);
        }
    }
}

#[test]
fn test_cross_family_comparison_rejected() {
    let v4 = Address::parse("1.2.3.4").unwrap();
    let v6 = Address::parse("::1.2.3.4").unwrap();

    assert_eq!(v4.partial_cmp(&v6), None);
    assert_eq!(
        v4.try_compare(v6),
        Err(AddrError::IncomparableVersions {
            left: Version::V4,
            right: Version::V6
        })
    );
    // same integer in both families is still not equal
    assert_ne!(v4, v6);
    assert_eq!(v4.to_int(), v6.to_int());
}

#[test]
fn test_forced_family_parsing() {
    // hint matches syntax: fine
    assert!(Address::parse_as("1.2.3.4", Version::V4).is_ok());
    assert!(Address::parse_as("a900::1234", Version::V6).is_ok());

    // embedded-v4 spelling is the way to force a quad into V6
    let embedded = Address::parse_as("::ffff:1.2.3.4", Version::V6).unwrap();
    assert_eq!(embedded.version(), Version::V6);

    // hint contradicting the syntax fails
    assert_eq!(
        Address::parse_as("1.2.3.4", Version::V6),
        Err(AddrError::MalformedAddress {
            input: "1.2.3.4".to_string()
        })
    );
    assert_eq!(
        Address::parse_as("::1", Version::V4),
        Err(AddrError::MalformedAddress {
            input: "::1".to_string()
        })
    );
}

#[test]
fn test_malformed_text_rejected() {
    for input in ["1.2.3.999", "not-an-ip", "1.2.3.4.5", "1..2.3", ":::", "12345::g"] {
        assert_eq!(
            Address::parse(input),
            Err(AddrError::MalformedAddress {
                input: input.to_string()
            }),
            "expected {input:?} to be rejected"
        );
    }
}

#[test]
fn test_dotted_quad_forcing() {
    // V4: same as canonical text
    let v4 = Address::parse("8.8.4.4").unwrap();
    assert_eq!(v4.dotted_quad().unwrap(), "8.8.4.4");

    // small V6 value: renders, but stays a V6 address
    let small = Address::from_int(0x0102_0304, Some(Version::V6)).unwrap();
    assert_eq!(small.dotted_quad().unwrap(), "1.2.3.4");
    assert_eq!(small.version(), Version::V6);

    // 2^32 no longer fits
    let wide = Address::from_int(u32::MAX as u128 + 1, Some(Version::V6)).unwrap();
    assert_eq!(
        wide.dotted_quad(),
        Err(AddrError::NotRepresentable {
            value: u32::MAX as u128 + 1,
            width: 32
        })
    );
}

#[test]
fn test_navigation_ordering_consistency() {
    let addr = Address::parse("a900::1234").unwrap();
    let next = addr.next().unwrap();
    let prev = addr.previous().unwrap();

    assert_eq!(addr.try_compare(next).unwrap(), Ordering::Less);
    assert_eq!(addr.try_compare(prev).unwrap(), Ordering::Greater);
    assert_eq!(next.previous().unwrap(), addr);
    assert_eq!(prev.next().unwrap(), addr);
}

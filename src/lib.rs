//! # ipval
//!
//! Immutable IP address values unifying three representations — text,
//! unsigned integer, and packed big-endian binary — behind one entity with
//! total ordering and adjacency operations.
//!
//! ## Features
//!
//! - **Both families**: IPv4 (32-bit) and IPv6 (128-bit), each stored at
//!   its native width with no precision loss and no silent wrapping
//! - **Three views**: canonical text (dotted-quad / shortest `::`-compressed
//!   colon-hex), canonical integer, packed binary, plus a zero-padded
//!   bit-string rendering
//! - **Navigation**: `next()`/`previous()` with exact boundary detection at
//!   the edges of each address space
//! - **Ordering**: total order within a family; cross-family comparison is
//!   explicitly not defined (`PartialOrd` yields `None`)
//!
//! Purely computational: no I/O, no shared state. Values are `Copy` and
//! immutable, so they can be constructed, read, and compared from any
//! number of threads without coordination.
//!
//! ## Quick Start
//!
//! ```rust
//! use ipval::prelude::*;
//!
//! let addr = Address::parse("1.2.3.4")?;
//! assert_eq!(addr.version(), Version::V4);
//! assert_eq!(addr.to_int(), 0x01020304);
//! assert_eq!(addr.to_be_bytes().as_slice(), &[1, 2, 3, 4]);
//! assert_eq!(addr.next()?.to_string(), "1.2.3.5");
//!
//! let wide = Address::parse("a900::1234")?;
//! assert_eq!(wide.bit_width(), 128);
//! assert_eq!(wide.bit_string().len(), 128);
//! # Ok::<(), ipval::AddrError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------+
//! |                           ipval                             |
//! +-------------------------------------------------------------+
//! |  addr      - Address entity: constructors, views, next/prev |
//! |  codec     - text parsing and canonical rendering           |
//! |  wide      - AddrInt fixed-width arithmetic, bytes, bits    |
//! |  version   - family tags and width vocabulary               |
//! |  error     - error taxonomy                                 |
//! +-------------------------------------------------------------+
//! ```

pub mod addr;
pub mod codec;
pub mod error;
pub mod prelude;
pub mod version;
pub mod wide;

// Re-export commonly used types at crate root for convenience
pub use addr::Address;
pub use error::{AddrError, Result};
pub use version::Version;
pub use wide::AddrInt;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

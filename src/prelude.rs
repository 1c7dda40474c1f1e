//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```rust
//! use ipval::prelude::*;
//!
//! let addr = Address::parse("2001:db8::1").unwrap();
//! assert_eq!(addr.version(), Version::V6);
//! ```

pub use crate::addr::Address;
pub use crate::error::{AddrError, Result};
pub use crate::version::Version;
pub use crate::wide::AddrInt;

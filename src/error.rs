//! Error types for ipval.
//!
//! This module provides structured error types for all address operations:
//!
//! - [`AddrError`] - Error enum covering parsing, range, and navigation failures
//! - [`Result`] - Crate-wide result alias
//!
//! Every failure is a deterministic input-validation failure reported
//! synchronously to the caller; nothing is retried and nothing is silently
//! truncated. All errors implement `std::error::Error` and can be converted
//! to `anyhow::Error`.

use thiserror::Error;

use crate::version::Version;

/// Error type for address construction, conversion, and navigation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddrError {
    /// Input text matches neither address grammar, or does not match the
    /// grammar forced by an explicit version hint.
    #[error("malformed address: {input:?}")]
    MalformedAddress { input: String },

    /// Packed binary input is not exactly 4 or 16 bytes.
    #[error("invalid packed length: expected 4 or 16 bytes, got {len}")]
    InvalidLength { len: usize },

    /// Supplied integer exceeds the maximum for its version.
    #[error("integer {value} out of range for {version}")]
    OutOfRange { value: u128, version: Version },

    /// Value exceeds the numeric range of the requested representation.
    #[error("value {value} does not fit in {width} bits")]
    NotRepresentable { value: u128, width: u32 },

    /// Increment requested at the last address of the version's range.
    #[error("last address in {version} range")]
    RangeOverflow { version: Version },

    /// Decrement requested at the first address of the version's range.
    #[error("first address in {version} range")]
    RangeUnderflow { version: Version },

    /// Comparison attempted between addresses of different versions.
    #[error("cannot compare {left} address with {right} address")]
    IncomparableVersions { left: Version, right: Version },
}

/// Result type alias using our error type.
pub type Result<T> = std::result::Result<T, AddrError>;

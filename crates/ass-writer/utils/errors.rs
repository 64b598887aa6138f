//! Error type for ASS script construction helpers
//!
//! Rendering a script never fails: every value that type-checks renders to
//! some text. Errors only come from helpers that accept loosely typed input,
//! such as parsing a `H:MM:SS.CC` timestamp or mapping a raw numpad code back
//! to an [`Alignment`](crate::script::Alignment).
//!
//! # Examples
//!
//! ```rust
//! use ass_writer::utils::errors::{invalid_time, WriterError};
//!
//! let err = invalid_time("1:23", "missing seconds");
//! assert!(matches!(err, WriterError::InvalidTime(_)));
//! assert!(err.is_recoverable());
//! ```

use alloc::{format, string::String};
use core::fmt;

use thiserror::Error;

/// Main error type for ass-writer operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WriterError {
    /// Time format or range errors
    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    /// Numeric code outside a fixed code table
    #[error("Invalid numeric value: {0}")]
    InvalidNumeric(String),
}

impl WriterError {
    /// Check if the caller can retry with corrected input
    ///
    /// All current variants describe bad input rather than a broken
    /// invariant, so they are all recoverable.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::InvalidTime(_) | Self::InvalidNumeric(_) => true,
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = core::result::Result<T, WriterError>;

/// Create time format error with time and reason
///
/// # Arguments
///
/// * `time` - The invalid time value or string
/// * `reason` - Description of the format issue
pub fn invalid_time<T: fmt::Display>(time: T, reason: &str) -> WriterError {
    WriterError::InvalidTime(format!("'{time}': {reason}"))
}

/// Create numeric error with value and reason
///
/// # Arguments
///
/// * `value` - The value that has no mapping
/// * `reason` - Description of why it was rejected
pub fn invalid_numeric<T: fmt::Display>(value: T, reason: &str) -> WriterError {
    WriterError::InvalidNumeric(format!("'{value}': {reason}"))
}

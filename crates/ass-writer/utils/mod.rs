//! Utility types shared across the script model
//!
//! Holds the crate error type and the [`Timestamp`] clock used by dialogue
//! lines.

pub mod errors;
pub mod time;

pub use errors::WriterError;
pub use time::Timestamp;

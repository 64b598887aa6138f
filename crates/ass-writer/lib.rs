//! # ASS Writer
//!
//! Builds Advanced `SubStation` Alpha (`.ass`) subtitle scripts in memory and
//! renders them to the exact text layout the format expects: section
//! headers, `Format:` lists, commented header fields and `Dialogue:` lines.
//!
//! ## Features
//!
//! - **Typed model**: enums for alignment, border style, wrap style and effects
//! - **Builders**: every section starts from the standard defaults
//! - **Optional fields**: absent header fields vanish from the output entirely
//! - **`no_std`**: only `alloc` is required with default features off
//! - **Serde**: optional, so sections can be loaded as configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use ass_writer::{Alignment, Dialogue, Document, EventSection, ScriptInfo, Style, Timestamp};
//! use core::time::Duration;
//!
//! let style = Style::builder()
//!     .fontsize(12)
//!     .primary_colour("&H000000FF")
//!     .alignment(Alignment::RightBottom)
//!     .build();
//!
//! let events: EventSection = (0..5u64)
//!     .map(|i| {
//!         Dialogue::builder()
//!             .span(Timestamp::from_millis(i * 200), Duration::from_millis(200))
//!             .text(format!("test-item-{i}"))
//!             .build()
//!     })
//!     .collect();
//!
//! let doc = Document::new(ScriptInfo::default(), style, events);
//! let text = doc.to_ass_string();
//!
//! assert!(text.starts_with("[Script Info]\n"));
//! assert!(text.contains("Dialogue: 0,0:00:00.80,0:00:01.00,Default,,0,0,0,,test-item-4\n"));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(clippy::all)]
#![deny(unsafe_code)]

extern crate alloc;

pub mod script;
pub mod utils;

pub use script::{
    Alignment, BorderStyle, Collisions, Dialogue, DialogueBuilder, Document, Effect,
    EventSection, ScriptInfo, ScriptInfoBuilder, Style, StyleBuilder, WrapStyle,
};
pub use utils::{Timestamp, WriterError};

/// Crate version for runtime compatibility checks
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type alias for convenience
pub type Result<T> = core::result::Result<T, WriterError>;

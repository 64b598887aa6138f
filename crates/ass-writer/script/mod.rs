//! In-memory ASS script model and its text rendering
//!
//! A [`Document`] holds one of each section. Every section renders through
//! `to_ass_string()`, and rendering never fails or mutates the model, so a
//! document can be rendered any number of times with identical output.
//!
//! # Example
//!
//! ```rust
//! use ass_writer::script::{Alignment, Dialogue, Document, EventSection, ScriptInfo, Style};
//! use ass_writer::Timestamp;
//! use core::time::Duration;
//!
//! let style = Style::builder().alignment(Alignment::MidTop).build();
//! let events: EventSection = (0..2u64)
//!     .map(|i| {
//!         Dialogue::builder()
//!             .span(Timestamp::from_millis(i * 1_000), Duration::from_secs(1))
//!             .text("Line")
//!             .build()
//!     })
//!     .collect();
//!
//! let doc = Document::new(ScriptInfo::default(), style, events);
//! assert!(doc.to_ass_string().contains("Dialogue: 0,0:00:01.00,0:00:02.00,Default,,0,0,0,,Line\n"));
//! ```

pub mod document;
pub mod effect;
pub mod event;
pub mod field;
pub mod script_info;
pub mod style;

pub use document::Document;
pub use effect::Effect;
pub use event::{Dialogue, DialogueBuilder, EventSection, EVENT_FORMAT};
pub use field::{FieldValue, NamedField, OptionalText};
pub use script_info::{Collisions, ScriptInfo, ScriptInfoBuilder, WrapStyle};
pub use style::{Alignment, BorderStyle, Style, StyleBuilder};

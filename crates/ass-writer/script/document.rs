//! Complete script: one `[Script Info]`, one `[V4+ Styles]` and an optional
//! `[Events]` section

use alloc::{format, string::String};
use core::fmt;

use super::{event::EventSection, script_info::ScriptInfo, style::Style};

/// Immutable ASS script ready to render
///
/// # Examples
///
/// ```rust
/// use ass_writer::{Dialogue, Document, EventSection, ScriptInfo, Style};
///
/// let events: EventSection = [Dialogue::builder().text("Hi").build()].into_iter().collect();
/// let doc = Document::new(ScriptInfo::default(), Style::default(), events);
///
/// let text = doc.to_ass_string();
/// assert!(text.starts_with("[Script Info]\n"));
/// assert!(text.ends_with("Dialogue: 0,,,Default,,0,0,0,,Hi\n\n"));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "PascalCase"))]
pub struct Document {
    script_info: ScriptInfo,
    style: Style,
    #[cfg_attr(feature = "serde", serde(default))]
    events: Option<EventSection>,
}

impl Document {
    /// Assemble a document; pass `None` for a script without events
    #[must_use]
    pub fn new(script_info: ScriptInfo, style: Style, events: impl Into<Option<EventSection>>) -> Self {
        Self {
            script_info,
            style,
            events: events.into(),
        }
    }

    /// Script metadata section
    #[must_use]
    pub const fn script_info(&self) -> &ScriptInfo {
        &self.script_info
    }

    /// Style section
    #[must_use]
    pub const fn style(&self) -> &Style {
        &self.style
    }

    /// Event section, if any
    #[must_use]
    pub const fn events(&self) -> Option<&EventSection> {
        self.events.as_ref()
    }

    /// Render the full script text
    ///
    /// Sections are separated by a blank line and the text ends with an
    /// extra newline. A missing event section leaves an empty slot.
    #[must_use]
    pub fn to_ass_string(&self) -> String {
        let info = self.script_info.to_ass_string();
        let style = self.style.to_ass_string();
        let events = self
            .events
            .as_ref()
            .map(EventSection::to_ass_string)
            .unwrap_or_default();

        log::debug!(
            "rendered document with {} dialogue lines",
            self.events.as_ref().map_or(0, EventSection::len)
        );

        format!("{info}\n{style}\n{events}\n")
    }

    /// Write the rendered script into any text sink
    ///
    /// # Errors
    ///
    /// Returns the sink's error if a write fails.
    pub fn write_to<W: fmt::Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        out.write_str(&self.to_ass_string())
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

//! `[Events]` section and its dialogue lines
//!
//! Unlike the header sections, a dialogue line never omits a column: every
//! line carries exactly ten comma-separated slots, and an absent value only
//! leaves its slot empty.

use alloc::{
    format,
    string::{String, ToString},
    vec::{self, Vec},
};
use core::{slice, time::Duration};

use super::{effect::Effect, field::OptionalText};
use crate::utils::Timestamp;

/// Column order of every `Dialogue:` line
pub const EVENT_FORMAT: &str =
    "Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text";

/// Single timed subtitle cue
///
/// # Examples
///
/// ```rust
/// use ass_writer::{Dialogue, Timestamp};
///
/// let line = Dialogue::builder()
///     .start(Timestamp::from_millis(1_500))
///     .end(Timestamp::from_millis(3_250))
///     .text("Hello\\Nworld")
///     .build();
///
/// assert_eq!(
///     line.to_ass_string(),
///     "Dialogue: 0,0:00:01.50,0:00:03.25,Default,,0,0,0,,Hello\\Nworld"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "PascalCase"))]
pub struct Dialogue {
    layer: i32,
    start: Option<Timestamp>,
    end: Option<Timestamp>,
    style: String,
    name: String,
    margin_l: i32,
    margin_r: i32,
    margin_v: i32,
    effect: Effect,
    text: String,
}

impl Default for Dialogue {
    fn default() -> Self {
        Self {
            layer: 0,
            start: None,
            end: None,
            style: String::from("Default"),
            name: String::new(),
            margin_l: 0,
            margin_r: 0,
            margin_v: 0,
            effect: Effect::Undefined,
            text: String::new(),
        }
    }
}

impl Dialogue {
    /// Start a dialogue line with default values
    #[must_use]
    pub fn builder() -> DialogueBuilder {
        DialogueBuilder::default()
    }

    /// Z-order layer
    #[must_use]
    pub const fn layer(&self) -> i32 {
        self.layer
    }

    /// Start time
    #[must_use]
    pub const fn start(&self) -> Option<Timestamp> {
        self.start
    }

    /// End time
    #[must_use]
    pub const fn end(&self) -> Option<Timestamp> {
        self.end
    }

    /// Referenced style name
    #[must_use]
    pub fn style(&self) -> &str {
        &self.style
    }

    /// Speaker name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Left margin override
    #[must_use]
    pub const fn margin_l(&self) -> i32 {
        self.margin_l
    }

    /// Right margin override
    #[must_use]
    pub const fn margin_r(&self) -> i32 {
        self.margin_r
    }

    /// Vertical margin override
    #[must_use]
    pub const fn margin_v(&self) -> i32 {
        self.margin_v
    }

    /// Transition effect
    #[must_use]
    pub const fn effect(&self) -> Effect {
        self.effect
    }

    /// Line text, override tags and `\N` breaks included
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Time on screen
    ///
    /// `None` when either bound is absent or the end precedes the start.
    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        self.end?.checked_duration_since(self.start?)
    }

    /// Render the `Dialogue:` line without a line ending
    #[must_use]
    pub fn to_ass_string(&self) -> String {
        let start = self.start.map(|t| t.to_string()).unwrap_or_default();
        let end = self.end.map(|t| t.to_string()).unwrap_or_default();

        format!(
            "Dialogue: {},{start},{end},{},{},{},{},{},{},{}",
            self.layer,
            self.style,
            self.name,
            self.margin_l,
            self.margin_r,
            self.margin_v,
            self.effect,
            self.text
        )
    }
}

/// Builder for [`Dialogue`]
#[derive(Debug, Clone, Default)]
pub struct DialogueBuilder {
    dialogue: Dialogue,
}

impl DialogueBuilder {
    /// Set layer
    #[must_use]
    pub const fn layer(mut self, layer: i32) -> Self {
        self.dialogue.layer = layer;
        self
    }

    /// Set start time, `None` leaves the slot empty
    #[must_use]
    pub fn start(mut self, start: impl Into<Option<Timestamp>>) -> Self {
        self.dialogue.start = start.into();
        self
    }

    /// Set end time, `None` leaves the slot empty
    #[must_use]
    pub fn end(mut self, end: impl Into<Option<Timestamp>>) -> Self {
        self.dialogue.end = end.into();
        self
    }

    /// Set start and end from a start time and a length
    #[must_use]
    pub fn span(mut self, start: Timestamp, length: Duration) -> Self {
        self.dialogue.start = Some(start);
        self.dialogue.end = Some(start + length);
        self
    }

    /// Set referenced style name
    #[must_use]
    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.dialogue.style = style.into();
        self
    }

    /// Set speaker name
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.dialogue.name = name.into();
        self
    }

    /// Set all three margins
    #[must_use]
    pub const fn margins(mut self, left: i32, right: i32, vertical: i32) -> Self {
        self.dialogue.margin_l = left;
        self.dialogue.margin_r = right;
        self.dialogue.margin_v = vertical;
        self
    }

    /// Set transition effect
    #[must_use]
    pub const fn effect(mut self, effect: Effect) -> Self {
        self.dialogue.effect = effect;
        self
    }

    /// Set line text; `None` clears it
    #[must_use]
    pub fn text(mut self, text: impl OptionalText) -> Self {
        self.dialogue.text = text.into_optional_text().unwrap_or_default();
        self
    }

    /// Finish building
    #[must_use]
    pub fn build(self) -> Dialogue {
        self.dialogue
    }
}

/// Ordered dialogue lines rendered as the `[Events]` section
///
/// Insertion order is playback order. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EventSection {
    dialogues: Vec<Dialogue>,
}

impl EventSection {
    /// Create a section from dialogue lines in playback order
    #[must_use]
    pub const fn new(dialogues: Vec<Dialogue>) -> Self {
        Self { dialogues }
    }

    /// Number of dialogue lines
    #[must_use]
    pub fn len(&self) -> usize {
        self.dialogues.len()
    }

    /// Whether the section has no dialogue lines
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dialogues.is_empty()
    }

    /// Iterate dialogue lines in playback order
    pub fn iter(&self) -> slice::Iter<'_, Dialogue> {
        self.dialogues.iter()
    }

    /// Dialogue lines as a slice
    #[must_use]
    pub fn dialogues(&self) -> &[Dialogue] {
        &self.dialogues
    }

    /// Render the `[Events]` section
    ///
    /// Each dialogue line is terminated by a newline; an empty section is
    /// just the header and format line.
    #[must_use]
    pub fn to_ass_string(&self) -> String {
        log::trace!("rendering [Events] with {} dialogue lines", self.dialogues.len());

        let mut out = format!("[Events]\nFormat: {EVENT_FORMAT}\n");
        for dialogue in &self.dialogues {
            out.push_str(&dialogue.to_ass_string());
            out.push('\n');
        }
        out
    }
}

impl From<Vec<Dialogue>> for EventSection {
    fn from(dialogues: Vec<Dialogue>) -> Self {
        Self::new(dialogues)
    }
}

impl FromIterator<Dialogue> for EventSection {
    fn from_iter<I: IntoIterator<Item = Dialogue>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for EventSection {
    type Item = Dialogue;
    type IntoIter = vec::IntoIter<Dialogue>;

    fn into_iter(self) -> Self::IntoIter {
        self.dialogues.into_iter()
    }
}

impl<'a> IntoIterator for &'a EventSection {
    type Item = &'a Dialogue;
    type IntoIter = slice::Iter<'a, Dialogue>;

    fn into_iter(self) -> Self::IntoIter {
        self.dialogues.iter()
    }
}

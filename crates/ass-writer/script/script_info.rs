//! `[Script Info]` section: script-wide metadata
//!
//! Every field is optional. `ScriptType` and `WrapStyle` default to
//! `V4.00+` and smart wrapping; everything else starts absent and is left
//! out of the output, comment block included, until set.

use alloc::{format, string::String, vec::Vec};
use core::fmt;

use super::field::{format_timer, text_of, FieldDecl, FieldValue, OptionalText};
use crate::utils::errors::{invalid_numeric, WriterError};

/// Collision handling policy for overlapping subtitles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Collisions {
    /// Stack subtitles as close to the vertical margin as possible
    Normal,
    /// Shift earlier subtitles upwards to make room for later ones
    Reverse,
    /// No policy; renders empty, which drops the field entirely
    Undefined,
}

impl Collisions {
    /// Text written after `Collisions: `
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Reverse => "Reverse",
            Self::Undefined => "",
        }
    }

    /// Field text, `None` for [`Collisions::Undefined`]
    fn field_text(self) -> Option<String> {
        match self {
            Self::Undefined => None,
            other => Some(String::from(other.as_str())),
        }
    }
}

impl fmt::Display for Collisions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Default line wrapping policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WrapStyle {
    /// Smart wrapping, lines are evenly broken
    #[default]
    Smart,
    /// End-of-line word wrapping, only `\N` breaks
    EndOfLine,
    /// No word wrapping, `\n` and `\N` both break
    NoWrap,
    /// Smart wrapping with the lower line wider
    SmartLowerWider,
}

impl WrapStyle {
    /// Fixed `WrapStyle` code
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Smart => 0,
            Self::EndOfLine => 1,
            Self::NoWrap => 2,
            Self::SmartLowerWider => 3,
        }
    }
}

impl TryFrom<u8> for WrapStyle {
    type Error = WriterError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Smart),
            1 => Ok(Self::EndOfLine),
            2 => Ok(Self::NoWrap),
            3 => Ok(Self::SmartLowerWider),
            _ => Err(invalid_numeric(code, "wrap style must be 0-3")),
        }
    }
}

impl FieldValue for WrapStyle {
    fn to_field_text(&self) -> String {
        format!("{}", self.code())
    }
}

impl fmt::Display for WrapStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Script Info section with document-level metadata
///
/// Immutable once built. Use [`ScriptInfo::builder`] to override the
/// defaults.
///
/// # Examples
///
/// ```rust
/// use ass_writer::ScriptInfo;
///
/// let info = ScriptInfo::builder()
///     .title("Episode 1")
///     .play_res_x(1920)
///     .wrap_style(None)
///     .build();
///
/// let text = info.to_ass_string();
/// assert!(text.starts_with("[Script Info]\n"));
/// assert!(text.contains("Title: Episode 1\n"));
/// assert!(text.contains("PlayResX: 1920\n"));
/// assert!(!text.contains("WrapStyle"));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "PascalCase"))]
pub struct ScriptInfo {
    title: Option<String>,
    original_script: Option<String>,
    original_translation: Option<String>,
    original_editing: Option<String>,
    original_timing: Option<String>,
    synch_point: Option<String>,
    script_updated_by: Option<String>,
    update_details: Option<String>,
    script_type: Option<String>,
    collisions: Option<Collisions>,
    play_res_x: Option<i32>,
    play_res_y: Option<i32>,
    play_depth: Option<String>,
    timer: Option<f32>,
    wrap_style: Option<WrapStyle>,
}

impl Default for ScriptInfo {
    fn default() -> Self {
        Self {
            title: None,
            original_script: None,
            original_translation: None,
            original_editing: None,
            original_timing: None,
            synch_point: None,
            script_updated_by: None,
            update_details: None,
            script_type: Some(String::from("V4.00+")),
            collisions: None,
            play_res_x: None,
            play_res_y: None,
            play_depth: None,
            timer: None,
            wrap_style: Some(WrapStyle::Smart),
        }
    }
}

/// Canonical `[Script Info]` field order with the format's field documentation
static SCRIPT_INFO_FIELDS: &[FieldDecl<ScriptInfo>] = &[
    FieldDecl {
        name: "Title",
        comments: &["This is a description of the script. If the original author(s) did not provide this information then <untitled> is automatically substituted."],
        value: |info: &ScriptInfo| info.title.clone(),
    },
    FieldDecl {
        name: "OriginalScript",
        comments: &["The original author(s) of the script. If the original author(s) did not provide this information then <unknown> is automatically substituted."],
        value: |info: &ScriptInfo| info.original_script.clone(),
    },
    FieldDecl {
        name: "OriginalTranslation",
        comments: &["(optional) The original translator of the dialogue. This entry does not appear if no information was entered by the author."],
        value: |info: &ScriptInfo| info.original_translation.clone(),
    },
    FieldDecl {
        name: "OriginalEditing",
        comments: &[
            "(optional) The original script editor(s), typically whoever took the raw translation and turned it into idiomatic english and reworded for readability.",
            "This entry does not appear if no information was entered by the author.",
        ],
        value: |info: &ScriptInfo| info.original_editing.clone(),
    },
    FieldDecl {
        name: "OriginalTiming",
        comments: &["(optional) Whoever timed the original script. This entry does not appear if no information was entered by the author."],
        value: |info: &ScriptInfo| info.original_timing.clone(),
    },
    FieldDecl {
        name: "SynchPoint",
        comments: &[
            "(optional) Description of where in the video the script should begin playback.",
            "This entry does not appear if no information was entered by the author.",
        ],
        value: |info: &ScriptInfo| info.synch_point.clone(),
    },
    FieldDecl {
        name: "ScriptUpdatedBy",
        comments: &[
            "(optional) Names of any other subtitling groups who edited the original script.",
            "This entry does not appear if subsequent editors did not enter the information.",
        ],
        value: |info: &ScriptInfo| info.script_updated_by.clone(),
    },
    FieldDecl {
        name: "UpdateDetails",
        comments: &[
            "The details of any updates to the original script - made by other subtitling groups.",
            "This entry does not appear if subsequent editors did not enter any information.",
        ],
        value: |info: &ScriptInfo| info.update_details.clone(),
    },
    FieldDecl {
        name: "ScriptType",
        comments: &[
            "This is the SSA script format version eg. \"V4.00\".",
            "It is used by SSA to give a warning if you are using a version of SSA older than the version that created the script.",
            "ASS version is \u{201c}V4.00+\u{201d}.",
        ],
        value: |info: &ScriptInfo| info.script_type.clone(),
    },
    FieldDecl {
        name: "Collisions",
        comments: &[],
        value: |info: &ScriptInfo| info.collisions.and_then(Collisions::field_text),
    },
    FieldDecl {
        name: "PlayResX",
        comments: &[
            "This is the height of the screen used by the script's author(s) when playing the script.",
            "SSA v4 will automatically select the nearest enabled setting, if you are using Directdraw playback.",
        ],
        value: |info: &ScriptInfo| text_of(info.play_res_x.as_ref()),
    },
    FieldDecl {
        name: "PlayResY",
        comments: &[
            "This is the width of the screen used by the script's author(s) when playing the script.",
            "SSA will automatically select the nearest enabled, setting if you are using Directdraw playback.",
        ],
        value: |info: &ScriptInfo| text_of(info.play_res_y.as_ref()),
    },
    FieldDecl {
        name: "PlayDepth",
        comments: &["This is the colour depth used by the script's author(s) when playing the script. SSA will automatically select the nearest enabled setting if you are using Directdraw playback."],
        value: |info: &ScriptInfo| info.play_depth.clone(),
    },
    FieldDecl {
        name: "Timer",
        comments: &[
            "This is the Timer Speed for the script, as a percentage. eg. \"100.0000\" is exactly 100%. It has four digits following the decimal point.",
            "The timer speed is a time multiplier applied to SSA's clock to stretch or compress the duration of a script.",
            "A speed greater than 100% will reduce the overall duration, and means that subtitles will progressively appear sooner and sooner.",
            "A speed less than 100% will increase the overall duration of the script means subtitles will progressively appear later and later (like a positive ramp time).",
            "The stretching or compressing only occurs during script playback - this value does not change the actual timings for each event listed in the script.",
            "Check the SSA user guide if you want to know why \"Timer Speed\" is more powerful than \"Ramp Time\", even though they both achieve the same result.",
        ],
        value: |info: &ScriptInfo| info.timer.map(format_timer),
    },
    FieldDecl {
        name: "WrapStyle",
        comments: &[
            "Defines the default wrapping style.",
            "0: smart wrapping, lines are evenly broken",
            "1: end-of-line word wrapping, only \\N breaks",
            "2: no word wrapping, \\n \\N both breaks",
            "3: same as 0, but lower line gets wider.",
        ],
        value: |info: &ScriptInfo| text_of(info.wrap_style.as_ref()),
    },
];

impl ScriptInfo {
    /// Start from the default Script Info and override fields
    #[must_use]
    pub fn builder() -> ScriptInfoBuilder {
        ScriptInfoBuilder::default()
    }

    /// Script title
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Original author(s)
    #[must_use]
    pub fn original_script(&self) -> Option<&str> {
        self.original_script.as_deref()
    }

    /// Original translator
    #[must_use]
    pub fn original_translation(&self) -> Option<&str> {
        self.original_translation.as_deref()
    }

    /// Original editor(s)
    #[must_use]
    pub fn original_editing(&self) -> Option<&str> {
        self.original_editing.as_deref()
    }

    /// Original timer
    #[must_use]
    pub fn original_timing(&self) -> Option<&str> {
        self.original_timing.as_deref()
    }

    /// Where in the video playback should begin
    #[must_use]
    pub fn synch_point(&self) -> Option<&str> {
        self.synch_point.as_deref()
    }

    /// Groups that edited the script afterwards
    #[must_use]
    pub fn script_updated_by(&self) -> Option<&str> {
        self.script_updated_by.as_deref()
    }

    /// Details of later updates
    #[must_use]
    pub fn update_details(&self) -> Option<&str> {
        self.update_details.as_deref()
    }

    /// Script format version, `V4.00+` by default
    #[must_use]
    pub fn script_type(&self) -> Option<&str> {
        self.script_type.as_deref()
    }

    /// Collision policy
    #[must_use]
    pub const fn collisions(&self) -> Option<Collisions> {
        self.collisions
    }

    /// Play resolution width
    #[must_use]
    pub const fn play_res_x(&self) -> Option<i32> {
        self.play_res_x
    }

    /// Play resolution height
    #[must_use]
    pub const fn play_res_y(&self) -> Option<i32> {
        self.play_res_y
    }

    /// Colour depth
    #[must_use]
    pub fn play_depth(&self) -> Option<&str> {
        self.play_depth.as_deref()
    }

    /// Timer speed percentage
    #[must_use]
    pub const fn timer(&self) -> Option<f32> {
        self.timer
    }

    /// Default wrap style, smart wrapping by default
    #[must_use]
    pub const fn wrap_style(&self) -> Option<WrapStyle> {
        self.wrap_style
    }

    /// Render the `[Script Info]` section
    ///
    /// Present fields are emitted in canonical order and joined by `;\n`.
    /// The section ends with a newline.
    #[must_use]
    pub fn to_ass_string(&self) -> String {
        let blocks: Vec<String> = SCRIPT_INFO_FIELDS
            .iter()
            .map(|decl| decl.bind(self).render())
            .filter(|block| !block.is_empty())
            .collect();

        log::trace!("rendering [Script Info] with {} fields", blocks.len());

        format!("[Script Info]\n{}\n", blocks.join(";\n"))
    }
}

/// Builder layering overrides on top of [`ScriptInfo::default`]
///
/// Text setters accept `&str`, `String`, or `None` to clear a default.
/// Numeric and enum setters accept the value or `None`.
#[derive(Debug, Clone, Default)]
pub struct ScriptInfoBuilder {
    info: ScriptInfo,
}

impl ScriptInfoBuilder {
    /// Set script title
    #[must_use]
    pub fn title(mut self, title: impl OptionalText) -> Self {
        self.info.title = title.into_optional_text();
        self
    }

    /// Set original author(s)
    #[must_use]
    pub fn original_script(mut self, value: impl OptionalText) -> Self {
        self.info.original_script = value.into_optional_text();
        self
    }

    /// Set original translator
    #[must_use]
    pub fn original_translation(mut self, value: impl OptionalText) -> Self {
        self.info.original_translation = value.into_optional_text();
        self
    }

    /// Set original editor(s)
    #[must_use]
    pub fn original_editing(mut self, value: impl OptionalText) -> Self {
        self.info.original_editing = value.into_optional_text();
        self
    }

    /// Set original timer
    #[must_use]
    pub fn original_timing(mut self, value: impl OptionalText) -> Self {
        self.info.original_timing = value.into_optional_text();
        self
    }

    /// Set synch point description
    #[must_use]
    pub fn synch_point(mut self, value: impl OptionalText) -> Self {
        self.info.synch_point = value.into_optional_text();
        self
    }

    /// Set groups that updated the script
    #[must_use]
    pub fn script_updated_by(mut self, value: impl OptionalText) -> Self {
        self.info.script_updated_by = value.into_optional_text();
        self
    }

    /// Set update details
    #[must_use]
    pub fn update_details(mut self, value: impl OptionalText) -> Self {
        self.info.update_details = value.into_optional_text();
        self
    }

    /// Set script format version
    #[must_use]
    pub fn script_type(mut self, value: impl OptionalText) -> Self {
        self.info.script_type = value.into_optional_text();
        self
    }

    /// Set collision policy
    #[must_use]
    pub fn collisions(mut self, collisions: impl Into<Option<Collisions>>) -> Self {
        self.info.collisions = collisions.into();
        self
    }

    /// Set play resolution width
    #[must_use]
    pub fn play_res_x(mut self, width: impl Into<Option<i32>>) -> Self {
        self.info.play_res_x = width.into();
        self
    }

    /// Set play resolution height
    #[must_use]
    pub fn play_res_y(mut self, height: impl Into<Option<i32>>) -> Self {
        self.info.play_res_y = height.into();
        self
    }

    /// Set colour depth
    #[must_use]
    pub fn play_depth(mut self, depth: impl OptionalText) -> Self {
        self.info.play_depth = depth.into_optional_text();
        self
    }

    /// Set timer speed percentage
    #[must_use]
    pub fn timer(mut self, timer: impl Into<Option<f32>>) -> Self {
        self.info.timer = timer.into();
        self
    }

    /// Set default wrap style
    #[must_use]
    pub fn wrap_style(mut self, wrap_style: impl Into<Option<WrapStyle>>) -> Self {
        self.info.wrap_style = wrap_style.into();
        self
    }

    /// Finish building
    #[must_use]
    pub fn build(self) -> ScriptInfo {
        self.info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCRIPT_TYPE_BLOCK: &str = "; This is the SSA script format version eg. \"V4.00\".\n\
        ; It is used by SSA to give a warning if you are using a version of SSA older than the version that created the script.\n\
        ; ASS version is \u{201c}V4.00+\u{201d}.\n\
        ScriptType: V4.00+\n";

    const WRAP_STYLE_BLOCK: &str = "; Defines the default wrapping style.\n\
        ; 0: smart wrapping, lines are evenly broken\n\
        ; 1: end-of-line word wrapping, only \\N breaks\n\
        ; 2: no word wrapping, \\n \\N both breaks\n\
        ; 3: same as 0, but lower line gets wider.\n\
        WrapStyle: 0\n";

    #[test]
    fn default_renders_script_type_and_wrap_style() {
        let expected = format!("[Script Info]\n{SCRIPT_TYPE_BLOCK};\n{WRAP_STYLE_BLOCK}\n");
        assert_eq!(ScriptInfo::default().to_ass_string(), expected);
    }

    #[test]
    fn all_absent_renders_header_only() {
        let info = ScriptInfo::builder()
            .script_type(None)
            .wrap_style(None)
            .build();
        assert_eq!(info.to_ass_string(), "[Script Info]\n\n");
    }

    #[test]
    fn collisions_has_no_comment_block() {
        let info = ScriptInfo::builder()
            .script_type(None)
            .wrap_style(None)
            .collisions(Collisions::Reverse)
            .build();
        assert_eq!(info.to_ass_string(), "[Script Info]\nCollisions: Reverse\n");
    }

    #[test]
    fn undefined_collisions_disappear() {
        let undefined = ScriptInfo::builder()
            .collisions(Collisions::Undefined)
            .build();
        assert_eq!(undefined.to_ass_string(), ScriptInfo::default().to_ass_string());
        assert!(!undefined.to_ass_string().contains("Collisions"));
    }

    #[test]
    fn fields_follow_canonical_order() {
        let info = ScriptInfo::builder()
            .wrap_style(WrapStyle::NoWrap)
            .timer(100.0_f32)
            .title("Title text")
            .play_res_y(1080)
            .play_res_x(1920)
            .collisions(Collisions::Normal)
            .build();
        let text = info.to_ass_string();

        let order = [
            "Title: ",
            "ScriptType: ",
            "Collisions: ",
            "PlayResX: ",
            "PlayResY: ",
            "Timer: ",
            "WrapStyle: ",
        ];
        let positions: Vec<usize> = order
            .iter()
            .map(|needle| text.find(needle).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        assert!(text.contains("Timer: 100\n"));
        assert!(text.contains("WrapStyle: 2\n"));
    }

    #[test]
    fn bare_field_joins_with_separator() {
        let info = ScriptInfo::builder()
            .script_type(None)
            .collisions(Collisions::Normal)
            .build();
        let expected = format!("[Script Info]\nCollisions: Normal;\n{WRAP_STYLE_BLOCK}\n");
        assert_eq!(info.to_ass_string(), expected);
    }

    #[test]
    fn multi_line_comments_are_split() {
        let info = ScriptInfo::builder()
            .script_type(None)
            .wrap_style(None)
            .synch_point("Opening frame")
            .build();
        assert_eq!(
            info.to_ass_string(),
            "[Script Info]\n\
             ; (optional) Description of where in the video the script should begin playback.\n\
             ; This entry does not appear if no information was entered by the author.\n\
             SynchPoint: Opening frame\n\n"
        );
    }

    #[test]
    fn timer_format() {
        let info = ScriptInfo::builder().timer(99.875_f32).build();
        assert!(info.to_ass_string().contains("\nTimer: 99.875\n"));
    }

    #[test]
    fn wrap_style_codes() {
        assert_eq!(WrapStyle::Smart.code(), 0);
        assert_eq!(WrapStyle::EndOfLine.code(), 1);
        assert_eq!(WrapStyle::NoWrap.code(), 2);
        assert_eq!(WrapStyle::SmartLowerWider.code(), 3);

        for code in 0u8..4 {
            assert_eq!(WrapStyle::try_from(code).unwrap().code(), code);
        }
        assert!(WrapStyle::try_from(4u8).is_err());
    }

    #[test]
    fn accessors_reflect_builder() {
        let info = ScriptInfo::builder()
            .title("T")
            .original_script("Author")
            .play_depth("32")
            .build();
        assert_eq!(info.title(), Some("T"));
        assert_eq!(info.original_script(), Some("Author"));
        assert_eq!(info.play_depth(), Some("32"));
        assert_eq!(info.script_type(), Some("V4.00+"));
        assert_eq!(info.wrap_style(), Some(WrapStyle::Smart));
        assert_eq!(info.collisions(), None);
    }

    #[test]
    fn rendering_is_repeatable() {
        let info = ScriptInfo::builder().title("Again").build();
        assert_eq!(info.to_ass_string(), info.to_ass_string());
    }
}

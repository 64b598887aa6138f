//! `[V4+ Styles]` section: the script's single text-appearance style
//!
//! Every field has a default, so a freshly built style renders the full
//! 23-column `Format:`/`Style:` pair. Clearing a field to absent drops it from
//! both lines together so the two lists stay positionally aligned.

use alloc::{format, string::String, vec::Vec};
use core::fmt;

use super::field::{text_of, FieldDecl, FieldValue, OptionalText};
use crate::utils::errors::{invalid_numeric, WriterError};

/// Border style of the rendered text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BorderStyle {
    /// Outline plus drop shadow
    #[default]
    OutlineAndDropShadow,
    /// Opaque box behind the text
    OpaqueBox,
}

impl BorderStyle {
    /// Fixed `BorderStyle` code
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::OutlineAndDropShadow => 1,
            Self::OpaqueBox => 3,
        }
    }
}

impl TryFrom<u8> for BorderStyle {
    type Error = WriterError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::OutlineAndDropShadow),
            3 => Ok(Self::OpaqueBox),
            _ => Err(invalid_numeric(code, "border style must be 1 or 3")),
        }
    }
}

impl FieldValue for BorderStyle {
    fn to_field_text(&self) -> String {
        format!("{}", self.code())
    }
}

impl fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Text alignment in numpad layout
///
/// ```text
/// 7 8 9
/// 4 5 6
/// 1 2 3
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Alignment {
    /// Top left
    LeftTop,
    /// Top centre
    MidTop,
    /// Top right
    RightTop,
    /// Middle left
    LeftCenter,
    /// Middle centre
    MidCenter,
    /// Middle right
    RightCenter,
    /// Bottom left
    LeftBottom,
    /// Bottom centre
    #[default]
    MidBottom,
    /// Bottom right
    RightBottom,
}

impl Alignment {
    /// Fixed numpad code
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::LeftTop => 7,
            Self::MidTop => 8,
            Self::RightTop => 9,
            Self::LeftCenter => 4,
            Self::MidCenter => 5,
            Self::RightCenter => 6,
            Self::LeftBottom => 1,
            Self::MidBottom => 2,
            Self::RightBottom => 3,
        }
    }
}

impl TryFrom<u8> for Alignment {
    type Error = WriterError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            7 => Ok(Self::LeftTop),
            8 => Ok(Self::MidTop),
            9 => Ok(Self::RightTop),
            4 => Ok(Self::LeftCenter),
            5 => Ok(Self::MidCenter),
            6 => Ok(Self::RightCenter),
            1 => Ok(Self::LeftBottom),
            2 => Ok(Self::MidBottom),
            3 => Ok(Self::RightBottom),
            _ => Err(invalid_numeric(code, "alignment must be a numpad code 1-9")),
        }
    }
}

impl FieldValue for Alignment {
    fn to_field_text(&self) -> String {
        format!("{}", self.code())
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Style definition rendered into the `[V4+ Styles]` section
///
/// Colours are opaque `&HAABBGGRR` / `&HBBGGRR` strings and are written
/// exactly as supplied.
///
/// # Examples
///
/// ```rust
/// use ass_writer::{Alignment, Style};
///
/// let style = Style::builder()
///     .fontsize(12)
///     .primary_colour("&H000000FF")
///     .alignment(Alignment::RightBottom)
///     .build();
///
/// let text = style.to_ass_string();
/// assert!(text.contains(
///     "Style: Default,Arial,12,&H000000FF,&H000000FF,&H00000000,&H00000000,0,0,0,0,100,100,0,0.0,1,2,2,3,10,10,10,1\n"
/// ));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "PascalCase"))]
pub struct Style {
    name: Option<String>,
    fontname: Option<String>,
    fontsize: Option<i32>,
    primary_colour: Option<String>,
    secondary_colour: Option<String>,
    outline_colour: Option<String>,
    back_colour: Option<String>,
    bold: Option<bool>,
    italic: Option<bool>,
    underline: Option<bool>,
    strike_out: Option<bool>,
    scale_x: Option<i32>,
    scale_y: Option<i32>,
    spacing: Option<i32>,
    angle: Option<f32>,
    border_style: Option<BorderStyle>,
    outline: Option<i32>,
    shadow: Option<i32>,
    alignment: Option<Alignment>,
    margin_l: Option<i32>,
    margin_r: Option<i32>,
    margin_v: Option<i32>,
    /// Deprecated SSA transparency; kept in the model, never rendered
    alpha_level: Option<f32>,
    encoding: Option<i32>,
}

impl Default for Style {
    /// Standard defaults: white 20pt Arial, bottom-centred, 10px margins
    fn default() -> Self {
        Self {
            name: Some(String::from("Default")),
            fontname: Some(String::from("Arial")),
            fontsize: Some(20),
            primary_colour: Some(String::from("&H00FFFFFF")),
            secondary_colour: Some(String::from("&H000000FF")),
            outline_colour: Some(String::from("&H00000000")),
            back_colour: Some(String::from("&H00000000")),
            bold: Some(false),
            italic: Some(false),
            underline: Some(false),
            strike_out: Some(false),
            scale_x: Some(100),
            scale_y: Some(100),
            spacing: Some(0),
            angle: Some(0.0),
            border_style: Some(BorderStyle::OutlineAndDropShadow),
            outline: Some(2),
            shadow: Some(2),
            alignment: Some(Alignment::MidBottom),
            margin_l: Some(10),
            margin_r: Some(10),
            margin_v: Some(10),
            alpha_level: None,
            encoding: Some(1),
        }
    }
}

/// Canonical `[V4+ Styles]` column order
static STYLE_FIELDS: &[FieldDecl<Style>] = &[
    FieldDecl {
        name: "Name",
        comments: &[],
        value: |s: &Style| s.name.clone(),
    },
    FieldDecl {
        name: "Fontname",
        comments: &[],
        value: |s: &Style| s.fontname.clone(),
    },
    FieldDecl {
        name: "Fontsize",
        comments: &[],
        value: |s: &Style| text_of(s.fontsize.as_ref()),
    },
    FieldDecl {
        name: "PrimaryColour",
        comments: &[],
        value: |s: &Style| s.primary_colour.clone(),
    },
    FieldDecl {
        name: "SecondaryColour",
        comments: &[],
        value: |s: &Style| s.secondary_colour.clone(),
    },
    FieldDecl {
        name: "OutlineColour",
        comments: &[],
        value: |s: &Style| s.outline_colour.clone(),
    },
    FieldDecl {
        name: "BackColour",
        comments: &[],
        value: |s: &Style| s.back_colour.clone(),
    },
    FieldDecl {
        name: "Bold",
        comments: &[],
        value: |s: &Style| text_of(s.bold.as_ref()),
    },
    FieldDecl {
        name: "Italic",
        comments: &[],
        value: |s: &Style| text_of(s.italic.as_ref()),
    },
    FieldDecl {
        name: "Underline",
        comments: &[],
        value: |s: &Style| text_of(s.underline.as_ref()),
    },
    FieldDecl {
        name: "StrikeOut",
        comments: &[],
        value: |s: &Style| text_of(s.strike_out.as_ref()),
    },
    FieldDecl {
        name: "ScaleX",
        comments: &[],
        value: |s: &Style| text_of(s.scale_x.as_ref()),
    },
    FieldDecl {
        name: "ScaleY",
        comments: &[],
        value: |s: &Style| text_of(s.scale_y.as_ref()),
    },
    FieldDecl {
        name: "Spacing",
        comments: &[],
        value: |s: &Style| text_of(s.spacing.as_ref()),
    },
    FieldDecl {
        name: "Angle",
        comments: &[],
        value: |s: &Style| text_of(s.angle.as_ref()),
    },
    FieldDecl {
        name: "BorderStyle",
        comments: &[],
        value: |s: &Style| text_of(s.border_style.as_ref()),
    },
    FieldDecl {
        name: "Outline",
        comments: &[],
        value: |s: &Style| text_of(s.outline.as_ref()),
    },
    FieldDecl {
        name: "Shadow",
        comments: &[],
        value: |s: &Style| text_of(s.shadow.as_ref()),
    },
    FieldDecl {
        name: "Alignment",
        comments: &[],
        value: |s: &Style| text_of(s.alignment.as_ref()),
    },
    FieldDecl {
        name: "MarginL",
        comments: &[],
        value: |s: &Style| text_of(s.margin_l.as_ref()),
    },
    FieldDecl {
        name: "MarginR",
        comments: &[],
        value: |s: &Style| text_of(s.margin_r.as_ref()),
    },
    FieldDecl {
        name: "MarginV",
        comments: &[],
        value: |s: &Style| text_of(s.margin_v.as_ref()),
    },
    FieldDecl {
        name: "Encoding",
        comments: &[],
        value: |s: &Style| text_of(s.encoding.as_ref()),
    },
];

impl Style {
    /// Start from the default style and override fields
    #[must_use]
    pub fn builder() -> StyleBuilder {
        StyleBuilder::default()
    }

    /// Style name referenced by dialogue lines
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Font family
    #[must_use]
    pub fn fontname(&self) -> Option<&str> {
        self.fontname.as_deref()
    }

    /// Font size
    #[must_use]
    pub const fn fontsize(&self) -> Option<i32> {
        self.fontsize
    }

    /// Primary fill colour
    #[must_use]
    pub fn primary_colour(&self) -> Option<&str> {
        self.primary_colour.as_deref()
    }

    /// Secondary (karaoke/collision) colour
    #[must_use]
    pub fn secondary_colour(&self) -> Option<&str> {
        self.secondary_colour.as_deref()
    }

    /// Outline colour
    #[must_use]
    pub fn outline_colour(&self) -> Option<&str> {
        self.outline_colour.as_deref()
    }

    /// Shadow/background colour
    #[must_use]
    pub fn back_colour(&self) -> Option<&str> {
        self.back_colour.as_deref()
    }

    /// Bold flag
    #[must_use]
    pub const fn bold(&self) -> Option<bool> {
        self.bold
    }

    /// Italic flag
    #[must_use]
    pub const fn italic(&self) -> Option<bool> {
        self.italic
    }

    /// Underline flag
    #[must_use]
    pub const fn underline(&self) -> Option<bool> {
        self.underline
    }

    /// Strikeout flag
    #[must_use]
    pub const fn strike_out(&self) -> Option<bool> {
        self.strike_out
    }

    /// Horizontal scale percentage
    #[must_use]
    pub const fn scale_x(&self) -> Option<i32> {
        self.scale_x
    }

    /// Vertical scale percentage
    #[must_use]
    pub const fn scale_y(&self) -> Option<i32> {
        self.scale_y
    }

    /// Extra character spacing in pixels
    #[must_use]
    pub const fn spacing(&self) -> Option<i32> {
        self.spacing
    }

    /// Rotation in degrees
    #[must_use]
    pub const fn angle(&self) -> Option<f32> {
        self.angle
    }

    /// Border style
    #[must_use]
    pub const fn border_style(&self) -> Option<BorderStyle> {
        self.border_style
    }

    /// Outline width in pixels
    #[must_use]
    pub const fn outline(&self) -> Option<i32> {
        self.outline
    }

    /// Shadow depth in pixels
    #[must_use]
    pub const fn shadow(&self) -> Option<i32> {
        self.shadow
    }

    /// Numpad alignment
    #[must_use]
    pub const fn alignment(&self) -> Option<Alignment> {
        self.alignment
    }

    /// Left margin in pixels
    #[must_use]
    pub const fn margin_l(&self) -> Option<i32> {
        self.margin_l
    }

    /// Right margin in pixels
    #[must_use]
    pub const fn margin_r(&self) -> Option<i32> {
        self.margin_r
    }

    /// Vertical margin in pixels
    #[must_use]
    pub const fn margin_v(&self) -> Option<i32> {
        self.margin_v
    }

    /// Deprecated transparency level (never rendered)
    #[must_use]
    pub const fn alpha_level(&self) -> Option<f32> {
        self.alpha_level
    }

    /// Font character set
    #[must_use]
    pub const fn encoding(&self) -> Option<i32> {
        self.encoding
    }

    /// Render the `[V4+ Styles]` section
    ///
    /// The `Format:` names and `Style:` values are filtered by the same
    /// presence test, so both lists always have the same length.
    #[must_use]
    pub fn to_ass_string(&self) -> String {
        let (names, values): (Vec<&str>, Vec<String>) = STYLE_FIELDS
            .iter()
            .filter_map(|decl| (decl.value)(self).map(|value| (decl.name, value)))
            .unzip();

        log::trace!("rendering [V4+ Styles] with {} columns", names.len());

        format!(
            "[V4+ Styles]\nFormat: {}\nStyle: {}\n",
            names.join(","),
            values.join(",")
        )
    }
}

/// Builder layering overrides on top of [`Style::default`]
///
/// Every setter also accepts `None`, which removes the column from both
/// output lines.
#[derive(Debug, Clone, Default)]
pub struct StyleBuilder {
    style: Style,
}

impl StyleBuilder {
    /// Set style name
    #[must_use]
    pub fn name(mut self, name: impl OptionalText) -> Self {
        self.style.name = name.into_optional_text();
        self
    }

    /// Set font family
    #[must_use]
    pub fn fontname(mut self, fontname: impl OptionalText) -> Self {
        self.style.fontname = fontname.into_optional_text();
        self
    }

    /// Set font size
    #[must_use]
    pub fn fontsize(mut self, size: impl Into<Option<i32>>) -> Self {
        self.style.fontsize = size.into();
        self
    }

    /// Set primary colour (`&HAABBGGRR`)
    #[must_use]
    pub fn primary_colour(mut self, colour: impl OptionalText) -> Self {
        self.style.primary_colour = colour.into_optional_text();
        self
    }

    /// Set secondary colour
    #[must_use]
    pub fn secondary_colour(mut self, colour: impl OptionalText) -> Self {
        self.style.secondary_colour = colour.into_optional_text();
        self
    }

    /// Set outline colour
    #[must_use]
    pub fn outline_colour(mut self, colour: impl OptionalText) -> Self {
        self.style.outline_colour = colour.into_optional_text();
        self
    }

    /// Set shadow/background colour
    #[must_use]
    pub fn back_colour(mut self, colour: impl OptionalText) -> Self {
        self.style.back_colour = colour.into_optional_text();
        self
    }

    /// Set bold flag
    #[must_use]
    pub fn bold(mut self, bold: impl Into<Option<bool>>) -> Self {
        self.style.bold = bold.into();
        self
    }

    /// Set italic flag
    #[must_use]
    pub fn italic(mut self, italic: impl Into<Option<bool>>) -> Self {
        self.style.italic = italic.into();
        self
    }

    /// Set underline flag
    #[must_use]
    pub fn underline(mut self, underline: impl Into<Option<bool>>) -> Self {
        self.style.underline = underline.into();
        self
    }

    /// Set strikeout flag
    #[must_use]
    pub fn strike_out(mut self, strike_out: impl Into<Option<bool>>) -> Self {
        self.style.strike_out = strike_out.into();
        self
    }

    /// Set horizontal scale percentage
    #[must_use]
    pub fn scale_x(mut self, scale: impl Into<Option<i32>>) -> Self {
        self.style.scale_x = scale.into();
        self
    }

    /// Set vertical scale percentage
    #[must_use]
    pub fn scale_y(mut self, scale: impl Into<Option<i32>>) -> Self {
        self.style.scale_y = scale.into();
        self
    }

    /// Set character spacing
    #[must_use]
    pub fn spacing(mut self, spacing: impl Into<Option<i32>>) -> Self {
        self.style.spacing = spacing.into();
        self
    }

    /// Set rotation angle in degrees
    #[must_use]
    pub fn angle(mut self, angle: impl Into<Option<f32>>) -> Self {
        self.style.angle = angle.into();
        self
    }

    /// Set border style
    #[must_use]
    pub fn border_style(mut self, border_style: impl Into<Option<BorderStyle>>) -> Self {
        self.style.border_style = border_style.into();
        self
    }

    /// Set outline width
    #[must_use]
    pub fn outline(mut self, width: impl Into<Option<i32>>) -> Self {
        self.style.outline = width.into();
        self
    }

    /// Set shadow depth
    #[must_use]
    pub fn shadow(mut self, depth: impl Into<Option<i32>>) -> Self {
        self.style.shadow = depth.into();
        self
    }

    /// Set numpad alignment
    #[must_use]
    pub fn alignment(mut self, alignment: impl Into<Option<Alignment>>) -> Self {
        self.style.alignment = alignment.into();
        self
    }

    /// Set left margin
    #[must_use]
    pub fn margin_l(mut self, margin: impl Into<Option<i32>>) -> Self {
        self.style.margin_l = margin.into();
        self
    }

    /// Set right margin
    #[must_use]
    pub fn margin_r(mut self, margin: impl Into<Option<i32>>) -> Self {
        self.style.margin_r = margin.into();
        self
    }

    /// Set vertical margin
    #[must_use]
    pub fn margin_v(mut self, margin: impl Into<Option<i32>>) -> Self {
        self.style.margin_v = margin.into();
        self
    }

    /// Set deprecated alpha level
    #[must_use]
    pub fn alpha_level(mut self, alpha: impl Into<Option<f32>>) -> Self {
        self.style.alpha_level = alpha.into();
        self
    }

    /// Set font character set
    #[must_use]
    pub fn encoding(mut self, encoding: impl Into<Option<i32>>) -> Self {
        self.style.encoding = encoding.into();
        self
    }

    /// Finish building
    #[must_use]
    pub fn build(self) -> Style {
        self.style
    }
}

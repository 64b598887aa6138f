//! Named field rendering shared by the `[Script Info]` and `[V4+ Styles]` sections
//!
//! A [`NamedField`] is one `Name: value` entry plus the documentation comment
//! lines that precede it. An absent value renders to nothing at all,
//! comments included. Sections describe their fields with ordered
//! [`FieldDecl`] tables so the name, comment text and value accessor of a
//! field are declared together and cannot drift apart.

use alloc::{
    format,
    string::{String, ToString},
};

/// Conversion of a typed field value to its ASS text
///
/// Numbers print in plain decimal, booleans as `-1`/`0` flags, enums as their
/// fixed code. No quoting or escaping is applied.
pub trait FieldValue {
    /// Render the value exactly as it appears after `Name: `
    fn to_field_text(&self) -> String;
}

impl FieldValue for str {
    fn to_field_text(&self) -> String {
        self.to_string()
    }
}

impl FieldValue for String {
    fn to_field_text(&self) -> String {
        self.clone()
    }
}

impl FieldValue for i32 {
    fn to_field_text(&self) -> String {
        self.to_string()
    }
}

impl FieldValue for u32 {
    fn to_field_text(&self) -> String {
        self.to_string()
    }
}

impl FieldValue for bool {
    fn to_field_text(&self) -> String {
        format_flag(*self).to_string()
    }
}

impl FieldValue for f32 {
    fn to_field_text(&self) -> String {
        format_float(*self)
    }
}

impl<T: FieldValue + ?Sized> FieldValue for &T {
    fn to_field_text(&self) -> String {
        (**self).to_field_text()
    }
}

/// Argument of a text field setter: a value, or `None` to make it absent
///
/// Only `Option<String>` is accepted in option form, so a bare `None`
/// needs no type annotation.
pub trait OptionalText {
    /// Convert into the stored optional text
    fn into_optional_text(self) -> Option<String>;
}

impl OptionalText for &str {
    fn into_optional_text(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl OptionalText for String {
    fn into_optional_text(self) -> Option<String> {
        Some(self)
    }
}

impl OptionalText for Option<String> {
    fn into_optional_text(self) -> Option<String> {
        self
    }
}

/// ASS boolean flag: `-1` is true, `0` is false
#[must_use]
pub const fn format_flag(value: bool) -> &'static str {
    if value {
        "-1"
    } else {
        "0"
    }
}

/// Float with at least one fractional digit (`0.0`, `12.5`)
///
/// Whole values in the ordinary range keep a trailing `.0`; everything else
/// uses the shortest round-trip representation.
#[must_use]
pub fn format_float(value: f32) -> String {
    if value.is_finite() && value % 1.0 == 0.0 && value > -1.0e7 && value < 1.0e7 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Timer speed with up to four fractional digits, trailing zeros trimmed
///
/// `100.0` renders as `100`, `99.5` as `99.5`, `12.345_67` as `12.3457`.
#[must_use]
pub fn format_timer(value: f32) -> String {
    let fixed = format!("{value:.4}");
    if !fixed.contains('.') {
        return fixed;
    }
    fixed
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// One optional `Name: value` entry with its comment annotation
///
/// # Examples
///
/// ```rust
/// use ass_writer::script::NamedField;
///
/// let bare = NamedField::new("PlayResX", Some(1920), &[]);
/// assert_eq!(bare.render(), "PlayResX: 1920");
///
/// let documented = NamedField::new("Title", Some("Demo"), &["Script title."]);
/// assert_eq!(documented.render(), "; Script title.\nTitle: Demo\n");
///
/// let absent = NamedField::new::<i32>("PlayResY", None, &["Never shown."]);
/// assert_eq!(absent.render(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedField<'a> {
    name: &'a str,
    value: Option<String>,
    comments: &'a [&'a str],
}

impl<'a> NamedField<'a> {
    /// Create a field from a typed value
    pub fn new<V: FieldValue>(name: &'a str, value: Option<V>, comments: &'a [&'a str]) -> Self {
        Self {
            name,
            value: value.map(|v| v.to_field_text()),
            comments,
        }
    }

    /// Create a field from already rendered value text
    #[must_use]
    pub const fn from_text(name: &'a str, value: Option<String>, comments: &'a [&'a str]) -> Self {
        Self {
            name,
            value,
            comments,
        }
    }

    /// Field name as written before the colon
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }

    /// Rendered value text, `None` when the field is absent
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Whether this field produces any output
    #[must_use]
    pub const fn is_present(&self) -> bool {
        self.value.is_some()
    }

    /// Render the field block
    ///
    /// Absent: empty string. Without comments: `Name: value` with no line
    /// ending. With comments: one `; `-prefixed line per comment, then
    /// `Name: value`, then a newline.
    #[must_use]
    pub fn render(&self) -> String {
        let Some(value) = &self.value else {
            return String::new();
        };

        if self.comments.is_empty() {
            return format!("{}: {value}", self.name);
        }

        let mut block = String::new();
        for comment in self.comments {
            block.push_str("; ");
            block.push_str(comment);
            block.push('\n');
        }
        block.push_str(self.name);
        block.push_str(": ");
        block.push_str(value);
        block.push('\n');
        block
    }
}

/// Declaration of one field in a section's canonical field order
///
/// Name, comment text and value accessor live in the same table row, so a
/// field cannot appear in one output list and be missing from another.
pub(crate) struct FieldDecl<T> {
    /// Field name as written in the script
    pub name: &'static str,
    /// Documentation lines emitted before the field
    pub comments: &'static [&'static str],
    /// Renders the owner's value, `None` when absent
    pub value: fn(&T) -> Option<String>,
}

impl<T> FieldDecl<T> {
    /// Bind this declaration to a concrete owner
    pub fn bind(&self, owner: &T) -> NamedField<'static> {
        NamedField::from_text(self.name, (self.value)(owner), self.comments)
    }
}

/// Render an optional typed value through [`FieldValue`]
pub(crate) fn text_of<V: FieldValue>(value: Option<&V>) -> Option<String> {
    value.map(FieldValue::to_field_text)
}

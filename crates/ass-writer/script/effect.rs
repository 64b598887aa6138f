//! Dialogue transition effects
//!
//! The `Effect` column of a dialogue line holds either nothing or one of the
//! transition effects SSA v4 defines. Parameters are written verbatim; the
//! documented 1-100 delay range is not enforced.

use alloc::string::String;
use core::fmt;

/// Transition effect applied to a dialogue line
///
/// # Examples
///
/// ```rust
/// use ass_writer::Effect;
///
/// let scroll = Effect::ScrollUp { y1: 0, y2: 100, delay: 5, fade_away_height: None };
/// assert_eq!(scroll.to_ass_string(), "Scroll up;0;100;5");
///
/// let banner = Effect::Banner { delay: 10, left_to_right: true, fade_away_width: Some(20) };
/// assert_eq!(banner.to_ass_string(), "Banner;10;1;20");
///
/// assert_eq!(Effect::default().to_ass_string(), "");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Effect {
    /// Obsolete word-by-word highlight
    Karaoke,

    /// Text scrolls up inside the vertical region `y1..y2`
    ScrollUp {
        /// First edge of the scroll region in pixels
        y1: i32,
        /// Second edge of the scroll region in pixels
        y2: i32,
        /// Slowdown factor, 0 is fastest
        delay: i32,
        /// Height of the transparent fade band at the region edges
        fade_away_height: Option<i32>,
    },

    /// Text scrolls down inside the vertical region `y1..y2`
    ScrollDown {
        /// First edge of the scroll region in pixels
        y1: i32,
        /// Second edge of the scroll region in pixels
        y2: i32,
        /// Slowdown factor, 0 is fastest
        delay: i32,
        /// Height of the transparent fade band at the region edges
        fade_away_height: Option<i32>,
    },

    /// Text forced onto one line and scrolled horizontally
    Banner {
        /// Slowdown factor, 0 is fastest
        delay: i32,
        /// Scroll left to right instead of right to left
        left_to_right: bool,
        /// Width of the transparent fade band at the screen sides
        fade_away_width: Option<i32>,
    },

    /// No effect; leaves the column empty
    #[default]
    Undefined,
}

impl Effect {
    /// Render the effect column text
    #[must_use]
    pub fn to_ass_string(&self) -> String {
        use alloc::string::ToString;
        self.to_string()
    }

    /// Whether the effect column stays empty
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }
}

/// Write a scroll effect with its optional trailing fade height
fn write_scroll(
    f: &mut fmt::Formatter<'_>,
    keyword: &str,
    y1: i32,
    y2: i32,
    delay: i32,
    fade_away_height: Option<i32>,
) -> fmt::Result {
    write!(f, "{keyword};{y1};{y2};{delay}")?;
    if let Some(height) = fade_away_height {
        write!(f, ";{height}")?;
    }
    Ok(())
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Karaoke => f.write_str("Karaoke"),
            Self::ScrollUp {
                y1,
                y2,
                delay,
                fade_away_height,
            } => write_scroll(f, "Scroll up", y1, y2, delay, fade_away_height),
            Self::ScrollDown {
                y1,
                y2,
                delay,
                fade_away_height,
            } => write_scroll(f, "Scroll down", y1, y2, delay, fade_away_height),
            Self::Banner {
                delay,
                left_to_right,
                fade_away_width,
            } => {
                write!(f, "Banner;{delay};{}", u8::from(left_to_right))?;
                if let Some(width) = fade_away_width {
                    write!(f, ";{width}")?;
                }
                Ok(())
            }
            Self::Undefined => Ok(()),
        }
    }
}

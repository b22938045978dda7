use std::{fmt, str::FromStr};

use thiserror::Error;

/// Placement of each line inside the available extent.
///
/// `Left` and `Right` name the start and end of the line's flow direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

impl TextAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
            TextAlign::Justify => "justify",
        }
    }
}

impl fmt::Display for TextAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown text alignment {0:?}")]
pub struct ParseAlignError(pub String);

impl FromStr for TextAlign {
    type Err = ParseAlignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(TextAlign::Left),
            "center" => Ok(TextAlign::Center),
            "right" => Ok(TextAlign::Right),
            "justify" => Ok(TextAlign::Justify),
            _ => Err(ParseAlignError(s.to_string())),
        }
    }
}

/// Spacing setting as supplied by the caller.
///
/// Only the integer part is used for layout. Anything without one (`"auto"`,
/// garbage, non-finite numbers) means "strategy default", see
/// [`Spacing::normalized`].
#[derive(Clone, Debug, PartialEq)]
pub enum Spacing {
    Pixels(f32),
    Auto,
    Raw(String),
}

impl Default for Spacing {
    fn default() -> Self {
        Spacing::Pixels(0.0)
    }
}

impl From<f32> for Spacing {
    fn from(value: f32) -> Self {
        Spacing::Pixels(value)
    }
}

impl From<i32> for Spacing {
    fn from(value: i32) -> Self {
        Spacing::Pixels(value as f32)
    }
}

impl From<&str> for Spacing {
    fn from(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("auto") {
            Spacing::Auto
        } else {
            Spacing::Raw(value.to_string())
        }
    }
}

impl From<String> for Spacing {
    fn from(value: String) -> Self {
        Spacing::from(value.as_str())
    }
}

impl Spacing {
    /// Value passed to the layout strategies. `-1` stands for the
    /// strategy default.
    pub fn normalized(&self) -> i32 {
        match self {
            Spacing::Pixels(value) if value.is_finite() => {
                value.trunc().clamp(i32::MIN as f32, i32::MAX as f32) as i32
            }
            Spacing::Pixels(_) | Spacing::Auto => -1,
            Spacing::Raw(raw) => parse_integer_prefix(raw).unwrap_or(-1),
        }
    }
}

/// Parses the leading integer of `raw` (`"12px"` -> 12, `" -3.5"` -> -3).
fn parse_integer_prefix(raw: &str) -> Option<i32> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: Vec<i64> = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .map(|digit| i64::from(digit - b'0'))
        .collect();
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits
        .iter()
        .fold(0i64, |acc, digit| acc.saturating_mul(10).saturating_add(*digit));
    let value = if negative { -magnitude } else { magnitude };

    Some(value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
}

/// Immutable settings handed to a layout strategy for one relocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutConfig {
    pub text_align: TextAlign,
    pub left_to_right: bool,
    pub top_to_bottom: bool,
    /// Gap between lines, `-1` for the strategy default.
    pub space_between_lines: i32,
    /// Advance of word separators, `-1` for the strategy default.
    pub space_between_words: i32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            text_align: TextAlign::Left,
            left_to_right: true,
            top_to_bottom: true,
            space_between_lines: 0,
            space_between_words: -1,
        }
    }
}

use euclid::default::Size2D;

use crate::layout::{LayoutConfig, Spacing, TextAlign};

pub const DEFAULT_WIDTH: f32 = 2048.0;
pub const DEFAULT_HEIGHT: f32 = 1152.0;

/// Field-level layout settings.
///
/// Changing any of them through the [`TextField`](crate::TextField) setters
/// relocates the existing glyphs; it never rebuilds them.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    /// Bounding box handed to the flow strategies.
    pub size: Size2D<f32>,
    pub align: TextAlign,
    /// Rows first when `true`, columns first otherwise.
    pub horizontal_priority: bool,
    pub left_to_right: bool,
    pub top_to_bottom: bool,
    /// Use the custom strategy selected by `type_align`.
    pub custom_align: bool,
    pub type_align: Option<String>,
    pub space_between_lines: Spacing,
    pub space_between_words: Spacing,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            size: Size2D::new(DEFAULT_WIDTH, DEFAULT_HEIGHT),
            align: TextAlign::Left,
            horizontal_priority: true,
            left_to_right: true,
            top_to_bottom: true,
            custom_align: false,
            type_align: None,
            space_between_lines: Spacing::Pixels(0.0),
            space_between_words: Spacing::Pixels(-1.0),
        }
    }
}

impl FieldConfig {
    /// Snapshot handed to the horizontal and vertical strategies, with the
    /// spacing values normalized.
    pub fn layout_config(&self) -> LayoutConfig {
        LayoutConfig {
            text_align: self.align,
            left_to_right: self.left_to_right,
            top_to_bottom: self.top_to_bottom,
            space_between_lines: self.space_between_lines.normalized(),
            space_between_words: self.space_between_words.normalized(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_layout_default() {
        assert_eq!(
            FieldConfig::default().layout_config(),
            LayoutConfig::default()
        );
    }

    #[test]
    fn test_layout_config_normalizes_spacing() {
        let config = FieldConfig {
            align: TextAlign::Justify,
            left_to_right: false,
            space_between_lines: Spacing::Auto,
            space_between_words: Spacing::from("8px"),
            ..FieldConfig::default()
        };
        assert_eq!(
            config.layout_config(),
            LayoutConfig {
                text_align: TextAlign::Justify,
                left_to_right: false,
                top_to_bottom: true,
                space_between_lines: -1,
                space_between_words: 8,
            }
        );
    }
}

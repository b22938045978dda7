use euclid::default::Size2D;

use super::{
    GlyphLayout, LayoutConfig,
    flow::{self, Axis, FlowMetrics, FlowOptions},
};
use crate::glyph::Glyph;

/// Lays glyphs out in rows, wrapping at the bounding width.
///
/// `left_to_right == false` mirrors each row inside the bounds,
/// `top_to_bottom == false` stacks rows upward from the bottom edge.
#[derive(Clone, Debug, Default)]
pub struct HorizontalLayout {
    last_metrics: FlowMetrics,
}

impl HorizontalLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows and block size produced by the most recent relocation.
    pub fn last_metrics(&self) -> FlowMetrics {
        self.last_metrics
    }
}

impl<G: Glyph> GlyphLayout<G> for HorizontalLayout {
    fn relocate(
        &mut self,
        text: &str,
        glyphs: &mut [G],
        bounds: Size2D<f32>,
        config: &LayoutConfig,
    ) {
        self.last_metrics = flow::flow(
            text,
            glyphs,
            bounds,
            config,
            FlowOptions {
                axis: Axis::Horizontal,
                mirror_main: !config.left_to_right,
                mirror_cross: !config.top_to_bottom,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        layout::TextAlign,
        testing::{self, TestGlyph},
    };

    // Base-style test glyphs are 10 wide and 20 tall.
    fn layout(text: &str, width: f32, config: LayoutConfig) -> (Vec<(f32, f32)>, FlowMetrics) {
        let mut glyphs = testing::glyphs(text);
        let mut strategy = HorizontalLayout::new();
        strategy.relocate(text, &mut glyphs[..], Size2D::new(width, 100.0), &config);
        (positions(&glyphs), strategy.last_metrics())
    }

    fn positions(glyphs: &[TestGlyph]) -> Vec<(f32, f32)> {
        glyphs
            .iter()
            .map(|glyph| (glyph.position.x, glyph.position.y))
            .collect()
    }

    #[test]
    fn test_single_row() {
        let (positions, metrics) = layout("ab cd", 100.0, LayoutConfig::default());
        assert_eq!(
            positions,
            vec![(0.0, 0.0), (10.0, 0.0), (20.0, 0.0), (30.0, 0.0), (40.0, 0.0)]
        );
        assert_eq!(metrics.lines, 1);
        assert_eq!(metrics.extent, Size2D::new(50.0, 20.0));
    }

    #[test]
    fn test_word_wrap() {
        let (positions, metrics) = layout("ab cd ef", 45.0, LayoutConfig::default());
        assert_eq!(metrics.lines, 3);
        assert_eq!(positions[3], (0.0, 20.0));
        assert_eq!(positions[6], (0.0, 40.0));
        assert_eq!(positions[7], (10.0, 40.0));
    }

    #[test]
    fn test_long_word_breaks_per_character() {
        let (positions, metrics) = layout("abcd", 25.0, LayoutConfig::default());
        assert_eq!(metrics.lines, 2);
        assert_eq!(
            positions,
            vec![(0.0, 0.0), (10.0, 0.0), (0.0, 20.0), (10.0, 20.0)]
        );
    }

    #[test]
    fn test_line_break_and_spacing() {
        let config = LayoutConfig {
            space_between_lines: 5,
            ..LayoutConfig::default()
        };
        let (positions, metrics) = layout("a\nb", 100.0, config);
        assert_eq!(positions[0], (0.0, 0.0));
        assert_eq!(positions[2], (0.0, 25.0));
        assert_eq!(metrics.extent.height, 45.0);
    }

    #[test]
    fn test_word_spacing_override() {
        let config = LayoutConfig {
            space_between_words: 30,
            ..LayoutConfig::default()
        };
        let (positions, _) = layout("a b", 100.0, config);
        assert_eq!(positions[2], (40.0, 0.0));

        let config = LayoutConfig {
            space_between_words: 0,
            ..LayoutConfig::default()
        };
        let (positions, _) = layout("a b", 100.0, config);
        assert_eq!(positions[2], (10.0, 0.0));
    }

    #[test]
    fn test_alignment() {
        let center = LayoutConfig {
            text_align: TextAlign::Center,
            ..LayoutConfig::default()
        };
        assert_eq!(layout("ab", 100.0, center).0, vec![(40.0, 0.0), (50.0, 0.0)]);

        let right = LayoutConfig {
            text_align: TextAlign::Right,
            ..LayoutConfig::default()
        };
        assert_eq!(layout("ab", 100.0, right).0, vec![(80.0, 0.0), (90.0, 0.0)]);
    }

    #[test]
    fn test_justify_stretches_all_but_last_line() {
        let config = LayoutConfig {
            text_align: TextAlign::Justify,
            ..LayoutConfig::default()
        };
        let (positions, metrics) = layout("ab cd ef gh", 75.0, config);
        assert_eq!(metrics.lines, 2);
        // first line: 50 wide, 25 spare on its single inner separator
        assert_eq!(positions[3], (55.0, 0.0));
        assert_eq!(positions[4], (65.0, 0.0));
        // last line keeps natural spacing
        assert_eq!(positions[9], (30.0, 20.0));
    }

    #[test]
    fn test_right_to_left_and_bottom_to_top() {
        let rtl = LayoutConfig {
            left_to_right: false,
            ..LayoutConfig::default()
        };
        assert_eq!(layout("ab", 100.0, rtl).0, vec![(90.0, 0.0), (80.0, 0.0)]);

        let upward = LayoutConfig {
            top_to_bottom: false,
            ..LayoutConfig::default()
        };
        let (positions, _) = layout("a\nb", 100.0, upward);
        assert_eq!(positions[0], (0.0, 80.0));
        assert_eq!(positions[2], (0.0, 60.0));
    }

    #[test]
    fn test_empty_text() {
        let (positions, metrics) = layout("", 100.0, LayoutConfig::default());
        assert!(positions.is_empty());
        assert_eq!(metrics, FlowMetrics::default());
    }
}

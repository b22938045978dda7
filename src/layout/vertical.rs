use euclid::default::Size2D;

use super::{
    GlyphLayout, LayoutConfig,
    flow::{self, Axis, FlowMetrics, FlowOptions},
};
use crate::glyph::Glyph;

/// Lays glyphs out in columns, wrapping at the bounding height.
///
/// Columns stack from the left edge, or from the right edge when
/// `left_to_right == false`. `top_to_bottom == false` runs each column
/// upward from the bottom edge. `space_between_lines` is the gap between
/// columns.
#[derive(Clone, Debug, Default)]
pub struct VerticalLayout {
    last_metrics: FlowMetrics,
}

impl VerticalLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Columns and block size produced by the most recent relocation.
    pub fn last_metrics(&self) -> FlowMetrics {
        self.last_metrics
    }
}

impl<G: Glyph> GlyphLayout<G> for VerticalLayout {
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
                axis: Axis::Vertical,
                mirror_main: !config.top_to_bottom,
                mirror_cross: !config.left_to_right,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{layout::TextAlign, testing};

    // Base-style test glyphs are 10 wide and 20 tall.
    fn layout(text: &str, height: f32, config: LayoutConfig) -> (Vec<(f32, f32)>, FlowMetrics) {
        let mut glyphs = testing::glyphs(text);
        let mut strategy = VerticalLayout::new();
        strategy.relocate(text, &mut glyphs[..], Size2D::new(100.0, height), &config);
        let positions = glyphs
            .iter()
            .map(|glyph| (glyph.position.x, glyph.position.y))
            .collect();
        (positions, strategy.last_metrics())
    }

    #[test]
    fn test_single_column() {
        let (positions, metrics) = layout("ab", 100.0, LayoutConfig::default());
        assert_eq!(positions, vec![(0.0, 0.0), (0.0, 20.0)]);
        assert_eq!(metrics.lines, 1);
        assert_eq!(metrics.extent, Size2D::new(10.0, 40.0));
    }

    #[test]
    fn test_column_wrap_and_gap() {
        let config = LayoutConfig {
            space_between_lines: 4,
            ..LayoutConfig::default()
        };
        let (positions, metrics) = layout("abc", 45.0, config);
        assert_eq!(metrics.lines, 2);
        assert_eq!(positions[2], (14.0, 0.0));
    }

    #[test]
    fn test_columns_from_the_right() {
        let config = LayoutConfig {
            left_to_right: false,
            ..LayoutConfig::default()
        };
        let (positions, _) = layout("abc", 45.0, config);
        assert_eq!(positions[0], (90.0, 0.0));
        assert_eq!(positions[2], (80.0, 0.0));
    }

    #[test]
    fn test_bottom_to_top_and_alignment() {
        let upward = LayoutConfig {
            top_to_bottom: false,
            ..LayoutConfig::default()
        };
        assert_eq!(
            layout("ab", 100.0, upward).0,
            vec![(0.0, 80.0), (0.0, 60.0)]
        );

        let center = LayoutConfig {
            text_align: TextAlign::Center,
            ..LayoutConfig::default()
        };
        assert_eq!(
            layout("ab", 100.0, center).0,
            vec![(0.0, 30.0), (0.0, 50.0)]
        );
    }
}

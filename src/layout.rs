use euclid::default::Size2D;

use crate::glyph::Glyph;

/// Settings consumed by the layout strategies.
pub mod config;
/// Token-keyed custom arrangements.
pub mod custom;
mod flow;
/// Row-first placement.
pub mod horizontal;
/// Column-first placement.
pub mod vertical;

pub use config::{LayoutConfig, ParseAlignError, Spacing, TextAlign};
pub use custom::{Arrangement, CustomLayout};
pub use flow::FlowMetrics;
pub use horizontal::HorizontalLayout;
pub use vertical::VerticalLayout;

/// A strategy that positions every glyph of a text inside a bounding box.
///
/// `glyphs` is index-aligned with the characters of `text`. Implementations
/// only move glyphs; they never add or remove them.
pub trait GlyphLayout<G: Glyph> {
    fn relocate(&mut self, text: &str, glyphs: &mut [G], bounds: Size2D<f32>, config: &LayoutConfig);
}

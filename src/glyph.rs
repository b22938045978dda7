use euclid::default::{Point2D, Size2D};

use crate::style::Style;

/// A renderable actor for one character.
///
/// The field owns every glyph it creates. Positions are set by the layout
/// strategies; the style is set on creation and whenever the character's
/// style context changes.
pub trait Glyph {
    /// The character this glyph renders.
    fn character(&self) -> char;

    /// Applies a fully resolved style (default style merged with every
    /// enclosing tag's override).
    fn set_style(&mut self, style: &Style);

    /// Top-left corner, **Y-axis goes down**.
    fn position(&self) -> Point2D<f32>;

    /// Moves the glyph. Layout strategies call this; the dispatcher then
    /// snaps the result to whole pixels.
    fn set_position(&mut self, position: Point2D<f32>);

    /// Extent used by the layout strategies.
    fn size(&self) -> Size2D<f32>;

    /// Releases the underlying resources. Called exactly once, right before
    /// the glyph is dropped by the field.
    fn dispose(&mut self, recursive: bool);
}

/// Builds glyphs for inserted characters.
///
/// Any `FnMut(char, &Style) -> G` closure is a factory.
pub trait GlyphFactory<G: Glyph> {
    /// Creates the glyph for `character`, already styled with `style`.
    fn create(&mut self, character: char, style: &Style) -> G;
}

impl<G, F> GlyphFactory<G> for F
where
    G: Glyph,
    F: FnMut(char, &Style) -> G,
{
    fn create(&mut self, character: char, style: &Style) -> G {
        self(character, style)
    }
}

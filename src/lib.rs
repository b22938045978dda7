//! # Hyoki
//!
//! Incremental rich-text reconciliation for retained-mode renderers.
//!
//! ## Overview
//!
//! `Hyoki` keeps one glyph per character of a block of styled text. The core
//! of the library is the [`TextField`]: every time its markup changes it
//! derives a per-character style map, diffs the new plain text against the
//! previous one and only touches the glyphs that actually changed. The
//! survivors are then relocated by a horizontal, vertical or user-registered
//! layout strategy.
//!
//! Glyphs themselves belong to the host renderer and are plugged in through
//! the [`Glyph`] and [`GlyphFactory`] traits.
//!
//! ## Usage
//!
//! ```rust
//! use hyoki::{
//!     CustomStyle, Glyph, Style, TextField,
//!     euclid::default::{Point2D, Size2D},
//!     style::FILL,
//! };
//!
//! struct Label {
//!     character: char,
//!     position: Point2D<f32>,
//! }
//!
//! impl Glyph for Label {
//!     fn character(&self) -> char {
//!         self.character
//!     }
//!     fn set_style(&mut self, _style: &Style) {}
//!     fn position(&self) -> Point2D<f32> {
//!         self.position
//!     }
//!     fn set_position(&mut self, position: Point2D<f32>) {
//!         self.position = position;
//!     }
//!     fn size(&self) -> Size2D<f32> {
//!         Size2D::new(10.0, 20.0)
//!     }
//!     fn dispose(&mut self, _recursive: bool) {}
//! }
//!
//! // 1. Create a field with a glyph factory
//! let mut field = TextField::with_size(
//!     |character: char, _style: &Style| Label {
//!         character,
//!         position: Point2D::zero(),
//!     },
//!     200.0,
//!     100.0,
//! );
//!
//! // 2. Set markup with styles for its tags
//! let style = CustomStyle::new().tag("b", Style::new().with(FILL, "#f00"));
//! field.set_text("hello <b>world</b>", style.clone()).unwrap();
//!
//! // 3. Edit the text; unchanged characters keep their glyphs
//! field.set_text("hello <b>word</b>", style).unwrap();
//! assert_eq!(field.text(), "hello word");
//! ```
//!
//! ## Features
//!
//! *   **Minimal Updates**: Character-level Myers diff, glyphs of equal runs are reused.
//! *   **Style Cascade**: Nested tags merge their styles, innermost wins.
//! *   **Pluggable Layout**: Row or column flow with wrapping and alignment, or custom arrangements.

pub mod config;
pub mod diff;
pub mod dispatch;
pub mod glyph;
pub mod layout;
pub mod markup;
pub mod reconcile;
pub mod style;
pub mod style_map;
pub mod text_field;

#[cfg(test)]
mod testing;

// common re-exports
pub use config::FieldConfig;
pub use glyph::{Glyph, GlyphFactory};
pub use layout::{Spacing, TextAlign};
pub use markup::{MarkupError, MarkupParser, TagParser};
pub use style::{CustomStyle, Style, StyleValue};
pub use text_field::TextField;

// re-export dependencies
pub use euclid;

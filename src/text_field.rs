use euclid::default::{Rect, Size2D};

use crate::{
    config::FieldConfig,
    diff::{EditKind, EditScript},
    dispatch::{LayoutDispatcher, LayoutRoute},
    glyph::{Glyph, GlyphFactory},
    layout::{CustomLayout, GlyphLayout, Spacing, TextAlign},
    markup::{MarkupError, MarkupParser, TagParser},
    reconcile::reconcile,
    style::{CustomStyle, Style, StyleResolver},
    style_map::StyleMap,
};

/// A block of styled text kept as one glyph per character.
///
/// [`set_text`](Self::set_text) diffs the new plain text against the current
/// one and only creates glyphs for inserted characters and disposes glyphs
/// of removed ones. Glyphs of unchanged characters are kept (and restyled
/// when their tags changed). Every text or setting change ends with a
/// relayout through the configured strategy.
///
/// The field owns its glyphs. Dropping it disposes the ones still alive.
pub struct TextField<G: Glyph> {
    parser: Box<dyn MarkupParser>,
    factory: Box<dyn GlyphFactory<G>>,
    dispatcher: LayoutDispatcher<G>,

    config: FieldConfig,
    default_style: Style,
    custom_style: CustomStyle,

    text: String,
    style_map: StyleMap,
    glyphs: Vec<G>,
}

impl<G: Glyph> TextField<G> {
    /// Creates an empty field with the default 2048x1152 bounds.
    pub fn new(factory: impl GlyphFactory<G> + 'static) -> Self {
        Self::with_config(factory, FieldConfig::default())
    }

    pub fn with_size(factory: impl GlyphFactory<G> + 'static, width: f32, height: f32) -> Self {
        Self::with_config(
            factory,
            FieldConfig {
                size: Size2D::new(width, height),
                ..FieldConfig::default()
            },
        )
    }

    pub fn with_config(factory: impl GlyphFactory<G> + 'static, config: FieldConfig) -> Self {
        Self {
            parser: Box::new(TagParser::new()),
            factory: Box::new(factory),
            dispatcher: LayoutDispatcher::new(),
            config,
            default_style: Style::base(),
            custom_style: CustomStyle::default(),
            text: String::new(),
            style_map: StyleMap::default(),
            glyphs: Vec::new(),
        }
    }

    /// Replaces the style every character starts from.
    pub fn with_default_style(mut self, style: Style) -> Self {
        self.default_style = style;
        self
    }

    /// Replaces the markup parser.
    pub fn with_parser(mut self, parser: impl MarkupParser + 'static) -> Self {
        self.parser = Box::new(parser);
        self
    }

    /// Replaces the row-first layout strategy.
    pub fn with_horizontal_layout(mut self, layout: impl GlyphLayout<G> + 'static) -> Self {
        self.dispatcher.set_horizontal_layout(layout);
        self
    }

    /// Replaces the column-first layout strategy.
    pub fn with_vertical_layout(mut self, layout: impl GlyphLayout<G> + 'static) -> Self {
        self.dispatcher.set_vertical_layout(layout);
        self
    }
}

/// text
impl<G: Glyph> TextField<G> {
    /// Sets the markup and the styles for its tags.
    ///
    /// `style` replaces the previous call's style entirely. Its field-level
    /// settings, when present, are applied before the layout runs. On a parse
    /// error the field is left untouched.
    pub fn set_text(&mut self, markup: &str, style: CustomStyle) -> Result<(), MarkupError> {
        let nodes = self.parser.parse(markup)?;

        self.apply_style_settings(&style);
        self.custom_style = style;

        let style_map = StyleMap::build(&nodes);
        let text = style_map.plain_text();
        let script = EditScript::diff(&self.text, &text);
        let previous = std::mem::replace(&mut self.style_map, style_map);

        let resolver = StyleResolver::new(&self.default_style, &self.custom_style);
        let stats = reconcile(
            &script,
            &previous,
            &self.style_map,
            &mut self.glyphs,
            &resolver,
            self.factory.as_mut(),
        );

        log::debug!(
            "set_text: {} equal / {} inserted / {} deleted chars, {} glyphs ({} restyled)",
            script.count(EditKind::Equal),
            stats.inserted,
            stats.removed,
            self.glyphs.len(),
            stats.restyled,
        );

        self.text = text;
        self.relocate();

        Ok(())
    }

    fn apply_style_settings(&mut self, style: &CustomStyle) {
        if let Some(align) = style.align {
            self.config.align = align;
        }
        if let Some(spacing) = &style.space_between_words {
            self.config.space_between_words = spacing.clone();
        }
        if let Some(spacing) = &style.space_between_lines {
            self.config.space_between_lines = spacing.clone();
        }
        if let Some(left_to_right) = style.left_to_right {
            self.config.left_to_right = left_to_right;
        }
        if let Some(top_to_bottom) = style.top_to_bottom {
            self.config.top_to_bottom = top_to_bottom;
        }
        if let Some(horizontal_priority) = style.horizontal_priority {
            self.config.horizontal_priority = horizontal_priority;
        }
    }

    /// Plain text currently shown, markup stripped.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Glyphs in text order, one per character of [`Self::text`].
    pub fn glyphs(&self) -> &[G] {
        &self.glyphs
    }

    pub fn style_map(&self) -> &StyleMap {
        &self.style_map
    }

    pub fn custom_style(&self) -> &CustomStyle {
        &self.custom_style
    }

    pub fn default_style(&self) -> &Style {
        &self.default_style
    }
}

/// layout
impl<G: Glyph> TextField<G> {
    /// Registers a listener called after each completed row or column layout
    /// with the last glyph (`None` when there is none).
    pub fn on_text_updated(&mut self, listener: impl FnMut(Option<&G>) + 'static) {
        self.dispatcher.add_listener(listener);
    }

    /// Registers an arrangement selectable through [`Self::set_type_align`].
    pub fn register_custom_align(
        &mut self,
        token: impl Into<String>,
        arrangement: impl FnMut(&mut [G]) + 'static,
    ) {
        self.dispatcher.custom_layout().register(token, arrangement);
    }

    pub fn custom_layout(&mut self) -> &mut CustomLayout<G> {
        self.dispatcher.custom_layout()
    }

    /// Re-runs the layout on the current glyphs.
    pub fn relocate(&mut self) -> LayoutRoute {
        self.dispatcher
            .relocate(&self.text, &mut self.glyphs, &self.config)
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn size(&self) -> Size2D<f32> {
        self.config.size
    }

    pub fn set_size(&mut self, width: f32, height: f32) {
        self.config.size = Size2D::new(width, height);
        self.relocate();
    }

    /// Hit-testing area covering the whole bounding box.
    pub fn hit_area(&self) -> Rect<f32> {
        Rect::from_size(self.config.size)
    }

    pub fn align(&self) -> TextAlign {
        self.config.align
    }

    pub fn set_align(&mut self, align: TextAlign) {
        self.config.align = align;
        self.relocate();
    }

    pub fn left_to_right(&self) -> bool {
        self.config.left_to_right
    }

    pub fn set_left_to_right(&mut self, value: bool) {
        self.config.left_to_right = value;
        self.relocate();
    }

    pub fn top_to_bottom(&self) -> bool {
        self.config.top_to_bottom
    }

    pub fn set_top_to_bottom(&mut self, value: bool) {
        self.config.top_to_bottom = value;
        self.relocate();
    }

    pub fn horizontal_priority(&self) -> bool {
        self.config.horizontal_priority
    }

    pub fn set_horizontal_priority(&mut self, value: bool) {
        self.config.horizontal_priority = value;
        self.relocate();
    }

    pub fn custom_align(&self) -> bool {
        self.config.custom_align
    }

    pub fn set_custom_align(&mut self, value: bool) {
        self.config.custom_align = value;
        self.relocate();
    }

    pub fn type_align(&self) -> Option<&str> {
        self.config.type_align.as_deref()
    }

    pub fn set_type_align(&mut self, token: impl Into<String>) {
        self.config.type_align = Some(token.into());
        self.relocate();
    }

    pub fn space_between_lines(&self) -> &Spacing {
        &self.config.space_between_lines
    }

    pub fn set_space_between_lines(&mut self, spacing: impl Into<Spacing>) {
        self.config.space_between_lines = spacing.into();
        self.relocate();
    }

    pub fn space_between_words(&self) -> &Spacing {
        &self.config.space_between_words
    }

    pub fn set_space_between_words(&mut self, spacing: impl Into<Spacing>) {
        self.config.space_between_words = spacing.into();
        self.relocate();
    }
}

impl<G: Glyph> Drop for TextField<G> {
    fn drop(&mut self) {
        for mut glyph in self.glyphs.drain(..) {
            glyph.dispose(true);
        }
    }
}

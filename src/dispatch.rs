use euclid::default::Point2D;

use crate::{
    config::FieldConfig,
    glyph::Glyph,
    layout::{CustomLayout, GlyphLayout, HorizontalLayout, VerticalLayout},
};

/// Observer called after every completed flow layout with the last glyph,
/// or `None` when there are no glyphs.
pub type TextUpdatedListener<G> = Box<dyn FnMut(Option<&G>)>;

/// Strategy a relocation went through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutRoute {
    /// The text was empty; nothing moved and nothing was emitted.
    Skipped,
    Custom,
    Horizontal,
    Vertical,
}

/// Picks a layout strategy for the current configuration and runs it.
///
/// Owns at most one instance of each strategy, created on first use and
/// reused afterwards.
pub struct LayoutDispatcher<G: Glyph> {
    horizontal: Option<Box<dyn GlyphLayout<G>>>,
    vertical: Option<Box<dyn GlyphLayout<G>>>,
    custom: Option<CustomLayout<G>>,
    listeners: Vec<TextUpdatedListener<G>>,
}

impl<G: Glyph> Default for LayoutDispatcher<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: Glyph> LayoutDispatcher<G> {
    pub fn new() -> Self {
        Self {
            horizontal: None,
            vertical: None,
            custom: None,
            listeners: Vec::new(),
        }
    }

    /// Replaces the row-first strategy.
    pub fn set_horizontal_layout(&mut self, layout: impl GlyphLayout<G> + 'static) {
        self.horizontal = Some(Box::new(layout));
    }

    /// Replaces the column-first strategy.
    pub fn set_vertical_layout(&mut self, layout: impl GlyphLayout<G> + 'static) {
        self.vertical = Some(Box::new(layout));
    }

    /// The custom strategy, created if needed.
    pub fn custom_layout(&mut self) -> &mut CustomLayout<G> {
        self.custom.get_or_insert_with(CustomLayout::new)
    }

    pub fn add_listener(&mut self, listener: impl FnMut(Option<&G>) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Positions `glyphs` and snaps them to whole pixels.
    ///
    /// Listeners are notified after the flow strategies only; the custom
    /// path and empty text notify nobody. Notification happens after the
    /// snap, so the last glyph a listener sees is already at its final
    /// integer position.
    pub fn relocate(&mut self, text: &str, glyphs: &mut [G], config: &FieldConfig) -> LayoutRoute {
        if text.is_empty() {
            return LayoutRoute::Skipped;
        }

        if config.custom_align {
            self.custom_layout()
                .align(config.type_align.as_deref(), glyphs);
            snap_to_pixels(glyphs);
            return LayoutRoute::Custom;
        }

        let layout_config = config.layout_config();
        let (strategy, route) = if config.horizontal_priority {
            let strategy = self
                .horizontal
                .get_or_insert_with(|| Box::new(HorizontalLayout::new()) as Box<dyn GlyphLayout<G>>);
            (strategy, LayoutRoute::Horizontal)
        } else {
            let strategy = self
                .vertical
                .get_or_insert_with(|| Box::new(VerticalLayout::new()) as Box<dyn GlyphLayout<G>>);
            (strategy, LayoutRoute::Vertical)
        };

        strategy.relocate(text, glyphs, config.size, &layout_config);
        snap_to_pixels(glyphs);

        log::trace!("relocated {} glyphs via {route:?}", glyphs.len());
        for listener in &mut self.listeners {
            listener(glyphs.last());
        }

        route
    }
}

/// Rounds every glyph position to the nearest integer to keep edges crisp.
fn snap_to_pixels<G: Glyph>(glyphs: &mut [G]) {
    for glyph in glyphs {
        let position = glyph.position();
        glyph.set_position(Point2D::new(position.x.round(), position.y.round()));
    }
}

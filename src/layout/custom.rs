use fxhash::FxHashMap;

use crate::glyph::Glyph;

/// A named arrangement: moves every glyph in place.
pub type Arrangement<G> = Box<dyn FnMut(&mut [G])>;

/// Layout driven by a type-align token instead of text flow.
///
/// The token selects one of the registered arrangements. Spacing and
/// direction settings are not consulted.
pub struct CustomLayout<G> {
    arrangements: FxHashMap<String, Arrangement<G>>,
}

impl<G: Glyph> Default for CustomLayout<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: Glyph> CustomLayout<G> {
    pub fn new() -> Self {
        Self {
            arrangements: FxHashMap::default(),
        }
    }

    /// Registers `arrangement` under `token`, replacing any previous one.
    pub fn register(
        &mut self,
        token: impl Into<String>,
        arrangement: impl FnMut(&mut [G]) + 'static,
    ) {
        self.arrangements.insert(token.into(), Box::new(arrangement));
    }

    pub fn contains(&self, token: &str) -> bool {
        self.arrangements.contains_key(token)
    }

    /// Runs the arrangement registered for `type_align`.
    ///
    /// Returns `false`, leaving the glyphs where they are, when no token is
    /// set or nothing is registered for it.
    pub fn align(&mut self, type_align: Option<&str>, glyphs: &mut [G]) -> bool {
        let Some(token) = type_align else {
            log::warn!("Custom alignment requested without a type-align token.");
            return false;
        };

        match self.arrangements.get_mut(token) {
            Some(arrangement) => {
                arrangement(glyphs);
                true
            }
            None => {
                log::warn!("No custom arrangement registered for {token:?}.");
                false
            }
        }
    }
}

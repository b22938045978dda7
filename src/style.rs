use fxhash::FxHashMap;

use crate::{
    layout::{Spacing, TextAlign},
    style_map::TagPath,
};

pub const FONT_FAMILY: &str = "fontFamily";
pub const FONT_SIZE: &str = "fontSize";
pub const FILL: &str = "fill";

/// Value of a single style property.
#[derive(Clone, Debug, PartialEq)]
pub enum StyleValue {
    Number(f32),
    Text(String),
    Bool(bool),
}

impl From<f32> for StyleValue {
    fn from(value: f32) -> Self {
        StyleValue::Number(value)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        StyleValue::Number(value as f32)
    }
}

impl From<bool> for StyleValue {
    fn from(value: bool) -> Self {
        StyleValue::Bool(value)
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Text(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Text(value)
    }
}

impl StyleValue {
    pub fn as_number(&self) -> Option<f32> {
        match self {
            StyleValue::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            StyleValue::Text(value) => Some(value),
            _ => None,
        }
    }
}

/// Property bag handed to glyphs.
///
/// Keys are free-form property names (`fill`, `fontSize`, ...). A partial
/// style used as a per-tag override has the same shape as a resolved one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Style {
    properties: FxHashMap<String, StyleValue>,
}

impl Style {
    /// Creates an empty style.
    pub fn new() -> Self {
        Self {
            properties: FxHashMap::default(),
        }
    }

    /// The style every character starts from before tag overrides apply.
    pub fn base() -> Self {
        Self::new()
            .with(FONT_FAMILY, "Arial")
            .with(FONT_SIZE, 20.0_f32)
            .with(FILL, "#000000")
    }

    /// Builder form of [`Self::set`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<StyleValue>) {
        self.properties.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.properties.get(key)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.properties
            .iter()
            .map(|(key, value)| (key.as_str(), value))
    }

    /// Copies every property of `other` over `self`. Conflicting keys take
    /// the value from `other`.
    pub fn merge(&mut self, other: &Style) {
        for (key, value) in &other.properties {
            self.properties.insert(key.clone(), value.clone());
        }
    }

    pub fn font_family(&self) -> Option<&str> {
        self.get(FONT_FAMILY).and_then(StyleValue::as_text)
    }

    pub fn font_size(&self) -> Option<f32> {
        self.get(FONT_SIZE).and_then(StyleValue::as_number)
    }

    pub fn fill(&self) -> Option<&str> {
        self.get(FILL).and_then(StyleValue::as_text)
    }
}

/// Per-call styling supplied together with the markup.
///
/// Holds the tag name -> override table, plus optional field-level settings
/// that are written into the field configuration when the text is set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CustomStyle {
    tags: FxHashMap<String, Style>,
    pub align: Option<TextAlign>,
    pub space_between_words: Option<Spacing>,
    pub space_between_lines: Option<Spacing>,
    pub left_to_right: Option<bool>,
    pub top_to_bottom: Option<bool>,
    pub horizontal_priority: Option<bool>,
}

impl CustomStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Self::insert_tag`].
    pub fn tag(mut self, name: &str, style: Style) -> Self {
        self.insert_tag(name, style);
        self
    }

    /// Registers the override for `name`. Tag names are case-insensitive.
    pub fn insert_tag(&mut self, name: &str, style: Style) {
        self.tags.insert(name.to_lowercase(), style);
    }

    pub fn tag_style(&self, name: &str) -> Option<&Style> {
        self.tags.get(name)
    }

    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }
}

/// Computes the style of a character from its tag path.
pub struct StyleResolver<'a> {
    default_style: &'a Style,
    custom_style: &'a CustomStyle,
}

impl<'a> StyleResolver<'a> {
    pub fn new(default_style: &'a Style, custom_style: &'a CustomStyle) -> Self {
        Self {
            default_style,
            custom_style,
        }
    }

    /// Merges the default style with the override of every tag on the path,
    /// root-most first. Tags without an override contribute nothing.
    pub fn resolve(&self, path: &TagPath) -> Style {
        let mut resolved = self.default_style.clone();

        for tag in path.styled_tags() {
            match self.custom_style.tag_style(tag) {
                Some(style) => resolved.merge(style),
                None => log::trace!("no style registered for <{tag}>"),
            }
        }

        resolved
    }
}

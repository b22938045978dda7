//! Instrumented glyph double shared by the unit tests.

use std::sync::Arc;

use euclid::default::{Point2D, Size2D};
use parking_lot::Mutex;

use crate::{glyph::Glyph, style::Style};

/// Record of everything that happened to the glyphs of one factory.
#[derive(Debug, Default)]
pub struct Ledger {
    pub created: Vec<usize>,
    pub restyled: Vec<usize>,
    pub disposed: Vec<usize>,
}

impl Ledger {
    pub fn disposal_count(&self, id: usize) -> usize {
        self.disposed.iter().filter(|disposed| **disposed == id).count()
    }
}

pub type SharedLedger = Arc<Mutex<Ledger>>;

/// Glyph whose extent follows `fontSize`: `fontSize / 2` wide and
/// `fontSize` tall. Line breaks are zero-width.
#[derive(Debug)]
pub struct TestGlyph {
    pub id: usize,
    pub character: char,
    pub style: Style,
    pub position: Point2D<f32>,
    pub disposed: bool,
    ledger: SharedLedger,
}

impl TestGlyph {
    pub fn new(character: char, style: &Style) -> Self {
        Self::with_ledger(0, character, style, SharedLedger::default())
    }

    fn with_ledger(id: usize, character: char, style: &Style, ledger: SharedLedger) -> Self {
        Self {
            id,
            character,
            style: style.clone(),
            position: Point2D::zero(),
            disposed: false,
            ledger,
        }
    }
}

impl Glyph for TestGlyph {
    fn character(&self) -> char {
        self.character
    }

    fn set_style(&mut self, style: &Style) {
        self.style = style.clone();
        self.ledger.lock().restyled.push(self.id);
    }

    fn position(&self) -> Point2D<f32> {
        self.position
    }

    fn set_position(&mut self, position: Point2D<f32>) {
        self.position = position;
    }

    fn size(&self) -> Size2D<f32> {
        let font_size = self.style.font_size().unwrap_or(20.0);
        if self.character == '\n' {
            Size2D::new(0.0, font_size)
        } else {
            Size2D::new(font_size / 2.0, font_size)
        }
    }

    fn dispose(&mut self, recursive: bool) {
        assert!(recursive, "glyph {} disposed non-recursively", self.id);
        assert!(!self.disposed, "glyph {} disposed twice", self.id);
        self.disposed = true;
        self.ledger.lock().disposed.push(self.id);
    }
}

/// Returns a factory numbering its glyphs from 1, and the ledger it writes.
pub fn factory() -> (impl FnMut(char, &Style) -> TestGlyph + 'static, SharedLedger) {
    let ledger = SharedLedger::default();
    let shared = Arc::clone(&ledger);
    let mut next_id = 0usize;

    let create = move |character: char, style: &Style| {
        next_id += 1;
        shared.lock().created.push(next_id);
        TestGlyph::with_ledger(next_id, character, style, Arc::clone(&shared))
    };

    (create, ledger)
}

/// Glyphs for `text` in the base style, for layout tests.
pub fn glyphs(text: &str) -> Vec<TestGlyph> {
    text.chars()
        .map(|ch| TestGlyph::new(ch, &Style::base()))
        .collect()
}

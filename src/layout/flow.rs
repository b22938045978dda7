//! Line breaking and placement shared by the horizontal and vertical
//! strategies. Both run the same algorithm; only the axis glyphs advance
//! along (main) and the axis lines stack along (cross) differ.

use euclid::default::{Point2D, Size2D};

use super::{LayoutConfig, TextAlign};
use crate::glyph::Glyph;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Axis {
    /// Glyphs advance along x, lines stack along y.
    Horizontal,
    /// Glyphs advance along y, columns stack along x.
    Vertical,
}

impl Axis {
    fn main(self, size: Size2D<f32>) -> f32 {
        match self {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }

    fn cross(self, size: Size2D<f32>) -> f32 {
        match self {
            Axis::Horizontal => size.height,
            Axis::Vertical => size.width,
        }
    }

    fn point(self, main: f32, cross: f32) -> Point2D<f32> {
        match self {
            Axis::Horizontal => Point2D::new(main, cross),
            Axis::Vertical => Point2D::new(cross, main),
        }
    }

    fn size(self, main: f32, cross: f32) -> Size2D<f32> {
        match self {
            Axis::Horizontal => Size2D::new(main, cross),
            Axis::Vertical => Size2D::new(cross, main),
        }
    }

    /// Offset of a glyph inside its line: rows sit on their bottom edge,
    /// columns are centered.
    fn cross_offset(self, thickness: f32, glyph_cross: f32) -> f32 {
        match self {
            Axis::Horizontal => thickness - glyph_cross,
            Axis::Vertical => (thickness - glyph_cross) / 2.0,
        }
    }
}

/// Axis and direction of one flow pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct FlowOptions {
    pub axis: Axis,
    /// Glyphs advance from the far end of the main axis.
    pub mirror_main: bool,
    /// Lines stack from the far end of the cross axis.
    pub mirror_cross: bool,
}

/// Summary of the last flow pass.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FlowMetrics {
    pub lines: usize,
    /// Size of the laid-out block, excluding trailing separators.
    pub extent: Size2D<f32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SlotKind {
    Word,
    Separator,
    Break,
}

#[derive(Clone, Copy, Debug)]
struct Slot {
    index: usize,
    kind: SlotKind,
    advance: f32,
}

#[derive(Debug, Default)]
struct Line {
    slots: Vec<Slot>,
    /// Closed by a `'\n'` rather than by wrapping.
    ended_by_break: bool,
    /// Started because the previous line overflowed.
    wrapped: bool,
}

impl Line {
    fn has_content(&self) -> bool {
        self.slots.iter().any(|slot| slot.kind == SlotKind::Word)
    }

    fn content_end(&self) -> usize {
        self.slots
            .iter()
            .rposition(|slot| slot.kind == SlotKind::Word)
            .map_or(0, |index| index + 1)
    }

    /// Extent up to the end of the last word.
    fn extent(&self) -> f32 {
        self.slots[..self.content_end()]
            .iter()
            .map(|slot| slot.advance)
            .sum()
    }

    /// Extent including trailing separators; where the next word would start.
    fn advance(&self) -> f32 {
        self.slots.iter().map(|slot| slot.advance).sum()
    }

    fn inner_separators(&self) -> usize {
        self.slots[..self.content_end()]
            .iter()
            .filter(|slot| slot.kind == SlotKind::Separator)
            .count()
    }
}

/// Positions `glyphs` (index-aligned with the characters of `text`) inside
/// `bounds`.
pub(super) fn flow<G: Glyph>(
    text: &str,
    glyphs: &mut [G],
    bounds: Size2D<f32>,
    config: &LayoutConfig,
    options: FlowOptions,
) -> FlowMetrics {
    debug_assert_eq!(text.chars().count(), glyphs.len());

    let axis = options.axis;
    let limit = (axis.main(bounds) > 0.0).then_some(axis.main(bounds));
    let word_spacing =
        (config.space_between_words >= 0).then_some(config.space_between_words as f32);
    let gap = config.space_between_lines.max(0) as f32;

    // Stage 1: split the glyphs into lines.
    let lines = break_lines(text, glyphs, axis, limit, word_spacing);
    if lines.is_empty() {
        return FlowMetrics::default();
    }

    let extents: Vec<f32> = lines.iter().map(Line::extent).collect();
    let thicknesses: Vec<f32> = lines
        .iter()
        .map(|line| {
            line.slots
                .iter()
                .map(|slot| axis.cross(glyphs[slot.index].size()))
                .fold(0.0, f32::max)
        })
        .collect();

    let max_extent = extents.iter().copied().fold(0.0, f32::max);
    let total_cross = thicknesses.iter().sum::<f32>() + gap * (lines.len() - 1) as f32;
    let target_main = limit.unwrap_or(max_extent);
    let target_cross = match axis.cross(bounds) {
        cross if cross > 0.0 => cross,
        _ => total_cross,
    };

    // Stage 2: place every line with its alignment offset.
    let last_line = lines.len() - 1;
    let mut cursor = 0.0;

    for (line_index, line) in lines.iter().enumerate() {
        let thickness = thicknesses[line_index];
        let free = target_main - extents[line_index];

        let (offset, stretch) = match config.text_align {
            TextAlign::Left => (0.0, 0.0),
            TextAlign::Center => (free / 2.0, 0.0),
            TextAlign::Right => (free, 0.0),
            TextAlign::Justify => {
                let separators = line.inner_separators();
                if line_index != last_line
                    && !line.ended_by_break
                    && separators > 0
                    && free > 0.0
                {
                    (0.0, free / separators as f32)
                } else {
                    (0.0, 0.0)
                }
            }
        };

        let content_end = line.content_end();
        let mut running = offset;

        for (slot_index, slot) in line.slots.iter().enumerate() {
            let glyph = &mut glyphs[slot.index];
            let size = glyph.size();

            let mut main = running;
            let mut cross = cursor + axis.cross_offset(thickness, axis.cross(size));
            if options.mirror_main {
                main = target_main - main - axis.main(size);
            }
            if options.mirror_cross {
                cross = target_cross - cross - axis.cross(size);
            }
            glyph.set_position(axis.point(main, cross));

            running += slot.advance;
            if slot.kind == SlotKind::Separator && slot_index < content_end {
                running += stretch;
            }
        }

        cursor += thickness + gap;
    }

    FlowMetrics {
        lines: lines.len(),
        extent: axis.size(max_extent, total_cross),
    }
}

fn break_lines<G: Glyph>(
    text: &str,
    glyphs: &[G],
    axis: Axis,
    limit: Option<f32>,
    word_spacing: Option<f32>,
) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut line = Line::default();
    let mut word: Vec<Slot> = Vec::new();

    for (index, ch) in text.chars().enumerate().take(glyphs.len()) {
        let main = axis.main(glyphs[index].size());

        if ch == '\n' {
            place_word(&mut line, &mut lines, std::mem::take(&mut word), limit);
            line.slots.push(Slot {
                index,
                kind: SlotKind::Break,
                advance: 0.0,
            });
            line.ended_by_break = true;
            lines.push(std::mem::take(&mut line));
        } else if ch.is_whitespace() {
            place_word(&mut line, &mut lines, std::mem::take(&mut word), limit);
            // separators at the start of a wrapped line collapse
            let advance = if line.wrapped && !line.has_content() {
                0.0
            } else {
                word_spacing.unwrap_or(main)
            };
            line.slots.push(Slot {
                index,
                kind: SlotKind::Separator,
                advance,
            });
        } else {
            word.push(Slot {
                index,
                kind: SlotKind::Word,
                advance: main,
            });
        }
    }

    place_word(&mut line, &mut lines, word, limit);
    if !line.slots.is_empty() {
        lines.push(line);
    }

    lines
}

/// Appends a word to the current line, wrapping before it when it would
/// overflow. Words longer than the limit are broken per character.
fn place_word(line: &mut Line, lines: &mut Vec<Line>, word: Vec<Slot>, limit: Option<f32>) {
    if word.is_empty() {
        return;
    }

    let Some(limit) = limit else {
        line.slots.extend(word);
        return;
    };

    let width: f32 = word.iter().map(|slot| slot.advance).sum();
    if line.has_content() && line.advance() + width > limit {
        wrap(line, lines);
    }
    if line.advance() + width <= limit {
        line.slots.extend(word);
        return;
    }

    for slot in word {
        if line.has_content() && line.advance() + slot.advance > limit {
            wrap(line, lines);
        }
        line.slots.push(slot);
    }
}

fn wrap(line: &mut Line, lines: &mut Vec<Line>) {
    let finished = std::mem::replace(
        line,
        Line {
            wrapped: true,
            ..Line::default()
        },
    );
    lines.push(finished);
}

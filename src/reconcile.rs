use crate::{
    diff::{EditKind, EditScript},
    glyph::{Glyph, GlyphFactory},
    style::StyleResolver,
    style_map::StyleMap,
};

/// What a reconciliation pass did to the glyph sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReconcileStats {
    /// Unchanged glyphs left untouched.
    pub kept: usize,
    /// Unchanged glyphs whose style was re-applied.
    pub restyled: usize,
    pub inserted: usize,
    pub removed: usize,
}

/// Applies `script` to `glyphs` in one left-to-right pass.
///
/// `glyphs` must be index-aligned with `previous` on entry and is
/// index-aligned with `current` on return. Glyphs under equal runs keep their
/// identity; removed glyphs are disposed before being dropped.
///
/// # Panics
///
/// Panics when the script does not describe `previous` -> `current`, which
/// would leave the glyphs and the style map out of step.
pub fn reconcile<G: Glyph>(
    script: &EditScript,
    previous: &StyleMap,
    current: &StyleMap,
    glyphs: &mut Vec<G>,
    resolver: &StyleResolver<'_>,
    factory: &mut dyn GlyphFactory<G>,
) -> ReconcileStats {
    assert_eq!(
        glyphs.len(),
        previous.len(),
        "glyph sequence out of step with the previous style map"
    );

    let mut stats = ReconcileStats::default();
    // `count` indexes glyphs and `current`; `old_count` indexes `previous`.
    let mut count = 0usize;
    let mut old_count = 0usize;

    for run in script.runs() {
        match run.kind {
            EditKind::Equal => {
                for _ in run.text.chars() {
                    let entry = current
                        .get(count)
                        .unwrap_or_else(|| panic!("equal run past the style map at {count}"));
                    let was_root = previous
                        .get(old_count)
                        .unwrap_or_else(|| panic!("equal run past the old style map at {old_count}"))
                        .tag_path
                        .is_root();
                    let glyph = glyphs
                        .get_mut(count)
                        .unwrap_or_else(|| panic!("equal run past the glyph sequence at {count}"));

                    if entry.tag_path.is_root() && was_root {
                        stats.kept += 1;
                    } else {
                        glyph.set_style(&resolver.resolve(&entry.tag_path));
                        stats.restyled += 1;
                    }

                    count += 1;
                    old_count += 1;
                }
            }
            EditKind::Insert => {
                for character in run.text.chars() {
                    let entry = current
                        .get(count)
                        .unwrap_or_else(|| panic!("insert run past the style map at {count}"));
                    debug_assert_eq!(entry.character, character);

                    let style = resolver.resolve(&entry.tag_path);
                    glyphs.insert(count, factory.create(character, &style));
                    log::trace!("inserted {character:?} at {count} ({})", entry.tag_path);

                    stats.inserted += 1;
                    count += 1;
                }
            }
            EditKind::Delete => {
                for _ in run.text.chars() {
                    assert!(
                        count < glyphs.len(),
                        "delete run past the glyph sequence at {count}"
                    );
                    let mut glyph = glyphs.remove(count);
                    log::trace!("removing {:?} at {count}", glyph.character());
                    glyph.dispose(true);

                    stats.removed += 1;
                    old_count += 1;
                }
            }
        }
    }

    assert_eq!(
        glyphs.len(),
        current.len(),
        "glyph sequence out of step with the style map after reconciliation"
    );

    stats
}

use similar::{Algorithm, DiffTag, capture_diff_slices};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditKind {
    Equal,
    Insert,
    Delete,
}

/// A run of consecutive characters sharing one edit kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditRun {
    pub kind: EditKind,
    pub text: String,
}

impl EditRun {
    pub fn new(kind: EditKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Number of characters in the run.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Character-level edit script turning one text into another.
///
/// Computed with Myers' algorithm, so the equal runs form a longest common
/// subsequence and the script is identical for identical inputs. A
/// replacement shows up as a delete run followed by an insert run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditScript {
    runs: Vec<EditRun>,
}

impl EditScript {
    pub fn diff(previous: &str, new: &str) -> Self {
        let old: Vec<char> = previous.chars().collect();
        let new: Vec<char> = new.chars().collect();
        let mut script = Self::default();

        if old.is_empty() {
            script.push(EditKind::Insert, &new);
            return script;
        }
        if new.is_empty() {
            script.push(EditKind::Delete, &old);
            return script;
        }

        for op in capture_diff_slices(Algorithm::Myers, &old, &new) {
            let (tag, old_range, new_range) = op.as_tag_tuple();
            match tag {
                DiffTag::Equal => script.push(EditKind::Equal, &old[old_range]),
                DiffTag::Delete => script.push(EditKind::Delete, &old[old_range]),
                DiffTag::Insert => script.push(EditKind::Insert, &new[new_range]),
                DiffTag::Replace => {
                    script.push(EditKind::Delete, &old[old_range]);
                    script.push(EditKind::Insert, &new[new_range]);
                }
            }
        }

        script
    }

    pub fn runs(&self) -> &[EditRun] {
        &self.runs
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Total number of characters covered by runs of `kind`.
    pub fn count(&self, kind: EditKind) -> usize {
        self.runs
            .iter()
            .filter(|run| run.kind == kind)
            .map(EditRun::len)
            .sum()
    }

    /// Appends characters, extending the last run when the kind matches.
    fn push(&mut self, kind: EditKind, chars: &[char]) {
        if chars.is_empty() {
            return;
        }

        match self.runs.last_mut() {
            Some(last) if last.kind == kind => last.text.extend(chars),
            _ => self.runs.push(EditRun {
                kind,
                text: chars.iter().collect(),
            }),
        }
    }
}

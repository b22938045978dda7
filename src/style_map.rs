use std::{fmt, sync::Arc};

use crate::markup::MarkupNode;

/// Synthetic tag every path starts from. Characters outside any element
/// carry only this tag.
pub const ROOT_TAG: &str = "text";

/// Chain of enclosing tag names of a character, root-most first.
///
/// All characters of one text node share the same path allocation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TagPath(Arc<[String]>);

impl TagPath {
    /// Path of characters outside any element: just [`ROOT_TAG`].
    pub fn root() -> Self {
        Self(Arc::from(vec![ROOT_TAG.to_string()]))
    }

    /// Path for the children of an element named `tag`.
    ///
    /// The first descent replaces the synthetic root, deeper ones append.
    pub fn descend(&self, tag: &str) -> Self {
        let tag = tag.to_lowercase();
        if self.is_root() {
            Self(Arc::from(vec![tag]))
        } else {
            let mut tags = self.0.to_vec();
            tags.push(tag);
            Self(Arc::from(tags))
        }
    }

    /// Whether this path is the bare root, i.e. the character is untagged.
    pub fn is_root(&self) -> bool {
        self.0.len() == 1 && self.0[0] == ROOT_TAG
    }

    /// Lowercased tag names, outermost first.
    pub fn tags(&self) -> &[String] {
        &self.0
    }

    /// Tags that may carry a style override.
    pub fn styled_tags(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .map(String::as_str)
            .filter(|tag| *tag != ROOT_TAG)
    }
}

impl fmt::Display for TagPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(">"))
    }
}

/// One character of the plain text and the tags enclosing it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleMapEntry {
    pub character: char,
    /// Enclosing tags; shared by every character of the same text node.
    pub tag_path: TagPath,
}

/// One entry per character of the flattened text, in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleMap {
    entries: Vec<StyleMapEntry>,
}

impl StyleMap {
    /// Flattens a markup tree depth-first.
    pub fn build(nodes: &[MarkupNode]) -> Self {
        let mut entries = Vec::new();
        collect(nodes, &TagPath::root(), &mut entries);
        Self { entries }
    }

    /// Number of characters, equal to the glyph count after reconciliation.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&StyleMapEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[StyleMapEntry] {
        &self.entries
    }

    /// The text with all markup stripped.
    pub fn plain_text(&self) -> String {
        self.entries.iter().map(|entry| entry.character).collect()
    }
}

fn collect(nodes: &[MarkupNode], path: &TagPath, entries: &mut Vec<StyleMapEntry>) {
    for node in nodes {
        match node {
            MarkupNode::Text(content) => {
                entries.extend(content.chars().map(|character| StyleMapEntry {
                    character,
                    tag_path: path.clone(),
                }));
            }
            MarkupNode::Element { tag, children } => {
                collect(children, &path.descend(tag), entries);
            }
        }
    }
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::{MarkupParser, TagParser};

    fn build(markup: &str) -> StyleMap {
        StyleMap::build(&TagParser::new().parse(markup).unwrap())
    }

    fn paths(map: &StyleMap) -> Vec<String> {
        map.entries()
            .iter()
            .map(|entry| format!("{}:{}", entry.character, entry.tag_path))
            .collect()
    }

    #[test]
    fn test_root_text() {
        let map = build("ab");
        assert_eq!(paths(&map), vec!["a:text", "b:text"]);
        assert!(map.get(0).unwrap().tag_path.is_root());
    }

    #[test]
    fn test_nesting_replaces_root_then_appends() {
        let map = build("a<B>b<i>c</i>d</B>e");
        assert_eq!(
            paths(&map),
            vec!["a:text", "b:b", "c:b>i", "d:b", "e:text"]
        );
        assert_eq!(map.plain_text(), "abcde");
    }

    #[test]
    fn test_siblings_do_not_inherit() {
        let map = build("<b>x</b><i>y</i>");
        assert_eq!(paths(&map), vec!["x:b", "y:i"]);
    }

    #[test]
    fn test_empty_elements_contribute_nothing() {
        let map = build("<b></b><i><u></u></i>z");
        assert_eq!(paths(&map), vec!["z:text"]);
        assert_eq!(map.len(), map.plain_text().chars().count());
    }

    #[test]
    fn test_text_node_shares_path() {
        let map = build("<b>xy</b>");
        let first = &map.get(0).unwrap().tag_path;
        let second = &map.get(1).unwrap().tag_path;
        assert!(Arc::ptr_eq(&first.0, &second.0));
    }
}

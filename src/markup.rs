use html5ever::{
    LocalName, Namespace, ParseOpts, QualName, parse_fragment,
    tendril::TendrilSink,
    tree_builder::TreeBuilderOpts,
};
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use thiserror::Error;

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// A node of a parsed markup tree, in document order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MarkupNode {
    /// An element and its children. Void elements such as `<br>` have none.
    Element {
        tag: String,
        children: Vec<MarkupNode>,
    },
    /// Decoded character data.
    Text(String),
}

impl MarkupNode {
    pub fn element(tag: impl Into<String>, children: Vec<MarkupNode>) -> Self {
        MarkupNode::Element {
            tag: tag.into(),
            children,
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        MarkupNode::Text(content.into())
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MarkupError {
    /// The parser hit a construct it would have had to recover from.
    #[error("malformed markup: {message}")]
    Malformed { message: String },
}

/// Turns a markup string into a tree of element and text nodes.
pub trait MarkupParser {
    fn parse(&self, markup: &str) -> Result<Vec<MarkupNode>, MarkupError>;
}

/// HTML fragment parser, as if the markup were assigned to the `innerHTML`
/// of a `<body>`.
///
/// Void elements, implied end tags and named character references follow
/// the HTML parsing rules. Comments, doctypes and attributes are dropped.
/// By default malformed input is recovered from the way browsers do;
/// [`TagParser::strict`] reports the first parse error instead.
#[derive(Clone, Copy, Debug, Default)]
pub struct TagParser {
    strict: bool,
}

impl TagParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// A parser that fails on any markup the HTML parser had to repair.
    pub fn strict() -> Self {
        Self { strict: true }
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }
}

impl MarkupParser for TagParser {
    fn parse(&self, markup: &str) -> Result<Vec<MarkupNode>, MarkupError> {
        let opts = ParseOpts {
            tree_builder: TreeBuilderOpts {
                exact_errors: self.strict,
                drop_doctype: true,
                ..Default::default()
            },
            ..Default::default()
        };
        let context = QualName::new(
            None,
            Namespace::from(HTML_NAMESPACE),
            LocalName::from("body"),
        );
        let dom = parse_fragment(RcDom::default(), opts, context, Vec::new()).one(markup);

        if let Some(error) = dom.errors.first() {
            if self.strict {
                return Err(MarkupError::Malformed {
                    message: error.to_string(),
                });
            }
            log::trace!("recovered from {} markup errors, first: {error}", dom.errors.len());
        }

        // fragments are parsed into a synthetic <html> element under the document
        let mut nodes = Vec::new();
        for wrapper in dom.document.children.borrow().iter() {
            for child in wrapper.children.borrow().iter() {
                convert(child, &mut nodes);
            }
        }

        Ok(nodes)
    }
}

/// Appends the markup node for `handle` to `out`. Text separated only by
/// dropped nodes is merged into one text node.
fn convert(handle: &Handle, out: &mut Vec<MarkupNode>) {
    match &handle.data {
        NodeData::Text { contents } => {
            let contents = contents.borrow();
            if contents.is_empty() {
                return;
            }
            match out.last_mut() {
                Some(MarkupNode::Text(text)) => text.push_str(&contents),
                _ => out.push(MarkupNode::Text(contents.to_string())),
            }
        }
        NodeData::Element { name, .. } => {
            let mut children = Vec::new();
            for child in handle.children.borrow().iter() {
                convert(child, &mut children);
            }
            out.push(MarkupNode::element(name.local.to_string(), children));
        }
        _ => {}
    }
}

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

/// A generic XML tree node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct XmlNode {
    /// Element tag name.
    pub tag: String,
    /// XML attributes keyed by name.
    pub attributes: BTreeMap<String, String>,
    /// Child elements.
    pub children: Vec<XmlNode>,
    /// Optional text content.
    pub text: Option<String>,
    /// 1-based line of the opening tag, when parsed from source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl XmlNode {
    /// Create a new XML node with no attributes, children, or text.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
            text: None,
            line: None,
        }
    }

    /// Builder-style helper to set an attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Builder-style helper to set the text content.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Builder-style helper to append a child.
    pub fn with_child(mut self, child: XmlNode) -> Self {
        self.children.push(child);
        self
    }

    /// Iterate over this node and all descendants in document order.
    ///
    /// Every parent is yielded before any of its children, together with the
    /// raw structural path of both.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: vec![Visit {
                node: self,
                path: format!("/{}", self.tag),
                parent_path: None,
            }],
        }
    }
}

/// One step of a document-order walk.
#[derive(Debug, Clone)]
pub struct Visit<'a> {
    /// The visited node.
    pub node: &'a XmlNode,
    /// Raw structural path of `node`.
    pub path: String,
    /// Raw structural path of the parent, `None` for the walk root.
    pub parent_path: Option<String>,
}

/// Pre-order iterator returned by [`XmlNode::walk`].
#[derive(Debug)]
pub struct Walk<'a> {
    stack: Vec<Visit<'a>>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = Visit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let visit = self.stack.pop()?;

        let mut tag_counts: HashMap<&str, usize> = HashMap::new();
        for child in &visit.node.children {
            *tag_counts.entry(child.tag.as_str()).or_default() += 1;
        }

        let mut seen: HashMap<&str, usize> = HashMap::new();
        let mut pending = Vec::with_capacity(visit.node.children.len());
        for child in &visit.node.children {
            let ordinal = seen.entry(child.tag.as_str()).or_default();
            *ordinal += 1;
            let path = if tag_counts[child.tag.as_str()] > 1 {
                format!("{}/{}[{}]", visit.path, child.tag, ordinal)
            } else {
                format!("{}/{}", visit.path, child.tag)
            };
            pending.push(Visit {
                node: child,
                path,
                parent_path: Some(visit.path.clone()),
            });
        }

        // Reversed so the first child is popped next.
        self.stack.extend(pending.into_iter().rev());
        Some(visit)
    }
}

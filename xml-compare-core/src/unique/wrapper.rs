use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use crate::XmlNode;

/// Comparison unit for one element.
///
/// Two wrappers are equal when their attributes and text are equal. Tag,
/// position, line and source document are carried for reporting only and do
/// not take part in equality or hashing.
#[derive(Debug, Clone, Serialize)]
pub struct NodeWrapper {
    /// Element tag name.
    pub tag: String,
    /// Raw structural path of the element within its own document.
    pub raw_path: String,
    /// Source line hint, when the tree was parsed from text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    /// XML attributes keyed by name.
    pub attributes: BTreeMap<String, String>,
    /// Optional text content.
    pub text: Option<String>,
}

impl NodeWrapper {
    /// Wrap `node`, found at `raw_path` in its document.
    pub fn new(node: &XmlNode, raw_path: impl Into<String>) -> Self {
        Self {
            tag: node.tag.clone(),
            raw_path: raw_path.into(),
            line: node.line,
            attributes: node.attributes.clone(),
            text: node.text.clone(),
        }
    }
}

impl PartialEq for NodeWrapper {
    fn eq(&self, other: &Self) -> bool {
        self.attributes == other.attributes && self.text == other.text
    }
}

impl Eq for NodeWrapper {}

impl Hash for NodeWrapper {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.attributes.hash(state);
        self.text.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use super::NodeWrapper;
    use crate::XmlNode;

    fn hash_of(wrapper: &NodeWrapper) -> u64 {
        let mut hasher = DefaultHasher::new();
        wrapper.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn equality_ignores_tag_position_and_line() {
        let mut left_node = XmlNode::new("Item").with_attribute("name", "x").with_text("1");
        left_node.line = Some(3);
        let mut right_node = XmlNode::new("Other").with_attribute("name", "x").with_text("1");
        right_node.line = Some(40);

        let left = NodeWrapper::new(&left_node, "/Root/Item[1]");
        let right = NodeWrapper::new(&right_node, "/Doc/Other");

        assert_eq!(left, right);
        assert_eq!(hash_of(&left), hash_of(&right));
    }

    #[test]
    fn attributes_and_text_both_matter() {
        let base = XmlNode::new("Item").with_attribute("name", "x");
        let with_text = base.clone().with_text("1");
        let other_attr = XmlNode::new("Item").with_attribute("name", "y");

        let base = NodeWrapper::new(&base, "/a");
        assert_ne!(base, NodeWrapper::new(&with_text, "/a"));
        assert_ne!(base, NodeWrapper::new(&other_attr, "/a"));
    }
}

use std::collections::{BTreeMap, HashMap};

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::unique::wrapper::NodeWrapper;
use crate::XmlNode;

/// Default cap on the uniqueness fragment length.
pub const DEFAULT_MAX_TEXT_LEN: usize = 80;

/// Unique path -> every element collapsing onto it, in document order.
pub type PathMap = BTreeMap<String, Vec<NodeWrapper>>;

/// Configures how unique paths are derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UniquePathOptions {
    /// Attribute names tried in order; the first one present on an element
    /// supplies its uniqueness fragment.
    pub attributes: Vec<String>,
    /// Fragments longer than this keep only their first `max_text_len - 1`
    /// characters.
    pub max_text_len: usize,
}

impl Default for UniquePathOptions {
    fn default() -> Self {
        Self {
            attributes: Vec::new(),
            max_text_len: DEFAULT_MAX_TEXT_LEN,
        }
    }
}

/// Path map of one document.
///
/// Built once from a tree and immutable afterwards. A path holding more than
/// one element is a path the configured heuristics could not make unique; it
/// is still valid, comparable data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct UniquePaths {
    paths: PathMap,
}

impl UniquePaths {
    /// Derive the unique path of every element under `root`.
    pub fn build(root: &XmlNode, opts: &UniquePathOptions) -> Self {
        // Raw structural path -> unique path. Only lives for this build.
        let mut translations: HashMap<String, String> = HashMap::new();
        let mut paths = PathMap::new();
        let mut nodes = 0usize;

        for visit in root.walk() {
            nodes += 1;
            let fragment = sanitize_fragment(
                uniqueness_fragment(visit.node, &opts.attributes),
                opts.max_text_len,
            );

            let parent = parent_unique_path(&translations, visit.parent_path.as_deref());

            let unique = format!("{parent}/{}{fragment}", visit.node.tag);
            trace!("{} -> {}", visit.path, unique);

            paths
                .entry(unique.clone())
                .or_default()
                .push(NodeWrapper::new(visit.node, visit.path.as_str()));
            translations.insert(visit.path, unique);
        }

        let built = Self { paths };
        debug!(
            "derived {} unique paths from {} elements ({} non-unique)",
            built.len(),
            nodes,
            built.non_unique().count()
        );
        built
    }

    /// The full path map.
    pub fn paths(&self) -> &PathMap {
        &self.paths
    }

    /// Elements collapsing onto `path`.
    pub fn get(&self, path: &str) -> Option<&[NodeWrapper]> {
        self.paths.get(path).map(Vec::as_slice)
    }

    /// Number of distinct unique paths.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Paths shared by more than one element.
    pub fn non_unique(&self) -> impl Iterator<Item = (&str, &[NodeWrapper])> + '_ {
        self.paths
            .iter()
            .filter(|(_, nodes)| nodes.len() > 1)
            .map(|(path, nodes)| (path.as_str(), nodes.as_slice()))
    }
}

/// Unique path of a node's parent, "" for the document root.
///
/// Parents are walked before their children, so a parent without a
/// translation is a traversal bug and panics.
fn parent_unique_path(translations: &HashMap<String, String>, parent_raw: Option<&str>) -> String {
    let Some(parent_raw) = parent_raw else {
        return String::new();
    };
    assert!(
        translations.contains_key(parent_raw),
        "parent {parent_raw} must be visited before its children"
    );
    translate(translations, parent_raw)
}

/// First preferred attribute present on the node, else its text, else "".
///
/// A preferred attribute with an empty value falls through to the text.
fn uniqueness_fragment<'a>(node: &'a XmlNode, attributes: &[String]) -> &'a str {
    let preferred = attributes
        .iter()
        .find_map(|name| node.attributes.get(name))
        .map(String::as_str)
        .unwrap_or("");

    if preferred.is_empty() {
        node.text.as_deref().unwrap_or("")
    } else {
        preferred
    }
}

/// Strip characters that would break path segmentation and cap the length.
fn sanitize_fragment(fragment: &str, max_len: usize) -> String {
    let cleaned: String = fragment
        .chars()
        .filter(|c| !matches!(c, '\n' | '\r' | '/'))
        .collect();

    if cleaned.chars().count() > max_len {
        cleaned.chars().take(max_len.saturating_sub(1)).collect()
    } else {
        cleaned
    }
}

/// Translate a raw structural path using its longest translated prefix.
///
/// Falls back to `raw_path` unchanged when no prefix has a translation.
fn translate(translations: &HashMap<String, String>, raw_path: &str) -> String {
    let mut prefix = raw_path;
    loop {
        if let Some(translated) = translations.get(prefix) {
            return format!("{translated}{}", &raw_path[prefix.len()..]);
        }
        match prefix.rfind('/') {
            Some(cut) if cut > 0 => prefix = &prefix[..cut],
            _ => return raw_path.to_string(),
        }
    }
}

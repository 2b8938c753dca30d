//! Navigation tree grouping note identities by directory.

use std::collections::BTreeMap;

use serde::Serialize;

use super::item_path::ItemPath;

/// Key under which a node's own identity is serialized.
pub const LINK_KEY: &str = "link";

/// A node of the navigation tree.
///
/// Directories carry children; notes carry a link back to their identity.
/// A note and a folder sharing a name collapse into one node with both.
///
/// Children are flattened next to `link` when serialized. A linked node with
/// a child named `link` therefore emits the key twice; see
/// [`NavNode::shadows_link_child`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NavNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<ItemPath>,
    #[serde(flatten)]
    pub children: BTreeMap<String, NavNode>,
}

impl NavNode {
    pub fn leaf(link: ItemPath) -> Self {
        Self { link: Some(link), children: BTreeMap::new() }
    }

    pub fn child(&self, name: &str) -> Option<&NavNode> {
        self.children.get(name)
    }

    pub fn is_leaf(&self) -> bool {
        self.link.is_some()
    }

    /// Whether the serialized `link` key of this node collides with a child
    /// named `link`.
    pub fn shadows_link_child(&self) -> bool {
        self.link.is_some() && self.children.contains_key(LINK_KEY)
    }
}

/// Menu tree mirroring the directory hierarchy of the indexed notes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NavTree {
    root: NavNode,
}

impl NavTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from note identities.
    pub fn from_paths<'a>(paths: impl IntoIterator<Item = &'a ItemPath>) -> Self {
        let mut tree = Self::new();
        for path in paths {
            tree.insert(path);
        }
        tree
    }

    /// Attach `path` as a leaf, creating intermediate nodes as needed.
    pub fn insert(&mut self, path: &ItemPath) {
        let Some((last, dirs)) = path.components().split_last() else {
            return;
        };

        let mut node = &mut self.root;
        for dir in dirs {
            node = node.children.entry(dir.clone()).or_default();
        }
        let leaf = node.children.entry(last.clone()).or_default();
        leaf.link = Some(path.clone());
        let collides = leaf.shadows_link_child() || node.shadows_link_child();
        if collides {
            tracing::warn!(id = %path, "note named `link` clashes with its parent's link key");
        }
    }

    pub fn root(&self) -> &NavNode {
        &self.root
    }

    /// Node reached by following `components` from the root.
    pub fn get(&self, components: &[&str]) -> Option<&NavNode> {
        components.iter().try_fold(&self.root, |node, name| node.child(name))
    }

    /// Every linked identity, depth first in name order.
    pub fn links(&self) -> Vec<&ItemPath> {
        fn collect<'a>(node: &'a NavNode, out: &mut Vec<&'a ItemPath>) {
            for child in node.children.values() {
                if let Some(link) = &child.link {
                    out.push(link);
                }
                collect(child, out);
            }
        }

        let mut out = Vec::new();
        collect(&self.root, &mut out);
        out
    }

    pub fn leaf_count(&self) -> usize {
        self.links().len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    /// Indented text outline, one entry per line.
    pub fn outline(&self) -> String {
        fn write(node: &NavNode, depth: usize, out: &mut String) {
            for (name, child) in &node.children {
                out.push_str(&"  ".repeat(depth));
                out.push_str(name);
                if let Some(link) = &child.link {
                    out.push_str(" -> ");
                    out.push_str(&link.to_string());
                }
                out.push('\n');
                write(child, depth + 1, out);
            }
        }

        let mut out = String::new();
        write(&self.root, 0, &mut out);
        out
    }
}

//! Bound tree
//!
//! The output of binding: an owned tree of `(node, children)` pairs. It is
//! built fresh from a store snapshot and never shares records with the store.

use serde::Serialize;

use super::node::Node;
use crate::error::AdminBarResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoundNode {
    #[serde(flatten)]
    pub node: Node,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<BoundNode>,
}

impl BoundNode {
    pub fn new(node: Node) -> Self {
        Self {
            node,
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.node.id
    }

    pub fn is_group(&self) -> bool {
        self.node.is_group()
    }

    /// Whether this node opens a submenu.
    pub fn is_parent(&self) -> bool {
        !self.children.is_empty()
    }

    /// Depth-first search of this subtree, including `self`.
    pub fn find(&self, id: &str) -> Option<&BoundNode> {
        if self.id() == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    /// Pre-order walk of this subtree, including `self`.
    pub fn walk(&self) -> Vec<&BoundNode> {
        let mut out = vec![self];
        for child in &self.children {
            out.extend(child.walk());
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoundTree {
    root: BoundNode,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    dropped: Vec<String>,
}

impl BoundTree {
    pub fn new(root: BoundNode, dropped: Vec<String>) -> Self {
        Self { root, dropped }
    }

    pub fn root(&self) -> &BoundNode {
        &self.root
    }

    /// Children of the root; every one of them is rendered as a group.
    pub fn top_level(&self) -> &[BoundNode] {
        &self.root.children
    }

    pub fn find(&self, id: &str) -> Option<&BoundNode> {
        self.root.find(id)
    }

    /// Ids of registered nodes that did not make it into the tree, in
    /// registration order.
    pub fn dropped(&self) -> &[String] {
        &self.dropped
    }

    /// Number of nodes in the tree, root and synthetic groups included.
    pub fn len(&self) -> usize {
        self.root.walk().len()
    }

    /// A tree is empty when nothing hangs off the root.
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    /// Pretty-printed JSON dump of the tree and its dropped ids.
    pub fn to_json(&self) -> AdminBarResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

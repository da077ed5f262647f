//! Node store
//!
//! Flat, insertion-ordered registry of nodes keyed by id. Knows nothing
//! about trees; the binder walks it in registration order.

use super::node::{Node, NodeArgs};
use crate::domain::value_objects::slugify;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeStore {
    nodes: Vec<Node>,
}

impl NodeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node, or merge the payload onto the node with the same id.
    ///
    /// A payload with neither id nor title is ignored. A payload with only a
    /// title gets an id derived from it (legacy registrations). A merged node
    /// keeps its original position.
    ///
    /// Returns the stored node, or `None` when the payload was ignored.
    pub fn upsert(&mut self, mut args: NodeArgs) -> Option<&Node> {
        let id = match args.id.take().filter(|id| !id.is_empty()) {
            Some(id) => id,
            None => {
                let title = args.title.as_deref().filter(|t| !t.is_empty())?;
                let derived = slugify(title);
                tracing::warn!(
                    title = %title,
                    derived = %derived,
                    "menu node registered without an id; deriving one from the title is deprecated"
                );
                if derived.is_empty() {
                    tracing::debug!(title = %title, "title yields an empty id, node ignored");
                    return None;
                }
                derived
            }
        };

        let index = match self.position(&id) {
            Some(index) => index,
            None => {
                self.nodes.push(Node::new(id));
                self.nodes.len() - 1
            }
        };

        self.nodes[index].apply(args);
        Some(&self.nodes[index])
    }

    pub fn get(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Delete a node. Its children are left in place; they will be dropped
    /// as orphans on the next bind.
    pub fn remove(&mut self, id: &str) -> Option<Node> {
        let index = self.position(id)?;
        Some(self.nodes.remove(index))
    }

    /// Nodes in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n.id == id)
    }
}

impl<'a> IntoIterator for &'a NodeStore {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

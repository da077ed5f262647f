//! Tree binder
//!
//! Turns a flat store snapshot into a tree whose levels alternate between
//! items and groups:
//!
//! - A node with no parent hangs off the root.
//! - A node whose parent is not registered is dropped.
//! - An item whose parent is also an item is moved into the parent's
//!   synthetic `{parent}-default` group. That group is created the first time
//!   it is needed and takes that position among the parent's children, so
//!   groups registered earlier under the same parent stay ahead of it.
//!
//! The store is never modified; binding the same store twice yields the same
//! tree.

use std::collections::{HashMap, HashSet};

use crate::domain::entities::{BoundNode, BoundTree, Node, NodeStore, ROOT_ID};

#[derive(Debug, Clone, Copy)]
enum Slot {
    Node(usize),
    DefaultGroup,
}

#[derive(Debug, Clone, Copy)]
enum Attachment {
    Node(usize),
    DefaultGroupOf(usize),
}

/// Adjacency built in one pass over the store.
struct Links<'a> {
    nodes: Vec<&'a Node>,
    children: Vec<Vec<Slot>>,
    defaults: Vec<Option<Vec<usize>>>,
    attached: Vec<Option<Attachment>>,
}

/// Bind a store snapshot into a tree.
pub fn bind(store: &NodeStore) -> BoundTree {
    let implicit_root = Node::root();
    let mut nodes: Vec<&Node> = store.iter().collect();
    let root = match nodes.iter().position(|n| n.id == ROOT_ID) {
        Some(index) => index,
        None => {
            tracing::debug!("no root registered, binding under an implicit root");
            nodes.push(&implicit_root);
            nodes.len() - 1
        }
    };

    let index: HashMap<&str, usize> = nodes
        .iter()
        .copied()
        .enumerate()
        .map(|(i, n)| (n.id.as_str(), i))
        .collect();

    let count = nodes.len();
    let mut links = Links {
        nodes,
        children: vec![Vec::new(); count],
        defaults: vec![None; count],
        attached: vec![None; count],
    };

    for i in 0..count {
        if i == root {
            continue;
        }
        let node = links.nodes[i];

        let parent = match node.parent_id() {
            None => root,
            Some(parent_id) => match index.get(parent_id) {
                Some(&parent) => parent,
                None => {
                    tracing::debug!(id = %node.id, parent = %parent_id, "parent not registered, node dropped");
                    continue;
                }
            },
        };

        if links.nodes[parent].is_item() && node.is_item() {
            let Links {
                children, defaults, ..
            } = &mut links;
            let group = defaults[parent].get_or_insert_with(|| {
                children[parent].push(Slot::DefaultGroup);
                Vec::new()
            });
            group.push(i);
            links.attached[i] = Some(Attachment::DefaultGroupOf(parent));
        } else {
            links.children[parent].push(Slot::Node(i));
            links.attached[i] = Some(Attachment::Node(parent));
        }
    }

    let mut reached = HashSet::new();
    let tree = links.build(root, &mut reached);

    let dropped = links
        .nodes
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != root && !reached.contains(i))
        .map(|(_, n)| n.id.clone())
        .collect::<Vec<_>>();
    if !dropped.is_empty() {
        tracing::debug!(count = dropped.len(), "nodes unreachable from root");
    }

    BoundTree::new(tree, dropped)
}

impl Links<'_> {
    fn build(&self, i: usize, reached: &mut HashSet<usize>) -> BoundNode {
        reached.insert(i);

        let mut node = self.nodes[i].clone();
        match self.attached[i] {
            Some(Attachment::Node(parent)) => node.parent = Some(self.nodes[parent].id.clone()),
            Some(Attachment::DefaultGroupOf(parent)) => {
                node.parent = Some(self.nodes[parent].default_group_id())
            }
            None => {}
        }

        let mut bound = BoundNode::new(node);
        for slot in &self.children[i] {
            let child = match *slot {
                Slot::Node(c) => self.build(c, reached),
                Slot::DefaultGroup => self.build_default_group(i, reached),
            };
            bound.children.push(child);
        }
        bound
    }

    fn build_default_group(&self, parent: usize, reached: &mut HashSet<usize>) -> BoundNode {
        let mut group = BoundNode::new(Node::default_group_for(self.nodes[parent]));
        if let Some(items) = &self.defaults[parent] {
            for &item in items {
                group.children.push(self.build(item, reached));
            }
        }
        group
    }
}

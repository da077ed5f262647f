//! Property tests for tree binding.

use std::collections::HashSet;

use proptest::prelude::*;

use adminbar::domain::services::bind;
use adminbar::BoundNode;

use crate::common::store;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: an item never sits directly under another item.
    #[test]
    fn property_items_and_groups_alternate(store in store()) {
        let tree = bind(&store);

        for node in tree.root().walk() {
            if !node.is_group() {
                for child in &node.children {
                    prop_assert!(
                        child.is_group(),
                        "item {} has item child {}",
                        node.id(),
                        child.id()
                    );
                }
            }
        }
    }

    /// PROPERTY: nodes pointing at an unregistered parent never appear.
    #[test]
    fn property_orphans_are_never_attached(store in store()) {
        let tree = bind(&store);

        for node in store.iter() {
            if node.parent_id() == Some("missing") {
                prop_assert!(tree.find(&node.id).is_none());
                prop_assert!(tree.dropped().contains(&node.id));
            }
        }
    }

    /// PROPERTY: every registered node is either bound or dropped, once.
    #[test]
    fn property_bound_and_dropped_partition_the_store(store in store()) {
        let tree = bind(&store);

        let bound: Vec<&BoundNode> = tree.root().walk();
        let mut seen = HashSet::new();
        for node in &bound {
            prop_assert!(seen.insert(node.id().to_string()), "{} bound twice", node.id());
        }

        for node in store.iter() {
            let is_bound = seen.contains(&node.id);
            let is_dropped = tree.dropped().contains(&node.id);
            prop_assert!(is_bound != is_dropped, "{} bound={} dropped={}", node.id, is_bound, is_dropped);
        }

        let synthetic = bound
            .iter()
            .filter(|n| store.get(n.id()).is_none())
            .count();
        prop_assert_eq!(bound.len() - synthetic + tree.dropped().len(), store.len());
    }

    /// PROPERTY: bound parents point at the node they hang from.
    #[test]
    fn property_parent_links_match_tree(store in store()) {
        let tree = bind(&store);

        for node in tree.root().walk() {
            for child in &node.children {
                prop_assert_eq!(child.node.parent.as_deref(), Some(node.id()));
            }
        }
    }

    /// PROPERTY: binding reads the store only and is repeatable.
    #[test]
    fn property_bind_is_pure(store in store()) {
        let before = store.clone();
        let first = bind(&store);
        let second = bind(&store);

        prop_assert_eq!(first, second);
        prop_assert_eq!(store, before);
    }
}

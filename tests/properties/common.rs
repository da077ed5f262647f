//! Shared strategies for property tests.

use proptest::prelude::*;

use adminbar::domain::entities::NodeStore;
use adminbar::{NodeArgs, NodeMeta};

/// Ids `n0..n9`; no generated id is a suffix-extension of another's
/// element id, and none collides with a synthetic `-default` group.
pub fn node_id() -> impl Strategy<Value = String> {
    (0u8..10).prop_map(|n| format!("n{}", n))
}

pub fn parent_id() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        2 => Just(None),
        1 => Just(Some("root".to_string())),
        1 => Just(Some("missing".to_string())),
        6 => node_id().prop_map(Some),
    ]
}

pub fn node_args() -> impl Strategy<Value = NodeArgs> {
    (
        node_id(),
        proptest::option::of("[A-Za-z ]{0,12}"),
        parent_id(),
        proptest::option::of("/[a-z]{0,8}"),
        proptest::option::of(any::<bool>()),
        proptest::option::of("[a-z]{1,6}"),
    )
        .prop_map(|(id, title, parent, href, group, class)| NodeArgs {
            id: Some(id),
            title,
            parent,
            href,
            group,
            meta: class.map(|class| NodeMeta {
                class: Some(class),
                ..NodeMeta::default()
            }),
        })
}

/// A store with the root registered first, then up to 24 upserts.
pub fn store() -> impl Strategy<Value = NodeStore> {
    proptest::collection::vec(node_args(), 0..24).prop_map(|args| {
        let mut store = NodeStore::new();
        store.upsert(NodeArgs::new("root"));
        for a in args {
            store.upsert(a);
        }
        store
    })
}

//! Property tests for the node store.

use proptest::prelude::*;

use adminbar::domain::entities::NodeStore;
use adminbar::NodeArgs;

use crate::common::node_args;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: ids stay unique and keep first-registration order.
    #[test]
    fn property_upsert_keeps_ids_unique_in_first_seen_order(
        args in proptest::collection::vec(node_args(), 0..32),
    ) {
        let mut store = NodeStore::new();
        let mut first_seen: Vec<String> = Vec::new();
        for a in args {
            let id = a.id.clone().unwrap();
            if !first_seen.contains(&id) {
                first_seen.push(id);
            }
            store.upsert(a);
        }

        let ids: Vec<String> = store.iter().map(|n| n.id.clone()).collect();
        prop_assert_eq!(ids, first_seen);
    }

    /// PROPERTY: an upsert with only an id changes nothing.
    #[test]
    fn property_empty_payload_merge_is_identity(
        args in proptest::collection::vec(node_args(), 1..16),
    ) {
        let mut store = NodeStore::new();
        for a in &args {
            store.upsert(a.clone());
        }
        let before = store.clone();

        let id = args[0].id.clone().unwrap();
        store.upsert(NodeArgs::new(id));
        prop_assert_eq!(store, before);
    }

    /// PROPERTY: the last present value of each field wins.
    #[test]
    fn property_last_present_title_wins(
        titles in proptest::collection::vec(proptest::option::of("[a-z]{1,8}"), 1..8),
    ) {
        let mut store = NodeStore::new();
        for title in &titles {
            store.upsert(NodeArgs {
                id: Some("n0".to_string()),
                title: title.clone(),
                ..NodeArgs::default()
            });
        }

        let expected = titles.iter().rev().find_map(|t| t.clone());
        prop_assert_eq!(store.get("n0").unwrap().title.clone(), expected);
    }
}

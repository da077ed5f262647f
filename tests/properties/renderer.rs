//! Property tests for rendering.

use std::collections::HashSet;

use proptest::prelude::*;

use adminbar::domain::services::{bind, render};
use adminbar::markup::Element;
use adminbar::RenderContext;

use crate::common::store;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: rendering any registry yields one bar container.
    #[test]
    fn property_render_never_panics(store in store()) {
        let tree = bind(&store);
        let html = render(&tree, &RenderContext::default()).to_html();

        prop_assert!(html.starts_with(r#"<div id="wpadminbar" class="nojq nojs" role="navigation"><div class="quicklinks" role="menubar">"#));
        prop_assert!(html.ends_with("</div></div>"));
        prop_assert_eq!(html.matches("<ul ").count(), html.matches("</ul>").count());
        prop_assert_eq!(html.matches("<li ").count(), html.matches("</li>").count());
    }

    /// PROPERTY: no element id is emitted twice.
    #[test]
    fn property_element_ids_are_unique(store in store()) {
        let tree = bind(&store);
        let markup = render(&tree, &RenderContext::default());
        let bar = markup.as_element().unwrap();

        let mut seen = HashSet::new();
        for el in bar.descendants() {
            if let Some(id) = el.id() {
                prop_assert!(seen.insert(id.to_string()), "duplicate id {}", id);
            }
        }
    }

    /// PROPERTY: every entry is a bound item and dropped nodes never render.
    #[test]
    fn property_entries_are_bound_items(store in store()) {
        let tree = bind(&store);
        let markup = render(&tree, &RenderContext::default());
        let bar = markup.as_element().unwrap();

        let entries: Vec<&Element> = bar.descendants().into_iter().filter(|el| el.tag == "li").collect();
        for entry in &entries {
            let id = entry.id().unwrap().strip_prefix("wp-admin-bar-").unwrap();
            let node = tree.find(id);
            prop_assert!(node.is_some_and(|n| !n.is_group()), "{} is not a bound item", id);

            let label = entry.child_elements().next().unwrap();
            prop_assert!(label.has_class("ab-item"));
            prop_assert_eq!(label.get_attr("role"), Some("menuitem"));
        }

        for id in tree.dropped() {
            let element_id = format!("wp-admin-bar-{}", id);
            prop_assert!(bar.find_by_id(&element_id).is_none());
        }
    }
}

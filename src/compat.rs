//! Deprecated entry points
//!
//! Older integrations call the bar through these names. Each one logs a
//! deprecation notice and forwards to the current API.

use crate::application::AdminBar;
use crate::domain::entities::{BoundNode, Node, NodeArgs};
use crate::domain::services::render_item;

/// Register a node through the old menu name.
#[deprecated(since = "0.1.0", note = "use AdminBar::add_node instead")]
pub fn add_menu(bar: &mut AdminBar, args: NodeArgs) {
    tracing::warn!("add_menu is deprecated, use add_node");
    bar.add_node(args);
}

/// Remove a node through the old menu name.
#[deprecated(since = "0.1.0", note = "use AdminBar::remove_node instead")]
pub fn remove_menu(bar: &mut AdminBar, id: &str) {
    tracing::warn!(id, "remove_menu is deprecated, use remove_node");
    bar.remove_node(id);
}

/// Register a node with the parent passed separately.
///
/// A `parent` set on `args` takes precedence over `parent_id`.
#[deprecated(since = "0.1.0", note = "set NodeArgs::parent and call AdminBar::add_node")]
pub fn add_node_legacy(bar: &mut AdminBar, parent_id: &str, mut args: NodeArgs) {
    tracing::warn!(parent = parent_id, "three-argument add_node is deprecated");
    if args.parent.is_none() {
        args.parent = Some(parent_id.to_string());
    }
    bar.add_node(args);
}

/// The old `menu` property. Nodes are no longer exposed this way, so the
/// result is always empty; use [`AdminBar::nodes`].
#[deprecated(since = "0.1.0", note = "use AdminBar::nodes instead")]
pub fn menu(_bar: &AdminBar) -> Vec<Node> {
    tracing::warn!("menu is deprecated and always empty, use nodes");
    Vec::new()
}

/// Render one bound item to markup text. Groups render as nothing.
#[deprecated(since = "0.1.0", note = "use domain::services::render_item instead")]
pub fn recursive_render(node: &BoundNode) -> String {
    tracing::warn!(id = node.id(), "recursive_render is deprecated, use render_item");
    render_item(node)
        .map(|markup| markup.to_html())
        .unwrap_or_default()
}

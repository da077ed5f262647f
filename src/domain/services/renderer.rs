//! Renderer
//!
//! Walks a bound tree and builds the bar's element tree. Groups become
//! `ul` lists (or a container of lists when they hold nested groups), items
//! become `li` entries with a link or label and, for parents, a submenu.

use crate::domain::entities::{BoundNode, BoundTree, Node};
use crate::domain::value_objects::RenderContext;
use crate::markup::{Element, Escape, Markup};

pub const BAR_ID: &str = "wpadminbar";
pub const ID_PREFIX: &str = "wp-admin-bar-";
pub const TOP_MENU_CLASS: &str = "ab-top-menu";
pub const SUBMENU_CLASS: &str = "ab-submenu";
pub const SUB_WRAPPER_CLASS: &str = "ab-sub-wrapper";
pub const GROUP_CONTAINER_CLASS: &str = "ab-group-container";
pub const PARENT_ITEM_CLASS: &str = "menupop";
pub const DEFAULT_TABINDEX: i32 = 10;

/// Render the whole bar.
pub fn render(tree: &BoundTree, context: &RenderContext) -> Markup {
    let quicklinks = Element::new("div")
        .attr("class", "quicklinks")
        .attr("role", "menubar")
        .children(
            tree.top_level()
                .iter()
                .filter_map(|group| render_group(group, TOP_MENU_CLASS)),
        );

    Element::new("div")
        .attr("id", BAR_ID)
        .attr("class", context.bar_class())
        .attr("role", "navigation")
        .child(quicklinks)
        .into()
}

/// One entry of a group after partitioning its children.
enum Subgroup<'a> {
    /// A group child, rendered on its own
    Explicit(&'a BoundNode),
    /// The group's item children, rendered as a copy of the group itself
    Items(Vec<&'a BoundNode>),
}

/// Render a group. Items and non-groups yield nothing.
pub fn render_group(group: &BoundNode, class: &str) -> Option<Markup> {
    let children: Vec<&BoundNode> = group.children.iter().collect();
    render_group_with(&group.node, &children, class)
}

fn render_group_with(node: &Node, children: &[&BoundNode], class: &str) -> Option<Markup> {
    if !node.is_group() || children.is_empty() {
        return None;
    }

    let mut subgroups: Vec<Subgroup<'_>> = Vec::new();
    let mut items_at: Option<usize> = None;
    for &child in children {
        if child.is_group() {
            subgroups.push(Subgroup::Explicit(child));
            continue;
        }
        match items_at {
            Some(at) => {
                if let Subgroup::Items(items) = &mut subgroups[at] {
                    items.push(child);
                }
            }
            None => {
                items_at = Some(subgroups.len());
                subgroups.push(Subgroup::Items(vec![child]));
            }
        }
    }

    tracing::trace!(id = %node.id, subgroups = subgroups.len(), "partitioned group");

    if subgroups.len() == 1 {
        let class = match node.meta.class() {
            Some(extra) => format!("{} {}", class, extra),
            None => class.to_string(),
        };
        let list = Element::new("ul")
            .attr("id", element_id(&node.id))
            .attr("class", class)
            .attr("role", "menu")
            .children(children.iter().filter_map(|item| render_item(item)));
        return Some(list.into());
    }

    let container = Element::new("div")
        .attr("id", format!("{}{}-container", ID_PREFIX, node.id))
        .attr("class", GROUP_CONTAINER_CLASS)
        .attr("role", "menu")
        .children(subgroups.iter().filter_map(|subgroup| match subgroup {
            Subgroup::Explicit(group) => render_group(group, class),
            Subgroup::Items(items) => render_group_with(node, items, class),
        }));
    Some(container.into())
}

/// Render an item. Groups yield nothing.
pub fn render_item(item: &BoundNode) -> Option<Markup> {
    let node = &item.node;
    if node.is_group() {
        return None;
    }

    let is_parent = item.is_parent();
    let tabindex = node.meta.tabindex.unwrap_or(DEFAULT_TABINDEX).to_string();

    let mut menu_class = String::new();
    if is_parent {
        menu_class.push_str(PARENT_ITEM_CLASS);
    }
    if let Some(extra) = node.meta.class() {
        menu_class.push(' ');
        menu_class.push_str(extra);
    }

    let label = match node.href() {
        Some(href) => Element::new("a")
            .attr("class", "ab-item")
            .attr("tabindex", tabindex)
            .attr("role", "menuitem")
            .attr_opt("aria-haspopup", is_parent.then_some("true"), Escape::Attr)
            .attr_escaped("href", href, Escape::Url)
            .attr_opt("onclick", node.meta.onclick(), Escape::Js)
            .attr_opt("target", node.meta.target(), Escape::Attr)
            .attr_opt("title", node.meta.tooltip(), Escape::Attr),
        None => Element::new("div")
            .attr("class", "ab-item ab-empty-item")
            .attr("tabindex", tabindex)
            .attr("role", "menuitem")
            .attr_opt("aria-haspopup", is_parent.then_some("true"), Escape::Attr)
            .attr_opt("title", node.meta.tooltip(), Escape::Attr),
    };
    let label = match &node.title {
        Some(title) => label.child(Markup::Raw(title.clone())),
        None => label,
    };

    let mut entry = Element::new("li")
        .attr("id", element_id(&node.id))
        .attr("class", menu_class)
        .child(label);

    if is_parent {
        let submenu = Element::new("div").attr("class", SUB_WRAPPER_CLASS).children(
            item.children
                .iter()
                .filter_map(|group| render_group(group, SUBMENU_CLASS)),
        );
        entry = entry.child(submenu);
    }

    if let Some(html) = node.meta.html() {
        entry = entry.child(Markup::Raw(html.to_string()));
    }

    Some(entry.into())
}

/// Element id of a node in the rendered bar.
pub fn element_id(node_id: &str) -> String {
    format!("{}{}", ID_PREFIX, node_id)
}

//! Admin bar facade
//!
//! The programmatic surface used by menu contributors: register, merge,
//! look up and remove nodes, then bind and render once per request.

use super::hooks::{MenuContributor, MenuHooks};
use crate::config::Config;
use crate::domain::entities::{BoundTree, Node, NodeArgs, NodeStore, ROOT_ID};
use crate::domain::services;
use crate::domain::value_objects::RenderContext;
use crate::markup::Markup;

/// A navigation bar under construction.
///
/// Created with the root node already registered. Build one per request and
/// drop it after rendering.
#[derive(Debug)]
pub struct AdminBar {
    store: NodeStore,
    hooks: MenuHooks,
}

impl Default for AdminBar {
    fn default() -> Self {
        Self::new()
    }
}

impl AdminBar {
    pub fn new() -> Self {
        let mut store = NodeStore::new();
        store.upsert(NodeArgs::new(ROOT_ID).group(false));
        Self {
            store,
            hooks: MenuHooks::new(),
        }
    }

    /// A bar pre-populated with every node of a menu definition, in order.
    pub fn from_config(config: &Config) -> Self {
        let mut bar = Self::new();
        for args in &config.nodes {
            bar.add_node(args.clone());
        }
        bar
    }

    /// Register a node, or merge into an existing one with the same id.
    ///
    /// Payloads with neither id nor title are ignored.
    pub fn add_node(&mut self, args: NodeArgs) {
        if self.store.upsert(args).is_none() {
            tracing::debug!("node without id or title ignored");
        }
    }

    /// Register a group: `add_node` with the group flag forced on.
    pub fn add_group(&mut self, args: NodeArgs) {
        self.add_node(args.group(true));
    }

    /// Remove a node. Children are not removed; they are dropped from the
    /// tree on the next bind because their parent is gone.
    pub fn remove_node(&mut self, id: &str) {
        self.store.remove(id);
    }

    pub fn get_node(&self, id: &str) -> Option<&Node> {
        self.store.get(id)
    }

    /// Registered nodes in registration order, root included.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.store.iter()
    }

    pub fn store(&self) -> &NodeStore {
        &self.store
    }

    /// Register a contributor to run during [`AdminBar::populate`].
    pub fn on_menu(&mut self, priority: i32, contributor: impl MenuContributor + 'static) {
        self.hooks.add(priority, contributor);
    }

    /// Run registered contributors once. Later calls do nothing unless new
    /// contributors were registered in between.
    pub fn populate(&mut self) {
        let hooks = std::mem::take(&mut self.hooks);
        if !hooks.is_empty() {
            tracing::debug!(contributors = hooks.len(), "populating admin bar");
        }
        hooks.run(self);
    }

    /// Bind the current registry into a tree.
    pub fn bind(&self) -> BoundTree {
        services::bind(&self.store)
    }

    /// Bind and build the bar's element tree.
    pub fn render_markup(&self, context: &RenderContext) -> Markup {
        let tree = self.bind();
        services::render(&tree, context)
    }

    /// Bind and render to markup text.
    pub fn render(&self, context: &RenderContext) -> String {
        self.render_markup(context).to_html()
    }
}

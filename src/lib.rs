//! adminbar - a persistent navigation bar built from a flat node registry
//!
//! Contributors register nodes into an [`AdminBar`]. Rendering binds the
//! registry into a tree where items and groups strictly alternate, then
//! serializes that tree into nested markup.
//!
//! ```
//! use adminbar::{AdminBar, NodeArgs, RenderContext};
//!
//! let mut bar = AdminBar::new();
//! bar.add_node(NodeArgs::new("site-name").title("My Site"));
//! bar.add_node(NodeArgs::new("visit-site").title("Visit Site").parent("site-name").href("/"));
//!
//! let html = bar.render(&RenderContext::default());
//! assert!(html.contains(r#"<ul id="wp-admin-bar-site-name-default" class="ab-submenu" role="menu">"#));
//! ```

pub mod application;
pub mod compat;
pub mod config;
pub mod domain;
pub mod error;
pub mod markup;
pub mod presentation;

// Re-exports for convenience
pub use application::{AdminBar, MenuContributor};
pub use config::{Config, ConfigWarning};
pub use domain::entities::{BoundNode, BoundTree, Node, NodeArgs, NodeMeta};
pub use domain::value_objects::{Browser, RenderContext};
pub use error::{AdminBarError, AdminBarResult};
pub use markup::Markup;

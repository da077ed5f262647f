//! Domain Entities
//!
//! - `Node` / `NodeArgs` - A registered menu entry and its registration payload
//! - `NodeStore` - Flat registry of nodes in registration order
//! - `BoundTree` - The tree produced by binding a store snapshot

mod node;
mod node_store;
mod tree;

pub use node::{Node, NodeArgs, NodeMeta, DEFAULT_GROUP_SUFFIX, ROOT_ID};
pub use node_store::NodeStore;
pub use tree::{BoundNode, BoundTree};

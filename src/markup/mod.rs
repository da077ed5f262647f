//! Markup output
//!
//! - `tree` - Element tree built by the renderer, and its serializer
//! - `escaping` - Per-context escaping applied while serializing attributes

pub mod escaping;
mod tree;

pub use escaping::Escape;
pub use tree::{Attribute, Element, Markup};

//! Domain services
//!
//! Pure functions over the node model: `bind` turns a store into a tree,
//! `render` turns a tree into markup. Neither performs I/O or mutates input.

pub mod binder;
pub mod renderer;

pub use binder::bind;
pub use renderer::{render, render_group, render_item};

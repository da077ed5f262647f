//! Domain Layer
//!
//! The menu engine itself: node records, the flat store, binding and
//! rendering. Nothing here touches the file system or ambient process state.
//!
//! ## Structure
//!
//! - `entities/` - Node, NodeStore, BoundTree
//! - `value_objects/` - RenderContext, title slugs
//! - `services/` - Binder and renderer

pub mod entities;
pub mod services;
pub mod value_objects;

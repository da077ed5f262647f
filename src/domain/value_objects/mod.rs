//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod render_context;
mod slug;

pub use render_context::{Browser, RenderContext};
pub use slug::slugify;

pub(crate) use slug::entity_len;

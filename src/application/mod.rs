//! Application Layer
//!
//! - `admin_bar` - `AdminBar`, the registry/bind/render facade
//! - `hooks` - Priority-ordered menu contributors that populate a bar

mod admin_bar;
mod hooks;

pub use admin_bar::AdminBar;
pub use hooks::{MenuContributor, MenuHooks};

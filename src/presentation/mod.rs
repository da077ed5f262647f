//! Presentation Layer
//!
//! Command-line argument parsing. The binary's command handlers live next to
//! `main.rs` and use this module for their arguments.

pub mod cli;

pub use cli::{Cli, Commands};

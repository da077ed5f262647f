//! Command handlers for the `adminbar` binary

pub mod check;
pub mod render;
pub mod tree;

use std::path::Path;

use adminbar::config::{Config, ConfigWarning};
use adminbar::AdminBar;
use anyhow::{Context, Result};

/// Load a menu definition, apply environment overrides and build the bar.
pub(crate) fn load_bar(file: &Path) -> Result<(Config, AdminBar, Vec<ConfigWarning>)> {
    let (config, warnings) = Config::load_with_warnings(file)
        .with_context(|| format!("failed to load {}", file.display()))?;
    let config = config.with_env_overrides();

    let mut bar = AdminBar::from_config(&config);
    bar.populate();
    Ok((config, bar, warnings))
}

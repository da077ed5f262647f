//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::entities::NodeArgs;
use crate::domain::value_objects::RenderContext;
use crate::error::AdminBarResult;

use super::loader::{self, ConfigWarning};

/// Render settings
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RenderConfig {
    /// `User-Agent` of the request being rendered for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,

    /// Whether the page is served over TLS; selects `RenderContext::proto`
    #[serde(default)]
    pub secure: bool,
}

/// A menu definition: render settings plus the nodes to register, in order.
///
/// ```toml
/// [render]
/// secure = true
///
/// [[node]]
/// id = "site-name"
/// title = "My Site"
///
/// [[node]]
/// id = "visit-site"
/// parent = "site-name"
/// href = "/"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,

    #[serde(default, rename = "node", skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<NodeArgs>,
}

impl Config {
    /// Load a menu definition from a TOML file
    pub fn load(path: &Path) -> AdminBarResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load a menu definition and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> AdminBarResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (ADMINBAR_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    pub fn render_context(&self) -> RenderContext {
        RenderContext::from_user_agent(self.render.user_agent.as_deref(), self.render.secure)
    }
}

//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use strsim::levenshtein;

use crate::error::{AdminBarError, AdminBarResult};

use super::types::Config;

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load a menu definition and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> AdminBarResult<(Config, Vec<ConfigWarning>)> {
    if !path.exists() {
        return Err(AdminBarError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

pub(crate) fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> AdminBarResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown: Vec<Vec<String>> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        let mut keys = Vec::new();
        table_keys(&p, &mut keys);
        unknown.push(keys);
    })
    .map_err(|e| AdminBarError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown
        .into_iter()
        .filter_map(|mut keys| {
            let key = keys.pop()?;
            let section = Section::of(keys.last().map(String::as_str));
            tracing::warn!(key = %key, file = %path.display(), "unknown key in menu definition");
            Some(ConfigWarning {
                line: key_line(content, &key),
                suggestion: section.suggest(&key),
                key,
                file: path.to_path_buf(),
            })
        })
        .collect();

    Ok((config, warnings))
}

/// Apply environment variable overrides (ADMINBAR_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |name| std::env::var(name).ok())
}

pub(crate) fn apply_overrides(
    mut config: Config,
    var: impl Fn(&str) -> Option<String>,
) -> Config {
    // ADMINBAR_USER_AGENT
    if let Some(user_agent) = var("ADMINBAR_USER_AGENT") {
        config.render.user_agent = Some(user_agent).filter(|ua| !ua.is_empty());
    }

    // ADMINBAR_SECURE
    if let Some(val) = var("ADMINBAR_SECURE") {
        config.render.secure = matches!(val.to_lowercase().as_str(), "1" | "true" | "yes" | "on");
    }

    config
}

/// Table keys along an ignored path, outermost first. Array indices and
/// option wrappers are skipped, so `node.0.meta.?.clas` reads as
/// `["node", "meta", "clas"]`.
fn table_keys(path: &serde_ignored::Path<'_>, out: &mut Vec<String>) {
    use serde_ignored::Path;

    match path {
        Path::Root => {}
        Path::Map { parent, key } => {
            table_keys(parent, out);
            out.push(key.clone());
        }
        Path::Seq { parent, .. }
        | Path::Some { parent }
        | Path::NewtypeStruct { parent }
        | Path::NewtypeVariant { parent } => table_keys(parent, out),
    }
}

/// Table an unknown key was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Top,
    Render,
    Node,
    Meta,
}

impl Section {
    fn of(table: Option<&str>) -> Self {
        match table {
            Some("render") => Section::Render,
            Some("node") => Section::Node,
            Some("meta") => Section::Meta,
            _ => Section::Top,
        }
    }

    fn keys(self) -> &'static [&'static str] {
        match self {
            Section::Top => &["render", "node"],
            Section::Render => &["user_agent", "secure"],
            Section::Node => &["id", "title", "parent", "href", "group", "meta"],
            Section::Meta => &["class", "onclick", "target", "title", "tabindex", "html"],
        }
    }

    /// Closest valid key of this table, if it is at most two edits away.
    fn suggest(self, unknown: &str) -> Option<String> {
        self.keys()
            .iter()
            .map(|key| (*key, levenshtein(unknown, key)))
            .filter(|(_, distance)| *distance <= 2)
            .min_by_key(|(_, distance)| *distance)
            .map(|(key, _)| key.to_string())
    }
}

/// 1-based line on which `key` is assigned.
fn key_line(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            line.trim_start()
                .strip_prefix(key)
                .is_some_and(|rest| rest.trim_start().starts_with('='))
        })
        .map(|index| index + 1)
}
